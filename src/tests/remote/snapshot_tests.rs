use super::*;

fn dummy_token(url: &str) -> &str {
    url.split("?dummy=").nth(1).expect("url has a dummy query")
}

#[test]
fn image_urls_differ_only_in_the_cache_token() {
    let client = DeviceClient::new("http://10.0.0.1").expect("build client");
    let first = client.next_image_url();
    let second = client.next_image_url();

    assert!(first.starts_with("http://10.0.0.1/out.jpg?dummy="));
    assert!(second.starts_with("http://10.0.0.1/out.jpg?dummy="));
    assert_ne!(dummy_token(&first), dummy_token(&second));

    // Token is a bare number, nothing else varies.
    dummy_token(&first).parse::<u32>().expect("numeric token");
    dummy_token(&second).parse::<u32>().expect("numeric token");
}

#[test]
fn base_url_trailing_slash_is_normalized() {
    let client = DeviceClient::new("http://10.0.0.1/").expect("build client");
    assert_eq!(client.base_url(), "http://10.0.0.1");
    assert_eq!(client.log_url(), "http://10.0.0.1/logs/log.txt");
}
