use anyhow::Result;

pub fn run(base_url: &str) -> Result<()> {
    crate::tui_shell::run(base_url)
}
