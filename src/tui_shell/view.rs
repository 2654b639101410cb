use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use super::app::{App, TABS, Tab};

pub(super) fn render(app: &App, frame: &mut ratatui::Frame) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let titles: Vec<Line> = TABS
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();
    let selected_tab = TABS.iter().position(|t| *t == app.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected_tab)
        .block(Block::default().borders(Borders::ALL).title("rowsync"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, parts[0]);

    match app.tab {
        Tab::About => render_about(app, frame, parts[1]),
        _ => render_settings(app, frame, parts[1]),
    }

    let mut status_lines = vec![Line::from(app.status.clone())];
    if app.tab != Tab::About {
        status_lines.push(Line::from(Span::styled(
            format!("snapshot: {}", app.image_url),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(status_lines).block(Block::default().borders(Borders::ALL)),
        parts[2],
    );

    frame.render_widget(
        Paragraph::new(hints_for(app.tab)).style(Style::default().fg(Color::DarkGray)),
        parts[3],
    );
}

fn render_settings(app: &App, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    let Some(group) = app.tab.group() else {
        return;
    };

    let mut rows: Vec<ListItem> = app
        .screen
        .values
        .settings()
        .into_iter()
        .map(|s| ListItem::new(format!("{:<22} {:>6}", s.name, s.value.to_string())))
        .collect();
    if let Some(toggle_name) = group.toggle_name() {
        let state = if app.screen.toggle { "on" } else { "off" };
        rows.push(ListItem::new(format!("{:<22} {:>6}", toggle_name, state)));
    }

    let title = if app.screen.defaulted {
        format!("{} (factory defaults)", app.tab.title())
    } else {
        app.tab.title().to_string()
    };

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.selected.min(rows.len() - 1)));
    }

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_about(app: &App, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    let lines = vec![
        Line::from(format!("rowsync {}", env!("CARGO_PKG_VERSION"))),
        Line::from(""),
        Line::from(format!("device:   {}", app.base_url())),
        Line::from(format!("log:      {}", app.log_url())),
        Line::from(format!("snapshot: {}", app.image_url)),
        Line::from(""),
        Line::from("Settings screens fetch from the device on entry and"),
        Line::from("fall back to factory defaults when it is unreachable."),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("About")),
        area,
    );
}

fn hints_for(tab: Tab) -> &'static str {
    match tab {
        Tab::Dashboard => {
            "tab/1-4 switch  ↑↓ select  ←→ adjust  space toggle  s save  r reset  c calibrate  q quit"
        }
        Tab::About => "tab/1-4 switch  q quit",
        _ => "tab/1-4 switch  ↑↓ select  ←→ adjust  space toggle  s save  r reset  q quit",
    }
}
