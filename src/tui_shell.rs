//! Tabbed console over the device API: Camera, Dashboard, Advanced, About.
//! Entering a tab re-fetches that tab's settings group; edits stay local
//! until saved.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

mod app;
use app::App;

mod view;

pub fn run(base_url: &str) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = App::connect(base_url).and_then(|mut app| run_loop(&mut terminal, &mut app));

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| view::render(app, frame))
            .context("draw frame")?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(200)).context("poll events")? {
            match event::read().context("read event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('1') => app.switch_tab(app::Tab::Camera),
        KeyCode::Char('2') => app.switch_tab(app::Tab::Dashboard),
        KeyCode::Char('3') => app.switch_tab(app::Tab::Advanced),
        KeyCode::Char('4') => app.switch_tab(app::Tab::About),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Left | KeyCode::Char('h') => app.adjust(-1),
        KeyCode::Right | KeyCode::Char('l') => app.adjust(1),
        KeyCode::Char(' ') => app.flip_toggle(),
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('c') => app.calibrate(),
        _ => {}
    }
}
