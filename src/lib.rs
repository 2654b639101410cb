pub mod cli_exec;
pub mod config;
pub mod model;
pub mod remote;
pub mod tui;
pub mod tui_shell;
