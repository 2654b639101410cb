use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use rowsync::cli_exec;
use rowsync::model::Group;
use rowsync::remote::DeviceClient;

#[derive(Parser)]
#[command(name = "rowsync")]
#[command(about = "Guidance-camera settings console", long_about = None)]
struct Cli {
    /// Device base URL (overrides .rowsync.json)
    #[arg(long, global = true)]
    device: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure or show the device address
    Device {
        #[command(subcommand)]
        command: DeviceCommands,
    },

    /// Fetch and print a settings group (camera, dash, advanced)
    Show {
        group: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Overlay NAME=VALUE assignments on the fetched group and save
    Set {
        group: String,
        /// Assignments, e.g. HUE_MIN=50
        values: Vec<String>,
        /// Camera highlight / dashboard inverted-PWM toggle state
        #[arg(long)]
        toggle: bool,
    },

    /// Reset a group to factory defaults, locally and on the device
    Reset { group: String },

    /// Write dashboard settings, then run the device calibration routine
    Calibrate,

    /// Print a fresh snapshot URL, or download the image
    Snapshot {
        /// Write the JPEG to this path instead of printing the URL
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the device log
    Log,

    /// Interactive console (tabs: camera, dashboard, advanced, about)
    Tui,
}

#[derive(Subcommand)]
enum DeviceCommands {
    /// Show the configured device
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the configured device
    Set {
        #[arg(long)]
        url: String,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Device { command } => match command {
            DeviceCommands::Show { json } => cli_exec::device_show(&cwd, json),
            DeviceCommands::Set { url } => cli_exec::device_set(&cwd, url),
        },
        Commands::Show { group, json } => {
            let client = client_for(&cwd, cli.device)?;
            cli_exec::show(&client, Group::parse(&group)?, json)
        }
        Commands::Set {
            group,
            values,
            toggle,
        } => {
            let client = client_for(&cwd, cli.device)?;
            cli_exec::set(&client, Group::parse(&group)?, &values, toggle)
        }
        Commands::Reset { group } => {
            let client = client_for(&cwd, cli.device)?;
            cli_exec::reset(&client, Group::parse(&group)?)
        }
        Commands::Calibrate => {
            let client = client_for(&cwd, cli.device)?;
            cli_exec::calibrate(&client)
        }
        Commands::Snapshot { out } => {
            let client = client_for(&cwd, cli.device)?;
            cli_exec::snapshot(&client, out)
        }
        Commands::Log => {
            let client = client_for(&cwd, cli.device)?;
            cli_exec::log(&client)
        }
        Commands::Tui => {
            let base_url = cli_exec::resolve_base_url(&cwd, cli.device)?;
            rowsync::tui::run(&base_url)
        }
    }
}

fn client_for(cwd: &std::path::Path, flag: Option<String>) -> Result<DeviceClient> {
    let base_url = cli_exec::resolve_base_url(cwd, flag)?;
    DeviceClient::new(&base_url)
}
