//! Portpanel CLI
//!
//! Shows the port status and event log in the terminal, sends commands, or
//! serves the panel as a local web page.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use portpanel::io::{HttpClient, ReqwestHttpClient};
use portpanel::view::TerminalView;
use portpanel::{build_panel, load_config, Command, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "portpanel")]
#[command(about = "Status, log and command panel for a garage port controller")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: Level,

    /// Print the status label without color
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand, Clone, Copy)]
enum Action {
    /// Show status and log once
    Show,
    /// Show the port status
    Status,
    /// Show the event log
    Log,
    /// Open the port
    Open,
    /// Close the port
    Close,
    /// Toggle the port
    Toggle,
    /// Press the toggle button: send whatever the current status calls for
    Press,
    /// Refresh status and log until interrupted
    Watch {
        /// Seconds between refreshes (overrides config file)
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Serve the panel as a web page
    Serve {
        /// Port to listen on (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Action {
    fn command(self) -> Option<Command> {
        match self {
            Action::Open => Some(Command::Open),
            Action::Close => Some(Command::Close),
            Action::Toggle => Some(Command::Toggle),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.backend.set_base_url(base_url);
    }

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let view = Arc::new(TerminalView::stdout(!args.no_color));
    let panel = build_panel(&config, Arc::clone(&http), view);

    let action = args.action.unwrap_or(Action::Show);
    if let Some(command) = action.command() {
        if !panel.supports(command) {
            return Err(format!(
                "the {} backend has no '{}' command",
                config.backend.type_name(),
                command
            )
            .into());
        }
    }

    let succeeded = match action {
        Action::Show => {
            panel.refresh().await;
            true
        }
        Action::Status => panel.refresh_status().await.is_some(),
        Action::Log => {
            panel.refresh_log().await;
            true
        }
        Action::Open => panel.send_command(Command::Open).await,
        Action::Close => panel.send_command(Command::Close).await,
        Action::Toggle => panel.send_command(Command::Toggle).await,
        Action::Press => panel.press_toggle().await,
        Action::Watch { interval } => {
            let seconds = interval.unwrap_or(config.watch.polling_interval_seconds);
            if seconds == 0 {
                return Err("--interval must be greater than zero".into());
            }
            let cancel = portpanel::shutdown_token();
            portpanel::watch::watch(&panel, Duration::from_secs(seconds), cancel).await;
            true
        }
        Action::Serve { port } => {
            if let Some(port) = port {
                config.dashboard.port = port;
            }
            tracing::info!("Starting portpanel dashboard");
            portpanel::serve(&config, http, portpanel::shutdown_token()).await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
