//! Terminal front-end for the font preview browser
//!
//! Reads one command per line from stdin and prints view updates to stdout.
//! Logs go to stderr so they can be silenced with `RUST_LOG` without losing
//! the listing.

mod command;
mod view;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use command::{Command, HELP};
use fontview_client::HttpFontServer;
use fontview_core::{AppEvent, BrowserConfig, BrowserController};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use view::TerminalView;

/// Browse fonts served by a font preview server
#[derive(Debug, Parser)]
#[command(name = "fontview", version)]
struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long)]
    server: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport height in view units
    #[arg(long)]
    viewport_height: Option<f64>,

    /// Viewport heights preloaded above and below the visible area
    #[arg(long)]
    extent: Option<f64>,
}

impl Cli {
    fn browser_config(&self) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::load_or_default(self.config.as_deref())?;
        if let Some(server) = &self.server {
            config.server.base_url.clone_from(server);
        }
        if let Some(height) = self.viewport_height {
            config.viewport_height = height;
        }
        if let Some(extent) = self.extent {
            config.extent = extent;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout is the listing, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.browser_config().context("Invalid configuration")?;
    let server = HttpFontServer::new(&config.server).context("Failed to create HTTP client")?;
    tracing::info!("Using font server at {}", server.base_url());

    let view = TerminalView::new(std::io::stdout(), config.row_height);
    let mut controller = BrowserController::new(Arc::new(server), view, &config);
    controller.view_mut().print("Type 'help' for commands.");
    controller.start();

    run_session(&mut controller, BufReader::new(tokio::io::stdin())).await
}

/// Applies input commands and completions as they come. At end of input the
/// remaining fetches are awaited so piped scripts still print their results;
/// `quit` leaves immediately.
async fn run_session<R, W>(
    controller: &mut BrowserController<TerminalView<W>>,
    input: R,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    controller.settle().await;
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => dispatch(controller, command),
                    Ok(None) => {}
                    Err(e) => controller.view_mut().print(&format!("{e}")),
                }
            }
            Some(completion) = controller.next_completion() => {
                controller.handle_completion(completion);
            }
        }
    }

    tracing::debug!("Exiting with {} fetches in flight", controller.in_flight());
    Ok(())
}

fn dispatch<W: Write>(controller: &mut BrowserController<TerminalView<W>>, command: Command) {
    match command {
        Command::Event(event) => controller.handle_event(event),
        Command::Open(n) => match controller.view().directory_entry(n).map(str::to_string) {
            Some(path) if n == 0 => controller.handle_event(AppEvent::Scan(path)),
            Some(path) => controller.handle_event(AppEvent::Browse(path)),
            None => controller.view_mut().print(&format!("No directory entry {n}")),
        },
        Command::ScanCurrent => {
            let path = controller.state().current_directory.clone();
            controller.handle_event(AppEvent::Scan(path));
        }
        Command::Page(pages) => {
            let viewport = controller.state().viewport;
            let offset = (viewport.scroll_offset + pages * viewport.height).max(0.0);
            controller.handle_event(AppEvent::Scroll(offset));
        }
        Command::Hover(n) => match controller.view().element_at(n) {
            Some(element) => controller.handle_event(AppEvent::PointerEnter(element)),
            None => controller.view_mut().print(&format!("No font row {n}")),
        },
        Command::Leave(n) => match controller.view().element_at(n) {
            Some(element) => controller.handle_event(AppEvent::PointerLeave(element)),
            None => controller.view_mut().print(&format!("No font row {n}")),
        },
        Command::List => controller.view_mut().print_list(),
        Command::Help => controller.view_mut().print(HELP),
        Command::Quit => {}
    }
}
