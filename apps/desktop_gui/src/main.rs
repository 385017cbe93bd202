use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use policy_core::{ContactFormHandler, HttpSink, LogSink, SubmissionSink};
use shared::catalog::PAGE_TITLE;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{PolicyCenterApp, StartupConfig};

#[derive(Debug, Parser)]
#[command(name = "desktop_gui", about = "Policy center desktop viewer")]
struct Args {
    /// Policy center server to forward contact submissions to. Submissions
    /// are only logged when omitted.
    #[arg(long)]
    server_url: Option<String>,
    /// Override for the response window quoted after a successful submission.
    #[arg(long)]
    response_window: Option<String>,
    /// Section to open on launch.
    #[arg(long)]
    section: Option<String>,
}

fn build_handler(args: &Args) -> anyhow::Result<ContactFormHandler> {
    let sink: Arc<dyn SubmissionSink> = match args.server_url.as_deref() {
        Some(url) => {
            let sink = HttpSink::for_server(url)
                .with_context(|| format!("invalid --server-url '{url}'"))?;
            info!(endpoint = %sink.endpoint(), "forwarding contact submissions");
            Arc::new(sink)
        }
        None => Arc::new(LogSink),
    };
    let handler = ContactFormHandler::new(sink);
    Ok(match args.response_window.clone() {
        Some(window) => handler.with_response_window(window),
        None => handler,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let handler = build_handler(&args)?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let _worker = backend_bridge::runtime::launch(cmd_rx, ui_tx, handler.clone())?;

    let startup = StartupConfig {
        initial_section: args.section,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PAGE_TITLE)
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PolicyCenterApp::new(
                cmd_tx, ui_rx, handler, startup,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("desktop viewer failed: {e}"))
}
