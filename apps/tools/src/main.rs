use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use policy_core::{ContactFormHandler, FormEffect, HttpSink, LogSink, SubmissionSink};
use server_api::{list_sections, render_policy_center};
use shared::protocol::ContactFields;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tools", about = "Policy center maintenance commands")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print section ids and labels in navigation order.
    Sections,
    /// Write the rendered page to a static HTML file.
    Render {
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        section: Option<String>,
    },
    /// Validate and forward a contact submission.
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Forwarding endpoint; the submission is only logged when omitted.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let output = run(cli.command).await?;
    println!("{output}");
    Ok(())
}

async fn run(command: Command) -> Result<String> {
    match command {
        Command::Sections => Ok(list_sections()
            .iter()
            .map(|section| format!("{}\t{}", section.id, section.label))
            .collect::<Vec<_>>()
            .join("\n")),
        Command::Render { out, section } => {
            let today = chrono::Local::now().date_naive();
            let html = render_policy_center(section.as_deref(), today)
                .context("failed to render policy page")?;
            fs::write(&out, html).with_context(|| format!("failed to write '{}'", out.display()))?;
            Ok(format!("wrote {}", out.display()))
        }
        Command::Submit {
            name,
            email,
            message,
            phone,
            endpoint,
        } => {
            let sink: Arc<dyn SubmissionSink> = match endpoint.as_deref() {
                Some(url) => Arc::new(HttpSink::new(url)?),
                None => Arc::new(LogSink),
            };
            let fields = ContactFields {
                name,
                email,
                phone,
                message,
            };
            let effects = ContactFormHandler::new(sink).submit(&fields).await?;
            let notice = effects.into_iter().find_map(|effect| match effect {
                FormEffect::Notify(notification) => Some(notification.message),
                FormEffect::ClearFields => None,
            });
            Ok(notice.unwrap_or_default())
        }
    }
}
