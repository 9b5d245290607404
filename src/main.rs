use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use time_blocks::config::DEFAULT_CONFIG_PATH;
use time_blocks::page::{ClickEvent, Element, STOP_BUTTON_ID};
use time_blocks::{Config, ConsolePage, HttpTimeBlockClient, SubmissionOutcome, TimeBlockRecorder};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Track work on tasks from the terminal and submit time blocks
#[derive(Debug, Parser)]
#[command(name = "time-blocks", version)]
struct Args {
    /// Configuration file (extension optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Submission endpoint, overriding server.time_block_url
    #[arg(long)]
    url: Option<String>,

    /// Authenticity token, overriding page.csrf_token
    #[arg(long)]
    csrf_token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let cfg = Config::load_with_url(&args.config, args.url.as_deref())?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Submitting time blocks to {}", cfg.server.time_block_url);

    let page = Arc::new(ConsolePage::new(args.csrf_token.or(cfg.page.csrf_token.clone())));
    let client = Arc::new(HttpTimeBlockClient::from_config(&cfg.server)?);
    let recorder = TimeBlockRecorder::new(client, page);

    println!("commands: start | stop <task-id> | status | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("start") => {
                recorder.handle_click(&ClickEvent::on(Element::start_button())).await?;
                println!("tracking");
            }
            Some("stop") => {
                let button = match words.next() {
                    Some(task_id) => Element::stop_button(task_id),
                    None => Element::with_id(STOP_BUTTON_ID),
                };
                match recorder.handle_click(&ClickEvent::on(button)).await {
                    Ok(Some(pending)) => match pending.outcome().await {
                        SubmissionOutcome::Acknowledged(resp) => println!("saved ({})", resp.status),
                        SubmissionOutcome::Failed(e) => println!("not saved: {}", e),
                    },
                    Ok(None) => println!("not tracking"),
                    Err(e) => error!("{}", e),
                }
            }
            Some("status") => match recorder.started_at().await {
                Some(start) => println!("tracking since {}", start),
                None => println!("idle"),
            },
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {}", other),
            None => {}
        }
    }

    Ok(())
}
