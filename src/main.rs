mod config;
mod error;
mod excel;
mod slack;
mod transform;

use anyhow::{Context, Result};
use config::Config;
use slack::SlackClient;
use std::path::PathBuf;

const DEFAULT_OUT_PATH: &str = "slack_messages.xlsx";
const DEFAULT_MAX_PAGES: usize = 1000;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let _bin = args.remove(0);

    let mut out_path = PathBuf::from(DEFAULT_OUT_PATH);
    let mut max_pages = DEFAULT_MAX_PAGES;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                let value = args.get(i + 1).context("--out requires a value")?;
                out_path = PathBuf::from(value);
                i += 2;
            }
            "--max-pages" => {
                let value = args.get(i + 1).context("--max-pages requires a value")?;
                max_pages = value.parse().context("invalid --max-pages")?;
                i += 2;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                return Err(anyhow::anyhow!("unknown argument: {other}"));
            }
        }
    }

    dotenv::dotenv().ok();
    let config = Config::from_env()
        .context("set SLACK_TOKEN and CHANNEL_ID in the environment or a .env file")?;

    eprintln!("slack: fetching history for channel {}", config.channel_id);
    let client = SlackClient::new(&config)?;
    let messages = slack::fetch_history(&client, max_pages).await?;
    eprintln!("slack: fetched {} messages", messages.len());

    let zone = transform::jst();
    let rows = messages
        .iter()
        .map(|message| transform::to_row(message, &zone))
        .collect::<Result<Vec<_>, _>>()?;

    excel::save_rows(&rows, &out_path)
        .with_context(|| format!("failed to save workbook: {}", out_path.display()))?;
    eprintln!("excel: saved {} rows to {}", rows.len(), out_path.display());

    Ok(())
}

fn print_usage() {
    eprintln!(
        "slack-export usage:\n  slack-export [--out <path>] [--max-pages <n>]\n\nrequired environment (or .env):\n  SLACK_TOKEN  bearer token with history access\n  CHANNEL_ID   channel to export"
    );
}
