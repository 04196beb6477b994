//! # Ferrous Dig
//!
//! DNS record lookups rendered for chat (Slack Block Kit) or the terminal.

mod bootstrap;
mod di;
mod server;

use clap::{Parser, Subcommand};
use ferrous_dig_application::services::{PlainTextFormatter, SlackBlockFormatter};
use ferrous_dig_application::use_cases::DigCommand;
use ferrous_dig_domain::{CliOverrides, RecordType};
use std::str::FromStr;

use crate::bootstrap::{init_logging, load_config, log_config_summary};
use crate::di::Services;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "🦀 Resolve A, AAAA, MX, TXT and NS records")]
struct Cli {
    /// Path to a TOML config file (default: ./ferrous-dig.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Nameserver as ip:port, repeatable (default: system resolver)
    #[arg(long = "nameserver", global = true)]
    nameservers: Vec<String>,

    /// Per-query timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one hostname and print the records
    Lookup {
        hostname: String,

        /// Record type: A, AAAA, MX, TXT or NS (case-insensitive, default A)
        #[arg(short = 't', long = "type")]
        record_type: Option<String>,

        /// Print the Slack response JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Serve the HTTP endpoints
    Serve {
        #[arg(short = 'b', long)]
        bind: Option<String>,

        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (bind_address, port) = match &self.command {
            Command::Serve { bind, port } => (bind.clone(), *port),
            Command::Lookup { .. } => (None, None),
        };

        CliOverrides {
            bind_address,
            port,
            nameservers: (!self.nameservers.is_empty()).then(|| self.nameservers.clone()),
            timeout_secs: self.timeout,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.overrides())?;
    init_logging(&config.logging);
    log_config_summary(cli.config.as_deref(), &config);

    let services = Services::new(&config)?;

    match cli.command {
        Command::Lookup {
            hostname,
            record_type,
            json,
        } => {
            if let Some(tag) = record_type.as_deref() {
                if let Err(e) = RecordType::from_str(tag.trim()) {
                    tracing::warn!(error = %e, "Falling back to A records");
                }
            }

            let command = DigCommand::new(hostname, record_type);
            if json {
                let response = services
                    .dig_command(SlackBlockFormatter::new())
                    .execute(command)
                    .await;
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let response = services
                    .dig_command(PlainTextFormatter::new())
                    .execute(command)
                    .await;
                for line in response.blocks {
                    println!("{}", line);
                }
            }
        }
        Command::Serve { .. } => {
            tracing::info!("🦀 Ferrous Dig starting...");
            server::start_web_server(&config.server, &services).await?;
        }
    }

    Ok(())
}
