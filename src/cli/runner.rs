//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::{ErrorKind, Result};
use crate::pagination::Direction;
use crate::request::{CollectionParams, LedgerRequest};
use crate::resource::Ledger;
use crate::types::Order;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::new(self.load_config()?)?;
        debug!("Using Horizon at {}", client.horizon_url());

        match &self.cli.command {
            Commands::Ledgers {
                cursor,
                order,
                limit,
                pages,
            } => {
                let params = CollectionParams {
                    cursor: cursor.clone(),
                    order: *order,
                    limit: *limit,
                };
                self.ledgers(&client, params, *pages).await
            }
            Commands::Ledger { sequence } => self.ledger(&client, *sequence).await,
            Commands::Stream { cursor, max } => self.stream(&client, cursor.as_deref(), *max).await,
        }
    }

    /// Resolve the client config: flag, then config file, then testnet
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::testnet(),
        };
        if let Some(url) = &self.cli.horizon_url {
            config.horizon_url.clone_from(url);
        }
        config.validate()?;
        Ok(config)
    }

    /// Walk up to `pages` pages following the server's `next` links
    async fn ledgers(&self, client: &Client, params: CollectionParams, pages: usize) -> Result<()> {
        let request = LedgerRequest {
            sequence: None,
            params,
        };
        let mut page = client.ledgers(&request).await?;

        for n in 1..=pages.max(1) {
            for ledger in page.records() {
                self.emit(ledger);
            }
            info!("Page {}: {} ledgers", n, page.len());

            if n == pages || page.is_empty() {
                break;
            }
            page = match client.follow_link(&page, Direction::Next).await {
                Ok(next) => next,
                Err(e) if e.kind() == ErrorKind::NoMoreResults => break,
                Err(e) => return Err(e),
            };
        }
        Ok(())
    }

    async fn ledger(&self, client: &Client, sequence: u32) -> Result<()> {
        let ledger = client.ledger_detail(sequence).await?;
        self.emit(&ledger);
        Ok(())
    }

    async fn stream(&self, client: &Client, cursor: Option<&str>, max: Option<usize>) -> Result<()> {
        let cancel = CancellationToken::new();

        let on_ctrl_c = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                on_ctrl_c.cancel();
            }
        });

        let mut request = LedgerRequest::new().order(Order::Ascending);
        if let Some(cursor) = cursor {
            request = request.cursor(cursor);
        }

        let mut delivered = 0usize;
        client
            .stream_ledgers(&cancel, &request, |ledger: Ledger| {
                self.emit(&ledger);
                delivered += 1;
                if max.is_some_and(|m| delivered >= m) {
                    cancel.cancel();
                }
            })
            .await?;

        info!("Stream stopped after {} ledgers", delivered);
        Ok(())
    }

    /// Print one record in the selected format
    fn emit<T: Serialize>(&self, value: &T) {
        match render(self.cli.format, value) {
            Ok(line) => println!("{line}"),
            Err(e) => error!("Failed to serialize record: {e}"),
        }
    }
}

/// Render one record in the given format
pub(crate) fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered)
}
