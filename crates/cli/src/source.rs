//! Where snapshots come from: local JSON files or the backend.

use std::path::PathBuf;

use aggregator::{BudgetTarget, Transaction, YearMonth, ingest, targets_for_month};

use crate::{
    client::Client,
    config::AppConfig,
    error::{AppError, Result},
};

#[derive(Debug)]
pub enum Source {
    Files {
        transactions: Option<PathBuf>,
        targets: Option<PathBuf>,
    },
    Remote(Client),
}

impl Source {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        if config.uses_files() {
            return Ok(Self::Files {
                transactions: config.transactions_file.as_ref().map(PathBuf::from),
                targets: config.targets_file.as_ref().map(PathBuf::from),
            });
        }
        Ok(Self::Remote(Client::new(&config.base_url, config.token())?))
    }

    /// Every transaction of the user. Month and period views filter on the
    /// creation date afterwards, whatever label the backend filed them under.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let transactions = match self {
            Self::Files { transactions, .. } => {
                let path = transactions.as_ref().ok_or_else(|| {
                    AppError::InvalidInput("no transactions file configured".to_string())
                })?;
                let raw = tokio::fs::read_to_string(path).await?;
                ingest::parse_transactions(&raw)?
            }
            Self::Remote(client) => client.transactions_all().await?,
        };
        tracing::info!(count = transactions.len(), "loaded transactions");
        Ok(transactions)
    }

    /// Targets of `month`, or of every month when `None`.
    pub async fn targets(&self, month: Option<YearMonth>) -> Result<Vec<BudgetTarget>> {
        let targets = match self {
            Self::Files { targets, .. } => {
                let path = targets.as_ref().ok_or_else(|| {
                    AppError::InvalidInput("no targets file configured".to_string())
                })?;
                let raw = tokio::fs::read_to_string(path).await?;
                ingest::parse_targets(&raw)?
            }
            Self::Remote(client) => match month {
                Some(month) => client.targets(month).await?,
                None => client.targets_all().await?,
            },
        };

        let targets = match month {
            Some(month) => targets_for_month(&targets, month)
                .into_iter()
                .cloned()
                .collect(),
            None => targets,
        };
        tracing::info!(count = targets.len(), "loaded targets");
        Ok(targets)
    }
}
