use aggregator::{BudgetTarget, Transaction, YearMonth, ingest};
use api_types::target::TargetsQuery;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::{AppError, Result};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unauthorized, check the token")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// FastAPI error body.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Value,
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    token: Option<String>,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::InvalidInput(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            token: token.map(str::to_string),
            http: reqwest::Client::new(),
        })
    }

    /// Every transaction of the user, newest first.
    pub async fn transactions_all(&self) -> std::result::Result<Vec<Transaction>, ClientError> {
        let payload = self.get_json("transactions/all", None::<&()>).await?;
        Ok(ingest::transactions_from_value(payload))
    }

    /// Targets set for `month`.
    pub async fn targets(
        &self,
        month: YearMonth,
    ) -> std::result::Result<Vec<BudgetTarget>, ClientError> {
        let query = TargetsQuery {
            month: month.month(),
            year: month.year(),
        };
        let payload = self.get_json("targets/", Some(&query)).await?;
        Ok(ingest::targets_from_value(payload))
    }

    /// Targets of every month, with their backend status.
    pub async fn targets_all(&self) -> std::result::Result<Vec<BudgetTarget>, ClientError> {
        let payload = self.get_json("targets/status-all", None::<&()>).await?;
        Ok(ingest::targets_from_value(payload))
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    async fn get_json<Q: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> std::result::Result<Value, ClientError> {
        let endpoint = self.endpoint(path)?;
        tracing::debug!(%endpoint, "fetching");

        let mut request = self.http.get(endpoint);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let res = request.send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<Value>().await?);
        }

        let detail = res
            .json::<ErrorResponse>()
            .await
            .map(|err| match err.detail {
                Value::String(message) => message,
                other => other.to_string(),
            })
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(error_for_status(status, detail))
    }
}

fn error_for_status(status: StatusCode, detail: String) -> ClientError {
    match status.as_u16() {
        401 => ClientError::Unauthorized,
        403 => ClientError::Forbidden,
        404 => ClientError::NotFound,
        400 | 422 => ClientError::Validation(detail),
        _ => ClientError::Server(format!("{status}: {detail}")),
    }
}
