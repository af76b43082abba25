use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::html::Table;

/// Maximum number of rows the landing page previews.
pub const PREVIEW_ROWS: usize = 10;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[cfg(feature = "hf-preview")]
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("datasets server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Where the landing page preview comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct HubSettings {
    pub endpoint: String,
    pub dataset: String,
    pub config: String,
    pub split: String,
    pub timeout: Duration,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://datasets-server.huggingface.co".to_string(),
            dataset: "climate_fever".to_string(),
            config: "default".to_string(),
            split: "test".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub enum PreviewSource {
    /// Built without the `hf-preview` feature.
    NotInstalled,
    /// Turned off at startup.
    Disabled,
    #[cfg(feature = "hf-preview")]
    Hub(HubClient),
}

/// What the page shows in the preview section. `table` is capped at
/// [`PREVIEW_ROWS`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOutcome {
    pub table: Option<Table>,
    pub message: String,
}

impl PreviewSource {
    /// Hub-backed source, or [`PreviewSource::NotInstalled`] when the
    /// feature is compiled out.
    pub fn hub(settings: HubSettings) -> Result<Self, PreviewError> {
        #[cfg(feature = "hf-preview")]
        {
            Ok(Self::Hub(HubClient::new(settings)?))
        }
        #[cfg(not(feature = "hf-preview"))]
        {
            let _ = settings;
            Ok(Self::NotInstalled)
        }
    }

    /// Never fails: every problem is turned into the outcome message.
    #[cfg_attr(not(feature = "hf-preview"), allow(unused_variables))]
    pub async fn load(&self, limit: usize) -> PreviewOutcome {
        match self {
            PreviewSource::NotInstalled => PreviewOutcome {
                table: None,
                message: "The Hugging Face dataset preview is not installed. \
                          Rebuild with the `hf-preview` feature to enable it."
                    .to_string(),
            },
            PreviewSource::Disabled => PreviewOutcome {
                table: None,
                message: "The Hugging Face dataset preview is disabled for this server."
                    .to_string(),
            },
            #[cfg(feature = "hf-preview")]
            PreviewSource::Hub(client) => match client.fetch(limit).await {
                Ok(table) => PreviewOutcome {
                    message: format!(
                        "Showing the first {} rows of the Hugging Face '{}' dataset.",
                        table.len(),
                        client.settings.dataset
                    ),
                    table: Some(table),
                },
                Err(e) => {
                    warn!("dataset preview failed: {}", e);
                    PreviewOutcome {
                        table: None,
                        message: format!("Could not load Hugging Face dataset. Error: {e}"),
                    }
                }
            },
        }
    }
}

#[cfg(feature = "hf-preview")]
pub struct HubClient {
    client: reqwest::Client,
    settings: HubSettings,
}

#[cfg(feature = "hf-preview")]
impl HubClient {
    pub fn new(settings: HubSettings) -> Result<Self, PreviewError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self { client, settings })
    }

    pub async fn fetch(&self, limit: usize) -> Result<Table, PreviewError> {
        let url = format!("{}/rows", self.settings.endpoint.trim_end_matches('/'));
        let length = limit.to_string();
        let resp = self
            .client
            .get(url)
            .query(&[
                ("dataset", self.settings.dataset.as_str()),
                ("config", self.settings.config.as_str()),
                ("split", self.settings.split.as_str()),
                ("offset", "0"),
                ("length", length.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(PreviewError::Status { status, body });
        }

        let rows: RowsResponse = resp.json().await?;
        debug!("fetched {} preview rows", rows.rows.len());

        Ok(rows.into_table(limit))
    }
}

/// Body of the datasets-server `/rows` endpoint.
#[derive(Debug, Deserialize)]
pub struct RowsResponse {
    features: Vec<Feature>,
    rows: Vec<RowEntry>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: serde_json::Map<String, Value>,
}

impl RowsResponse {
    pub fn from_json(body: &str) -> Result<Self, PreviewError> {
        serde_json::from_str(body).map_err(|e| PreviewError::Decode(e.to_string()))
    }

    /// Columns follow feature order; at most `limit` rows are kept.
    pub fn into_table(self, limit: usize) -> Table {
        let mut table = Table::new(self.features.iter().map(|f| f.name.clone()).collect());
        for entry in self.rows.into_iter().take(limit) {
            let row = self
                .features
                .iter()
                .map(|f| entry.row.get(&f.name).map(cell_text).unwrap_or_default())
                .collect();
            table.push_row(row);
        }
        table
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
