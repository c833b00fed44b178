use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub field1: String,
    pub field2: String,
}

/// Answer of the quote endpoint: a price snapshot or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuoteResponse {
    Found { price: f64, change: String },
    Missing { error: String },
}

pub struct StockClient {
    client: Client,
    base_url: String,
}

impl StockClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .pool_max_idle_per_host(0)
                .no_proxy()
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the demo records.
    pub async fn records(&self) -> Result<Vec<Record>, reqwest::Error> {
        self.client
            .get(format!("{}/api/records", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Fetch the quote for a ticker.
    pub async fn quote(&self, ticker: &str) -> Result<QuoteResponse, reqwest::Error> {
        self.client
            .get(self.quote_url(ticker))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    fn quote_url(&self, ticker: &str) -> String {
        format!(
            "{}/api/stocks/{}",
            self.base_url,
            urlencoding::encode(ticker)
        )
    }

    /// Request a page by path, returning the raw response.
    pub async fn page(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}
