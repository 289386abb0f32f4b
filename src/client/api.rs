use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::fs::OpenOptions;
use std::io::Write;

use crate::client::AccountApi;
use crate::config::ApiConfig;
use crate::errors::{Result, TrackerError};
use crate::models::*;
use crate::{v_debug, API_LOG_FILE};

#[derive(Clone)]
pub struct Gw2Client {
    client: reqwest::Client,
    base_url: String,
    language: String,
    api_logging: bool,
}

impl Gw2Client {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|_| TrackerError::Config("API key contains invalid characters".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Gw2Client {
            client,
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            api_logging: config.log_requests,
        })
    }

    /// `<base_url>/v2/<segments...>`, each segment percent-encoded on its own
    /// so character names with spaces or slashes stay a single segment.
    fn endpoint_url(&self, segments: &[&str], localized: bool) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| TrackerError::Config(format!("invalid base_url {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| TrackerError::Config(format!("base_url {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push("v2")
            .extend(segments);
        if localized {
            url.query_pairs_mut().append_pair("lang", &self.language);
        }
        Ok(url)
    }

    fn log_api_call(&self, url: &Url, response_status: u16, response_body: &str) {
        if !self.api_logging {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             Method: GET\n\
             URL: {url}\n\
             Response Status: {response_status}\n\
             Response Body: {response_body}\n\
             ========================================\n",
        );

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(API_LOG_FILE)
        {
            let _ = file.write_all(log_entry.as_bytes());
        }
    }

    /// GET the endpoint and return its status and raw body.
    async fn fetch(&self, url: Url) -> Result<(u16, String)> {
        v_debug!("🌐 GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        self.log_api_call(&url, status, &body);
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str], localized: bool) -> Result<T> {
        let url = self.endpoint_url(segments, localized)?;
        let endpoint = url.path().to_string();
        let (status, body) = self.fetch(url).await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|error| error.text)
                .unwrap_or(body);
            return Err(TrackerError::Api { endpoint, status, message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AccountApi for Gw2Client {
    async fn token_info(&self) -> Result<TokenInfo> {
        let url = self.endpoint_url(&["tokeninfo"], false)?;
        let endpoint = url.path().to_string();
        let (status, body) = self.fetch(url).await?;

        // An invalid key answers 401/400 with a text payload; anything else
        // unparseable is a plain API failure.
        let parsed = serde_json::from_str::<TokenInfoResponse>(&body);
        let success = (200..300).contains(&status);
        match parsed {
            Ok(TokenInfoResponse::Rejected(error)) => Err(TrackerError::Credential(error.text)),
            Ok(TokenInfoResponse::Accepted(info)) if success => Ok(info),
            Err(e) if success => Err(e.into()),
            _ => Err(TrackerError::Api { endpoint, status, message: body }),
        }
    }

    async fn item(&self, id: u32) -> Result<Item> {
        self.get_json(&["items", &id.to_string()], true).await
    }

    async fn currency(&self, id: u32) -> Result<Currency> {
        self.get_json(&["currencies", &id.to_string()], true).await
    }

    async fn account_inventory(&self) -> Result<Vec<Option<InventorySlot>>> {
        self.get_json(&["account", "inventory"], false).await
    }

    async fn account_bank(&self) -> Result<Vec<Option<InventorySlot>>> {
        self.get_json(&["account", "bank"], false).await
    }

    async fn account_materials(&self) -> Result<Vec<Option<MaterialSlot>>> {
        self.get_json(&["account", "materials"], false).await
    }

    async fn account_wallet(&self) -> Result<Vec<WalletEntry>> {
        self.get_json(&["account", "wallet"], false).await
    }

    async fn characters(&self) -> Result<Vec<String>> {
        self.get_json(&["characters"], false).await
    }

    async fn character_inventory(&self, name: &str) -> Result<CharacterInventory> {
        self.get_json(&["characters", name, "inventory"], false).await
    }
}
