use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Blocking client for the patent-drawing API. One instance per run; every
/// call is a single GET with the configured timeout and no retries.
pub struct ApiClient {
    http: Client,
    root: String,
    token: String,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.api.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            root: cfg.api.root.trim_end_matches('/').to_string(),
            token: cfg.api.token.clone(),
        })
    }

    /// GET `/patents/{pn}/drawings` and return the drawing indices in the
    /// order the API reports them. A body without a `drawings` field is an
    /// empty listing, not an error.
    pub fn list_drawings(&self, pn: &str) -> Result<Vec<String>> {
        let url = format!("{}/patents/{}/drawings", self.root, pn);
        debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }
        let body: Value = resp.json()?;
        indices_from_body(pn, &body)
    }

    /// GET `/patents/{pn}/drawings/{idx}` and return the raw image bytes.
    pub fn fetch_drawing(&self, pn: &str, idx: &str) -> Result<Vec<u8>> {
        let url = format!("{}/patents/{}/drawings/{}", self.root, pn, idx);
        debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .query(&[("token", self.token.as_str())])
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }
        Ok(resp.bytes()?.to_vec())
    }
}

/// Extract drawing indices from a listing body. Indices arrive as JSON
/// strings or numbers depending on the endpoint; both are carried as strings.
pub fn indices_from_body(pn: &str, body: &Value) -> Result<Vec<String>> {
    let Some(field) = body.get("drawings") else {
        return Ok(Vec::new());
    };
    let Some(items) = field.as_array() else {
        return Err(Error::Listing {
            publication_number: pn.to_string(),
            detail: format!("\"drawings\" is not an array: {field}"),
        });
    };
    items
        .iter()
        .map(|v| match v {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(Error::Listing {
                publication_number: pn.to_string(),
                detail: format!("index is neither string nor number: {other}"),
            }),
        })
        .collect()
}
