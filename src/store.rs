//! # Entity Store Access
//!
//! This module defines the `EntityStore` trait, the seam between the fetch
//! logic and the transport that talks to the remote store. The store is
//! treated as a black box: given an entity kind and an id it returns the
//! JSON document found at `{base_url}/{kind}/{id}`, or an error.
//!
//! `HttpEntityStore` is the production implementation, backed by a single
//! blocking `reqwest` client shared by every worker thread. Tests provide
//! their own implementations to simulate responses without a network.

use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::entity::EntityKind;
use crate::error::{Error, Result};

/// Trait for reading raw entity documents - allows mocking in tests
pub trait EntityStore: Send + Sync {
    /// Reads the document for `id` from the collection of `kind`.
    fn get(&self, kind: EntityKind, id: u64) -> Result<Value>;

    /// A printable location for `kind`/`id`, used in log records.
    fn locate(&self, kind: EntityKind, id: u64) -> String {
        format!("{}/{}", kind.path(), id)
    }
}

/// An `EntityStore` that performs `GET` requests over HTTP.
pub struct HttpEntityStore {
    client: Client,
    base_url: Url,
}

impl HttpEntityStore {
    /// Creates a store rooted at `base_url`.
    ///
    /// A trailing slash is added when missing, so `https://host/api` and
    /// `https://host/api/` resolve entity paths the same way.
    pub fn new(base_url: &Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("order-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport {
                url: base_url.to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: normalize_base(base_url),
        })
    }

    /// The full URL of an entity document.
    pub fn entity_url(&self, kind: EntityKind, id: u64) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/{}", kind.path(), id))?)
    }
}

impl EntityStore for HttpEntityStore {
    fn get(&self, kind: EntityKind, id: u64) -> Result<Value> {
        let url = self.entity_url(kind, id)?;
        let transport = |message: String| Error::Transport {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!("HTTP status {}", status)));
        }

        response
            .json::<Value>()
            .map_err(|e| transport(format!("response is not JSON: {}", e)))
    }

    fn locate(&self, kind: EntityKind, id: u64) -> String {
        self.entity_url(kind, id)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{}/{}", self.base_url, kind.path(), id))
    }
}

fn normalize_base(base_url: &Url) -> Url {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
