//! # Directory HTTP Client
//!
//! Wraps a `reqwest::Client` with the collection base URL and the
//! response-shape tolerance the contract demands:
//!
//! - a list response may be a bare JSON array or `{"items": [...]}`;
//! - a create/update response may be the full record or a partial echo;
//!   missing fields are filled from the submitted draft;
//! - a delete acknowledgment body is ignored entirely.
//!
//! Errors are mapped per call site: transport failures to
//! [`ClientError::Http`], non-2xx statuses to [`ClientError::Api`] with a
//! body excerpt, shape violations to [`ClientError::Deserialization`] or
//! [`ClientError::MalformedResponse`]. No retries: the caller owns the
//! fallback policy.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use rolecall_core::{Record, RecordDraft, RecordId};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Typed client for one directory backend deployment.
#[derive(Debug)]
pub struct DirectoryClient {
    http: reqwest::Client,
    config: ClientConfig,
}

/// Either wire shape of a list response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Plain(Vec<Record>),
    Wrapped { items: Vec<Record> },
}

impl ListResponse {
    fn into_records(self) -> Vec<Record> {
        match self {
            ListResponse::Plain(records) => records,
            ListResponse::Wrapped { items } => items,
        }
    }
}

/// Partial record echo from create/update endpoints.
#[derive(Debug, Deserialize)]
struct PartialRecord {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl PartialRecord {
    /// Merge the echo over the submitted draft. `fallback_id` covers
    /// update responses that omit the id (the caller already knows it).
    fn merge(
        self,
        draft: &RecordDraft,
        fallback_id: Option<&RecordId>,
        endpoint: &str,
    ) -> Result<Record, ClientError> {
        let id = self
            .id
            .or_else(|| fallback_id.cloned())
            .ok_or_else(|| ClientError::MalformedResponse {
                endpoint: endpoint.to_string(),
                reason: "created record is missing an id".into(),
            })?;
        Ok(Record {
            id,
            company: self.company.unwrap_or_else(|| draft.company.clone()),
            location: self.location.unwrap_or_else(|| draft.location.clone()),
            title: self.title.or_else(|| draft.title.clone()),
            url: self.url.or_else(|| draft.url.clone()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Health-probe response body.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    ok: bool,
}

impl DirectoryClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|source| ClientError::Http {
                endpoint: config.collection_url(),
                source,
            })?;
        Ok(DirectoryClient { http, config })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request, mapping transport failures and non-2xx statuses.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|source| ClientError::Http {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Fetch the record list, optionally asking the backend to pre-filter
    /// on an exact location code (`?location=<code>`).
    ///
    /// The parameter is an exact-string index match server-side; callers
    /// wanting synonym-aware matching filter client-side instead.
    pub async fn list(&self, location: Option<&str>) -> Result<Vec<Record>, ClientError> {
        let endpoint = self.config.collection_url();
        let mut request = self.http.get(&endpoint);
        if let Some(code) = location {
            request = request.query(&[("location", code)]);
        }

        let response = self.send(request, &endpoint).await?;
        let records = response
            .json::<ListResponse>()
            .await
            .map_err(|source| ClientError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?
            .into_records();

        tracing::debug!(count = records.len(), %endpoint, "fetched record list");
        Ok(records)
    }

    /// Create a record.
    pub async fn create(&self, draft: &RecordDraft) -> Result<Record, ClientError> {
        let endpoint = self.config.collection_url();
        let response = self.send(self.http.post(&endpoint).json(draft), &endpoint).await?;

        let partial: PartialRecord =
            response
                .json()
                .await
                .map_err(|source| ClientError::Deserialization {
                    endpoint: endpoint.clone(),
                    source,
                })?;
        let record = partial.merge(draft, None, &endpoint)?;
        tracing::debug!(id = %record.id, %endpoint, "created record");
        Ok(record)
    }

    /// Update a record in place.
    pub async fn update(&self, id: &RecordId, draft: &RecordDraft) -> Result<Record, ClientError> {
        let endpoint = format!("{}/{}", self.config.collection_url(), id);
        let response = self.send(self.http.put(&endpoint).json(draft), &endpoint).await?;

        let partial: PartialRecord =
            response
                .json()
                .await
                .map_err(|source| ClientError::Deserialization {
                    endpoint: endpoint.clone(),
                    source,
                })?;
        let record = partial.merge(draft, Some(id), &endpoint)?;
        tracing::debug!(id = %record.id, %endpoint, "updated record");
        Ok(record)
    }

    /// Delete a record. Any 2xx response is an acknowledgment; the body is
    /// ignored (the backend's delete is best-effort and unconditional).
    pub async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        let endpoint = format!("{}/{}", self.config.collection_url(), id);
        self.send(self.http.delete(&endpoint), &endpoint).await?;
        tracing::debug!(%id, %endpoint, "deleted record");
        Ok(())
    }

    /// Probe backend liveness via `GET /health`.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let endpoint = self.config.health_url();
        let response = self.send(self.http.get(&endpoint), &endpoint).await?;
        let health: HealthResponse =
            response
                .json()
                .await
                .map_err(|source| ClientError::Deserialization {
                    endpoint: endpoint.clone(),
                    source,
                })?;
        Ok(health.ok)
    }
}
