use async_trait::async_trait;
use serde::de::DeserializeOwned;

use greview_core::types::{ChangeInfo, DraftMap, ReviewInput};
use greview_core::{ChangeId, RevisionId};

use crate::transport::{Credentials, RemoteConfig, ReviewTransport};
use crate::RestError;

// Gerrit prefixes every JSON body with this line to defeat XSSI.
const XSSI_PREFIX: &str = ")]}'";

/// Gerrit REST client. Authenticated requests go through the `/a/` prefix
/// with HTTP basic auth.
#[derive(Debug, Clone)]
pub struct HttpReviewClient {
    base_url: String,
    credentials: Option<Credentials>,
    client: reqwest::Client,
}

fn strip_xssi(body: &str) -> &str {
    body.strip_prefix(XSSI_PREFIX).unwrap_or(body).trim_start()
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, RestError> {
    Ok(serde_json::from_str(strip_xssi(body))?)
}

impl HttpReviewClient {
    pub fn new(config: RemoteConfig) -> Result<Self, RestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials,
            client,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    fn endpoint(&self, change: &ChangeId, suffix: &str) -> String {
        let auth = if self.credentials.is_some() { "/a" } else { "" };
        let change = urlencoding::encode(change.as_str());
        format!("{}{}/changes/{}{}", self.base_url, auth, change, suffix)
    }

    fn revision_endpoint(&self, change: &ChangeId, revision: &RevisionId, suffix: &str) -> String {
        let revision = urlencoding::encode(revision.as_str());
        self.endpoint(change, &format!("/revisions/{revision}{suffix}"))
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.username, Some(&creds.password));
        }

        builder
    }

    /// Send and return the body of a successful response. Non-2xx responses
    /// become [`RestError::Rejected`] carrying the server's text.
    async fn send(&self, builder: reqwest::RequestBuilder, what: &str) -> Result<String, RestError> {
        let resp = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                RestError::ConnectionFailed(format!("{what}: {e}"))
            } else {
                RestError::Http(e)
            }
        })?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            tracing::debug!("{what} failed: {status} body={body}");
            return Err(RestError::Rejected {
                status: status.as_u16(),
                message: strip_xssi(&body).trim().to_string(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl ReviewTransport for HttpReviewClient {
    async fn get_change(&self, change: &ChangeId) -> Result<ChangeInfo, RestError> {
        let url = self.endpoint(change, "?o=CURRENT_REVISION");
        tracing::debug!("GET {url}");
        let body = self
            .send(self.request(reqwest::Method::GET, url), "get change")
            .await?;
        parse_json(&body)
    }

    async fn fetch_draft_comments(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
    ) -> Result<DraftMap, RestError> {
        let url = self.revision_endpoint(change, revision, "/drafts");
        tracing::debug!("GET {url}");
        let body = self
            .send(self.request(reqwest::Method::GET, url), "fetch drafts")
            .await?;
        if strip_xssi(&body).is_empty() {
            return Ok(DraftMap::new());
        }
        parse_json(&body)
    }

    async fn post_review(
        &self,
        change: &ChangeId,
        revision: &RevisionId,
        review: &ReviewInput,
    ) -> Result<(), RestError> {
        let url = self.revision_endpoint(change, revision, "/review");
        tracing::debug!("POST {url}");
        self.send(
            self.request(reqwest::Method::POST, url).json(review),
            "post review",
        )
        .await?;
        Ok(())
    }

    async fn submit_change(&self, change: &ChangeId) -> Result<(), RestError> {
        let url = self.endpoint(change, "/submit");
        tracing::debug!("POST {url}");
        let body = self
            .send(
                self.request(reqwest::Method::POST, url)
                    .json(&serde_json::json!({})),
                "submit change",
            )
            .await?;

        let info: ChangeInfo = parse_json(&body)?;
        if let Some(status) = info.status.as_deref() {
            if status != "MERGED" && status != "SUBMITTED" {
                return Err(RestError::InvalidResponse(format!(
                    "change {change} not merged after submit (status {status})"
                )));
            }
        }
        Ok(())
    }
}
