//! GitHub contents-API implementation of the remote file store.
//!
//! `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}` returns the file
//! body base64-encoded together with its blob SHA; `PUT` to the same path
//! creates the file or, given the current SHA, updates it in place. A PUT
//! carrying a stale SHA is rejected by GitHub, which is the only concurrency
//! guard this store offers.

use super::api::{RemoteContentStore, RemoteFile};
use crate::config::RemoteConfig;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Contents-API backed [`RemoteContentStore`].
#[derive(Debug, Clone)]
pub struct GitHubContents {
    http: reqwest::Client,
    config: RemoteConfig,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
    branch: &'a str,
}

impl GitHubContents {
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("puja-khata/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    fn url(&self) -> String {
        self.config.contents_url()
    }
}

#[async_trait]
impl RemoteContentStore for GitHubContents {
    async fn get_file(&self, token: &str) -> Result<Option<RemoteFile>> {
        let response = self
            .http
            .get(self.url())
            .query(&[("ref", self.config.branch.as_str())])
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Remote data file does not exist yet");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::RemoteApi {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: ContentsResponse = response.json().await?;
        Ok(Some(RemoteFile {
            content: decode_content(&body.content)?,
            revision: body.sha,
        }))
    }

    async fn put_file(
        &self,
        token: &str,
        content: &str,
        revision: Option<&str>,
        message: &str,
    ) -> Result<()> {
        let request = PutRequest {
            message,
            content: BASE64.encode(content),
            sha: revision,
            branch: &self.config.branch,
        };
        let response = self
            .http
            .put(self.url())
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, ACCEPT)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::RemoteApi {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        debug!("Remote data file written ({} bytes)", content.len());
        Ok(())
    }
}

/// Decodes a contents-API body. GitHub wraps the base64 payload in newlines,
/// which the strict decoder rejects, so whitespace is stripped first.
fn decode_content(raw: &str) -> Result<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact.as_bytes()).map_err(|e| Error::RemoteApi {
        status: 0,
        message: format!("invalid base64 content: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| Error::RemoteApi {
        status: 0,
        message: format!("file content is not UTF-8: {e}"),
    })
}
