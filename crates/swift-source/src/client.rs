//! Minimal Swift HTTP client: v1 auth, container listing, HEAD and SLO manifests.

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use verify_core::{Result, VerifyError};

const STORE: &str = "Swift";

/// One row of a JSON container listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SwiftObject {
    pub name: String,
    pub hash: String,
}

/// The subset of object headers the verifier cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// Set when the object is a Static Large Object manifest
    pub static_large_object: bool,
    pub etag: Option<String>,
}

impl ObjectMetadata {
    fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            static_large_object: headers.contains_key("x-static-large-object"),
            etag: headers
                .get("etag")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim_matches('"').to_string()),
        }
    }
}

/// Authenticated connection to one Swift account.
#[derive(Clone, Debug)]
pub struct SwiftClient {
    http: reqwest::Client,
    storage_url: Url,
    token: String,
}

fn transport(err: impl std::fmt::Display) -> VerifyError {
    VerifyError::transport(STORE, err.to_string())
}

fn header_value(headers: &HeaderMap, name: &str) -> Result<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| transport(format!("auth response is missing the {name} header")))
}

impl SwiftClient {
    /// Authenticate against a v1 auth endpoint.
    pub async fn connect(auth_url: &str, user: &str, key: &str) -> Result<Self> {
        let http = reqwest::Client::new();

        let response = http
            .get(auth_url)
            .header("X-Auth-User", user)
            .header("X-Auth-Key", key)
            .send()
            .await
            .map_err(|e| transport(format!("failed to reach auth URL {auth_url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!(
                "authentication as '{user}' failed with status {status}"
            )));
        }

        let storage_url = header_value(response.headers(), "x-storage-url")?;
        let token = header_value(response.headers(), "x-auth-token")?;
        let storage_url = Url::parse(&storage_url)
            .map_err(|e| transport(format!("invalid storage URL '{storage_url}': {e}")))?;

        tracing::debug!("Authenticated as '{}', storage URL {}", user, storage_url);

        Ok(Self {
            http,
            storage_url,
            token,
        })
    }

    /// Use an already issued token.
    pub fn with_token(storage_url: Url, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            storage_url,
            token: token.into(),
        }
    }

    /// Build `<storage_url>/<segment>/...` with each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.storage_url.clone();
        url.path_segments_mut()
            .map_err(|_| transport(format!("storage URL {} cannot be a base", self.storage_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// List up to `limit` objects after `marker`, in Swift's (byte-wise) order.
    pub async fn list_container(
        &self,
        container: &str,
        marker: Option<&str>,
        limit: usize,
    ) -> Result<Vec<SwiftObject>> {
        let url = self.url(&[container])?;
        let limit = limit.to_string();

        let mut query = vec![("format", "json"), ("limit", limit.as_str())];
        if let Some(marker) = marker {
            query.push(("marker", marker));
        }

        let response = self
            .http
            .get(url)
            .header("X-Auth-Token", &self.token)
            .query(&query)
            .send()
            .await
            .map_err(|e| transport(format!("failed to list container '{container}': {e}")))?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(Vec::new()),
            status if status.is_success() => response.json().await.map_err(|e| {
                transport(format!(
                    "invalid listing for container '{container}': {e}"
                ))
            }),
            status => Err(transport(format!(
                "listing container '{container}' failed with status {status}"
            ))),
        }
    }

    pub async fn head_object(&self, container: &str, name: &str) -> Result<ObjectMetadata> {
        let url = self.url(&[container, name])?;

        let response = self
            .http
            .head(url)
            .header("X-Auth-Token", &self.token)
            .send()
            .await
            .map_err(|e| transport(format!("failed to HEAD '{container}/{name}': {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!(
                "HEAD '{container}/{name}' failed with status {status}"
            )));
        }

        Ok(ObjectMetadata::from_headers(response.headers()))
    }

    /// Fetch the raw SLO manifest body (`multipart-manifest=get`).
    pub async fn get_manifest(&self, container: &str, name: &str) -> Result<Vec<u8>> {
        let url = self.url(&[container, name])?;

        let response = self
            .http
            .get(url)
            .header("X-Auth-Token", &self.token)
            .query(&[("multipart-manifest", "get")])
            .send()
            .await
            .map_err(|e| {
                transport(format!(
                    "failed to fetch manifest for '{container}/{name}': {e}"
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!(
                "manifest GET for '{container}/{name}' failed with status {status}"
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            transport(format!(
                "failed to read manifest for '{container}/{name}': {e}"
            ))
        })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(storage: &str) -> SwiftClient {
        SwiftClient::with_token(Url::parse(storage).unwrap(), "tok")
    }

    #[test]
    fn test_url_encodes_object_names() {
        let c = client("http://swift:8080/v1/AUTH_test");
        let url = c.url(&["photos", "2024/cat one.jpg"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://swift:8080/v1/AUTH_test/photos/2024%2Fcat%20one.jpg"
        );
    }

    #[test]
    fn test_url_with_trailing_slash() {
        let c = client("http://swift:8080/v1/AUTH_test/");
        let url = c.url(&["photos"]).unwrap();
        assert_eq!(url.as_str(), "http://swift:8080/v1/AUTH_test/photos");
    }

    #[test]
    fn test_metadata_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-static-large-object", "True".parse().unwrap());
        headers.insert("etag", "\"abc\"".parse().unwrap());

        let meta = ObjectMetadata::from_headers(&headers);
        assert!(meta.static_large_object);
        assert_eq!(meta.etag.as_deref(), Some("abc"));

        assert!(!ObjectMetadata::from_headers(&HeaderMap::new()).static_large_object);
    }

    #[test]
    fn test_listing_row_deserialization() {
        let json = r#"[{"name":"a.txt","hash":"0cc175b9c0f1b6a831c399e269772661","bytes":1,
            "content_type":"text/plain","last_modified":"2024-01-01T00:00:00.000000"}]"#;
        let rows: Vec<SwiftObject> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].name, "a.txt");
        assert_eq!(rows[0].hash, "0cc175b9c0f1b6a831c399e269772661");
    }
}
