//! Admin API client backed by reqwest.

use crate::api::{ListOptions, TransformationApi};
use crate::api::types::{TransformationDetails, UpdateResult};
use crate::config::Credentials;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::time::Duration;
use url::Url;

const API_HOST: &str = "https://api.cloudinary.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the account's admin API, authenticated with basic auth.
pub struct AdminApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    api_secret: String,
}

impl AdminApiClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = Url::parse(&format!("{API_HOST}/v1_1/{}/", credentials.cloud_name))
            .map_err(|e| Error::Config(format!("invalid admin API base URL: {e}")))?;
        Ok(Self {
            http,
            base_url,
            api_key: credentials.api_key.clone(),
            api_secret: credentials.api_secret.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config("admin API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
    }

    /// Decode a non-2xx response into the structured API error. The service
    /// wraps messages as `{"error": {"message": ...}}`.
    async fn error_from_response(response: reqwest::Response) -> Error {
        let http_code = response.status().as_u16();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {http_code}"));
        Error::Api { http_code, message }
    }
}

/// Body for a forced update: the stored definition is replaced with exactly
/// the supplied one.
fn unsafe_update_body(definition: &Map<String, Value>) -> Value {
    json!({ "unsafe_update": definition })
}

#[async_trait]
impl TransformationApi for AdminApiClient {
    async fn update_transformation(
        &self,
        name: &str,
        definition: &Map<String, Value>,
    ) -> Result<UpdateResult> {
        let url = self.endpoint(&["transformations", name])?;
        tracing::debug!(%url, "updating transformation");
        let response = self
            .request(reqwest::Method::PUT, url)
            .json(&unsafe_update_body(definition))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_transformation(
        &self,
        name: &str,
        opts: &ListOptions,
    ) -> Result<TransformationDetails> {
        let url = self.endpoint(&["transformations", name])?;
        let mut request = self.request(reqwest::Method::GET, url);
        if let Some(max_results) = opts.max_results {
            request = request.query(&[("max_results", max_results.to_string())]);
        }
        if let Some(cursor) = &opts.next_cursor {
            request = request.query(&[("next_cursor", cursor)]);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_derived_resources(&self, ids: &[String], invalidate: bool) -> Result<()> {
        let url = self.endpoint(&["derived_resources"])?;
        tracing::debug!(count = ids.len(), invalidate, "deleting derived resources");
        let response = self
            .request(reqwest::Method::DELETE, url)
            .json(&json!({
                "derived_resource_ids": ids,
                "invalidate": invalidate,
            }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_body_wraps_the_definition_unmerged() {
        let mut definition = Map::new();
        definition.insert("width".to_string(), json!(600));
        definition.insert("height".to_string(), json!(600));

        let body = unsafe_update_body(&definition);
        assert_eq!(
            body,
            json!({"unsafe_update": {"width": 600, "height": 600}})
        );
    }

    #[test]
    fn endpoints_are_rooted_at_the_cloud_name() {
        let credentials = Credentials {
            cloud_name: "my-cloud".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
        };
        let client = AdminApiClient::new(&credentials).unwrap();

        let url = client.endpoint(&["transformations", "auto-400-xform"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.cloudinary.com/v1_1/my-cloud/transformations/auto-400-xform"
        );

        let url = client.endpoint(&["derived_resources"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.cloudinary.com/v1_1/my-cloud/derived_resources"
        );
    }
}
