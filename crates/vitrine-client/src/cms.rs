//! Content services over the CMS REST API.
//!
//! One GET per call against a configured endpoint. List endpoints answer
//! with `{message, data: [...]}`; the envelope is unwrapped here, and a
//! single record is chosen with [`select_current`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};
use vitrine_core::config::{ApiConfig, EndpointsConfig};
use vitrine_core::content::{
    AboutUsData, ContactData, ContactMessage, PrivacyPolicyData, TermsData,
};

use crate::api::{ApiClient, ClientError};
use crate::selection::select_current;
use crate::traits::ContentApi;

/// CMS-backed [`ContentApi`].
#[derive(Debug, Clone)]
pub struct CmsClient {
    api: ApiClient,
    endpoints: EndpointsConfig,
}

impl CmsClient {
    pub fn new(api: ApiClient, endpoints: EndpointsConfig) -> Self {
        Self { api, endpoints }
    }

    /// Create from config values.
    pub fn from_config(cfg: &ApiConfig) -> Self {
        Self::new(ApiClient::new(cfg.base_url.clone()), cfg.endpoints.clone())
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// GET a list endpoint and return its records in source order.
    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let body: Value = self.api.get(path).await?;
        let items = unwrap_envelope(body);
        debug!("cms: {path} returned {} record(s)", items.len());
        Ok(decode_records(path, items))
    }
}

/// Decode each record on its own. A record that fails is skipped, so one
/// malformed entry never hides its valid siblings.
fn decode_records<T: DeserializeOwned>(path: &str, items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("cms: {path} record {i} skipped: {e}");
                None
            }
        })
        .collect()
}

/// Flatten the shapes a list endpoint may answer with into its records.
///
/// Accepts `{data: [...]}`, `{data: {...}}`, a bare list, or a bare object.
/// Entries that are not objects are dropped.
fn unwrap_envelope(body: Value) -> Vec<Value> {
    let payload = match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    match payload {
        Value::Array(items) => items.into_iter().filter(Value::is_object).collect(),
        obj @ Value::Object(_) => vec![obj],
        _ => Vec::new(),
    }
}

#[async_trait]
impl ContentApi for CmsClient {
    async fn contact_info(&self) -> Result<ContactData, ClientError> {
        self.api.get(&self.endpoints.contact).await
    }

    async fn privacy_policy(&self) -> Result<Option<PrivacyPolicyData>, ClientError> {
        let docs: Vec<PrivacyPolicyData> = self.fetch_list(&self.endpoints.privacy_policy).await?;
        Ok(select_current(docs))
    }

    async fn terms_of_service(&self) -> Result<Option<TermsData>, ClientError> {
        let docs: Vec<TermsData> = self.fetch_list(&self.endpoints.terms).await?;
        Ok(select_current(docs))
    }

    async fn about_us(&self) -> Result<Option<AboutUsData>, ClientError> {
        let records: Vec<AboutUsData> = self.fetch_list(&self.endpoints.about_us).await?;
        Ok(records.into_iter().last())
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<Value, ClientError> {
        let reply = self
            .api
            .post(&self.endpoints.contact_submit, Some(message))
            .await?;
        info!("cms: contact message submitted");
        Ok(reply)
    }
}
