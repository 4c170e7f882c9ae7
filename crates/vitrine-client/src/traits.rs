use async_trait::async_trait;
use serde_json::Value;
use vitrine_core::content::{
    AboutUsData, ContactData, ContactMessage, PrivacyPolicyData, TermsData,
};

use crate::api::ClientError;

/// Content source trait: where pages get their CMS data.
///
/// [`CmsClient`](crate::CmsClient) implements it over HTTP; pages only see
/// this trait so they can be exercised without a server. Every method is a
/// single independent request with no retry.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Contact details, returned as-is.
    async fn contact_info(&self) -> Result<ContactData, ClientError>;

    /// The current privacy policy, or `None` when the CMS has none.
    async fn privacy_policy(&self) -> Result<Option<PrivacyPolicyData>, ClientError>;

    /// The current terms of service, or `None` when the CMS has none.
    async fn terms_of_service(&self) -> Result<Option<TermsData>, ClientError>;

    /// The about-us record, or `None` when the CMS has none.
    async fn about_us(&self) -> Result<Option<AboutUsData>, ClientError>;

    /// Submit the contact form. The reply has no fixed shape.
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<Value, ClientError>;
}
