//! # vitrine-client
//!
//! REST client for the site CMS and the content services built on it.

pub mod api;
pub mod cms;
pub mod selection;
pub mod traits;

pub use api::{ApiClient, ClientError};
pub use cms::CmsClient;
pub use traits::ContentApi;
