//! Endpoint URL construction for the Beanstream (Bambora) payment REST API.
//!
//! URLs are assembled from templates carrying positional placeholders
//! (`{0}`..`{3}`): `{0}` is the platform subdomain, `{1}` the API version,
//! and the remaining slots are endpoint-specific identifiers. [`Endpoints`]
//! holds a platform/version pair and renders one fully substituted URL per
//! endpoint.

pub mod consts;
pub mod endpoints;
pub mod errors;
pub mod message_format;
pub mod types;

pub use endpoints::{Endpoint, Endpoints, UrlParam};
pub use errors::{CustomResult, EndpointError};
pub use types::{ApiVersion, CardId, EndpointConfig, Platform, ProfileId, TransactionId};
