//! Endpoint catalogue and URL rendering.

mod test;

use error_stack::ResultExt;
use url::Url;

use crate::{
    consts,
    errors::{CustomResult, EndpointError},
    message_format::format_message,
    types::{ApiVersion, EndpointConfig, Platform},
};

/// A Beanstream REST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    BasePayments,
    GetPayment,
    PreAuthCompletions,
    Returns,
    Voids,
    Continuations,
    Tokenization,
    BaseProfiles,
    Profile,
    Cards,
    Card,
    Reports,
}

/// Parameter slot of an endpoint template, in substitution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum UrlParam {
    Platform,
    Version,
    TransactionId,
    ProfileId,
    CardId,
}

impl Endpoint {
    /// Template string with positional placeholders.
    pub fn template(&self) -> &'static str {
        match self {
            Self::BasePayments => consts::BASE_PAYMENTS_URL,
            Self::GetPayment => consts::GET_PAYMENT_URL,
            Self::PreAuthCompletions => consts::PRE_AUTH_COMPLETIONS_URL,
            Self::Returns => consts::RETURNS_URL,
            Self::Voids => consts::VOIDS_URL,
            Self::Continuations => consts::CONTINUATIONS_URL,
            Self::Tokenization => consts::TOKENIZATION_URL,
            Self::BaseProfiles => consts::BASE_PROFILES_URL,
            Self::Profile => consts::PROFILE_URL,
            Self::Cards => consts::CARDS_URL,
            Self::Card => consts::CARD_URL,
            Self::Reports => consts::REPORTS_URL,
        }
    }

    /// Ordered parameter names filled into the template.
    pub fn params(&self) -> &'static [UrlParam] {
        match self {
            Self::BasePayments | Self::BaseProfiles | Self::Reports => {
                &[UrlParam::Platform, UrlParam::Version]
            }
            Self::GetPayment
            | Self::PreAuthCompletions
            | Self::Returns
            | Self::Voids
            | Self::Continuations => {
                &[UrlParam::Platform, UrlParam::Version, UrlParam::TransactionId]
            }
            Self::Tokenization => &[UrlParam::Platform],
            Self::Profile | Self::Cards => {
                &[UrlParam::Platform, UrlParam::Version, UrlParam::ProfileId]
            }
            Self::Card => &[
                UrlParam::Platform,
                UrlParam::Version,
                UrlParam::ProfileId,
                UrlParam::CardId,
            ],
        }
    }

    fn identifier_count(&self) -> usize {
        self.params()
            .iter()
            .filter(|param| !matches!(param, UrlParam::Platform | UrlParam::Version))
            .count()
    }
}

/// Holds the platform and version and renders fully substituted endpoint
/// URLs for the API they select.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    platform: Platform,
    version: ApiVersion,
}

impl Endpoints {
    pub fn new(platform: Platform, version: ApiVersion) -> Self {
        Self { platform, version }
    }

    pub fn from_config(config: &EndpointConfig) -> Self {
        Self::new(config.platform.clone(), config.version.clone())
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Render `endpoint`, filling its identifier slots from `ids` in order.
    ///
    /// Platform and version come from `self`; `ids` must supply exactly the
    /// remaining parameters of the endpoint.
    pub fn url(&self, endpoint: Endpoint, ids: &[&str]) -> CustomResult<String, EndpointError> {
        let params = endpoint.params();
        if ids.len() != endpoint.identifier_count() {
            return Err(EndpointError::ParameterCountMismatch {
                endpoint: endpoint.to_string(),
                expected: endpoint.identifier_count(),
                got: ids.len(),
            }
            .into());
        }

        let mut ids = ids.iter();
        let mut args = Vec::with_capacity(params.len());
        for param in params {
            let arg = match param {
                UrlParam::Platform => self.platform.as_ref(),
                UrlParam::Version => self.version.as_ref(),
                UrlParam::TransactionId | UrlParam::ProfileId | UrlParam::CardId => ids
                    .next()
                    .copied()
                    .ok_or(EndpointError::MissingUrlParameter { index: args.len() })?,
            };
            args.push(arg);
        }

        let formatted = format_message(endpoint.template(), &args)?;
        Url::parse(&formatted).change_context(EndpointError::InvalidUrl)?;
        tracing::debug!(endpoint = %endpoint, url = %formatted, "built endpoint url");
        Ok(formatted)
    }

    // payments

    pub fn base_payments_url(&self) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::BasePayments, &[])
    }

    pub fn payment_url(
        &self,
        transaction_id: impl AsRef<str>,
    ) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::GetPayment, &[transaction_id.as_ref()])
    }

    pub fn pre_auth_completions_url(
        &self,
        transaction_id: impl AsRef<str>,
    ) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::PreAuthCompletions, &[transaction_id.as_ref()])
    }

    pub fn returns_url(
        &self,
        transaction_id: impl AsRef<str>,
    ) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Returns, &[transaction_id.as_ref()])
    }

    pub fn voids_url(
        &self,
        transaction_id: impl AsRef<str>,
    ) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Voids, &[transaction_id.as_ref()])
    }

    pub fn continuations_url(
        &self,
        transaction_id: impl AsRef<str>,
    ) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Continuations, &[transaction_id.as_ref()])
    }

    pub fn tokenization_url(&self) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Tokenization, &[])
    }

    // profiles

    pub fn profiles_url(&self) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::BaseProfiles, &[])
    }

    pub fn profile_url(&self, profile_id: impl AsRef<str>) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Profile, &[profile_id.as_ref()])
    }

    pub fn cards_url(&self, profile_id: impl AsRef<str>) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Cards, &[profile_id.as_ref()])
    }

    pub fn card_url(
        &self,
        profile_id: impl AsRef<str>,
        card_id: impl AsRef<str>,
    ) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Card, &[profile_id.as_ref(), card_id.as_ref()])
    }

    // reporting

    pub fn reports_url(&self) -> CustomResult<String, EndpointError> {
        self.url(Endpoint::Reports, &[])
    }
}
