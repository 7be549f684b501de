//! URL templates and defaults for the Beanstream REST API.
//!
//! Placeholders are positional: `{0}` platform, `{1}` version, `{2}`/`{3}`
//! endpoint-specific identifiers.

/// Platform used when none is configured
pub const DEFAULT_PLATFORM: &str = "www";
/// API version used when none is configured
pub const DEFAULT_VERSION: &str = "v1";

/// Payments collection
pub const BASE_PAYMENTS_URL: &str = "https://{0}.beanstream.com/api/{1}/payments";
/// Single payment, keyed by transaction id
pub const GET_PAYMENT_URL: &str = "https://{0}.beanstream.com/api/{1}/payments/{2}";
/// Pre-auth completion for a transaction
pub const PRE_AUTH_COMPLETIONS_URL: &str =
    "https://{0}.beanstream.com/api/{1}/payments/{2}/completions";
/// Return (refund) for a transaction
pub const RETURNS_URL: &str = "https://{0}.beanstream.com/api/{1}/payments/{2}/returns";
/// Void for a transaction
pub const VOIDS_URL: &str = "https://{0}.beanstream.com/api/{1}/payments/{2}/void";
/// Interac/3DS continuation for a transaction
pub const CONTINUATIONS_URL: &str = "https://{0}.beanstream.com/api/{1}/payments/{2}/continue";
/// Card tokenization script host, platform only
pub const TOKENIZATION_URL: &str = "https://{0}.beanstream.com/scripts/tokenization/tokens";
/// Payment profiles collection
pub const BASE_PROFILES_URL: &str = "https://{0}.beanstream.com/api/{1}/profiles";
/// Single payment profile, keyed by profile id
pub const PROFILE_URL: &str = "https://{0}.beanstream.com/api/{1}/profiles/{2}";
/// Cards stored on a payment profile
pub const CARDS_URL: &str = "https://{0}.beanstream.com/api/{1}/profiles/{2}/cards";
/// Single card on a payment profile
pub const CARD_URL: &str = "https://{0}.beanstream.com/api/{1}/profiles/{2}/cards/{3}";
/// Transaction reports
pub const REPORTS_URL: &str = "https://{0}.beanstream.com/api/{1}/reports";
