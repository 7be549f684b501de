#[cfg(test)]
#[allow(clippy::unwrap_used)]
#[allow(clippy::expect_used)]
mod tests {
    use strum::IntoEnumIterator;
    use url::Url;

    use crate::{
        endpoints::{Endpoint, Endpoints},
        errors::EndpointError,
        types::{ApiVersion, CardId, EndpointConfig, Platform, ProfileId, TransactionId},
    };

    fn endpoints() -> Endpoints {
        Endpoints::new(Platform::new("www"), ApiVersion::new("v1"))
    }

    #[test]
    fn base_payments_url_substitutes_platform_and_version() {
        assert_eq!(
            endpoints().base_payments_url().unwrap(),
            "https://www.beanstream.com/api/v1/payments"
        );
    }

    #[test]
    fn payment_url_appends_the_transaction_id() {
        assert_eq!(
            endpoints().payment_url("10000001").unwrap(),
            "https://www.beanstream.com/api/v1/payments/10000001"
        );
    }

    #[test]
    fn pre_auth_completions_url_targets_the_transaction() {
        assert_eq!(
            endpoints().pre_auth_completions_url("10000001").unwrap(),
            "https://www.beanstream.com/api/v1/payments/10000001/completions"
        );
    }

    #[test]
    fn returns_url_targets_the_transaction() {
        assert_eq!(
            endpoints().returns_url("10000001").unwrap(),
            "https://www.beanstream.com/api/v1/payments/10000001/returns"
        );
    }

    #[test]
    fn voids_url_targets_the_transaction() {
        assert_eq!(
            endpoints().voids_url("10000001").unwrap(),
            "https://www.beanstream.com/api/v1/payments/10000001/void"
        );
    }

    #[test]
    fn continuations_url_targets_the_transaction() {
        assert_eq!(
            endpoints().continuations_url("10000001").unwrap(),
            "https://www.beanstream.com/api/v1/payments/10000001/continue"
        );
    }

    #[test]
    fn tokenization_url_only_uses_the_platform() {
        assert_eq!(
            endpoints().tokenization_url().unwrap(),
            "https://www.beanstream.com/scripts/tokenization/tokens"
        );
    }

    #[test]
    fn profiles_url_substitutes_platform_and_version() {
        assert_eq!(
            endpoints().profiles_url().unwrap(),
            "https://www.beanstream.com/api/v1/profiles"
        );
    }

    #[test]
    fn profile_url_appends_the_profile_id() {
        assert_eq!(
            endpoints().profile_url("prof_123").unwrap(),
            "https://www.beanstream.com/api/v1/profiles/prof_123"
        );
    }

    #[test]
    fn cards_url_lists_the_profile_cards() {
        assert_eq!(
            endpoints().cards_url("prof_123").unwrap(),
            "https://www.beanstream.com/api/v1/profiles/prof_123/cards"
        );
    }

    #[test]
    fn card_url_takes_profile_then_card_id() {
        assert_eq!(
            endpoints().card_url("prof_123", "2").unwrap(),
            "https://www.beanstream.com/api/v1/profiles/prof_123/cards/2"
        );
    }

    #[test]
    fn reports_url_substitutes_platform_and_version() {
        assert_eq!(
            endpoints().reports_url().unwrap(),
            "https://www.beanstream.com/api/v1/reports"
        );
    }

    #[test]
    fn typed_ids_are_accepted() {
        let url = endpoints()
            .card_url(ProfileId::new("prof_123"), CardId::new("2"))
            .unwrap();
        assert_eq!(
            url,
            "https://www.beanstream.com/api/v1/profiles/prof_123/cards/2"
        );

        let url = endpoints()
            .payment_url(TransactionId::new("10000001"))
            .unwrap();
        assert_eq!(url, "https://www.beanstream.com/api/v1/payments/10000001");
    }

    #[test]
    fn default_config_selects_production_v1() {
        let config: EndpointConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        let endpoints = Endpoints::from_config(&config);
        assert_eq!(
            endpoints.base_payments_url().unwrap(),
            "https://www.beanstream.com/api/v1/payments"
        );
    }

    #[test]
    fn config_overrides_platform_and_version() {
        let config: EndpointConfig = serde_json::from_value(serde_json::json!({
            "platform": "api",
            "version": "v2",
        }))
        .unwrap();
        let endpoints = Endpoints::from_config(&config);
        assert_eq!(
            endpoints.base_payments_url().unwrap(),
            "https://api.beanstream.com/api/v2/payments"
        );
    }

    #[test]
    fn wrong_identifier_count_is_rejected() {
        let err = endpoints().url(Endpoint::GetPayment, &[]).unwrap_err();
        assert_eq!(
            err.current_context(),
            &EndpointError::ParameterCountMismatch {
                endpoint: "get_payment".to_string(),
                expected: 1,
                got: 0,
            }
        );

        let err = endpoints()
            .url(Endpoint::BasePayments, &["10000001"])
            .unwrap_err();
        assert!(matches!(
            err.current_context(),
            EndpointError::ParameterCountMismatch { .. }
        ));
    }

    #[test]
    fn every_endpoint_renders_a_valid_url() {
        let endpoints = endpoints();
        for endpoint in Endpoint::iter() {
            let ids = vec!["id"; endpoint.identifier_count()];
            let url = endpoints.url(endpoint, &ids).unwrap();
            assert!(!url.contains('{'), "unsubstituted placeholder in {url}");
            Url::parse(&url).expect("endpoint should render an absolute URL");
        }
    }

    #[test]
    fn platform_breaking_the_host_grammar_is_rejected() {
        let endpoints = Endpoints::new(Platform::new("bad platform"), ApiVersion::new("v1"));
        let err = endpoints.base_payments_url().unwrap_err();
        assert_eq!(err.current_context(), &EndpointError::InvalidUrl);
    }
}
