//! Integration tests for Auth0 Core
//!
//! This test suite covers:
//! - Builder construction and seeding
//! - Single-key set and removal
//! - Bulk merge and clearing
//! - Snapshot independence
//! - Request assembly from a builder

use auth0_core::constants::*;
use auth0_core::{AuthenticationRequest, GrantType, ParameterBuilder, PasswordlessType};
use std::collections::HashMap;

fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod construction_tests {
    use super::*;

    #[test]
    fn test_new_builder_is_empty() {
        assert_eq!(ParameterBuilder::new_builder().as_dictionary(), HashMap::new());
    }

    #[test]
    fn test_authentication_builder() {
        assert_eq!(
            ParameterBuilder::new_authentication_builder().as_dictionary(),
            map(&[("scope", "openid")])
        );
    }

    #[test]
    fn test_seeded_builder_copies_input() {
        let mut initial = map(&[("a", "1")]);
        let builder = ParameterBuilder::with_parameters(&initial).set("b", Some("2"));

        initial.insert("c".to_string(), "3".to_string());
        initial.remove("a");

        assert_eq!(builder.as_dictionary(), map(&[("a", "1"), ("b", "2")]));
    }
}

mod set_tests {
    use super::*;

    #[test]
    fn test_set_then_read() {
        let pairs = [("k", "v"), ("", ""), ("spaced key", "value with spaces"), ("ü", "ñ")];
        for (key, value) in pairs {
            let parameters = ParameterBuilder::new_builder()
                .set(key, Some(value))
                .as_dictionary();
            assert_eq!(parameters.get(key).map(String::as_str), Some(value));
        }
    }

    #[test]
    fn test_set_then_unset() {
        let parameters = ParameterBuilder::new_builder()
            .set("k", Some("v"))
            .set("k", None)
            .as_dictionary();
        assert!(!parameters.contains_key("k"));
    }

    #[test]
    fn test_named_setters_chain() {
        let parameters = ParameterBuilder::new_builder()
            .set_client_id("A")
            .set_connection("B")
            .set_scope("C")
            .as_dictionary();

        assert_eq!(
            parameters,
            map(&[("client_id", "A"), ("connection", "B"), ("scope", "C")])
        );
    }

    #[test]
    fn test_every_named_setter_uses_its_key() {
        let parameters = ParameterBuilder::new_builder()
            .set_client_id("client")
            .set_grant_type(GRANT_TYPE_REFRESH_TOKEN)
            .set_connection("conn")
            .set_realm("realm")
            .set_scope(SCOPE_OFFLINE_ACCESS)
            .set_audience("https://api")
            .set_refresh_token("rt")
            .set_send(PasswordlessType::Code)
            .as_dictionary();

        assert_eq!(
            parameters,
            map(&[
                (CLIENT_ID_KEY, "client"),
                (GRANT_TYPE_KEY, "refresh_token"),
                (CONNECTION_KEY, "conn"),
                (REALM_KEY, "realm"),
                (SCOPE_KEY, "openid offline_access"),
                (AUDIENCE_KEY, "https://api"),
                (REFRESH_TOKEN_KEY, "rt"),
                (SEND_KEY, "code"),
            ])
        );
    }

    #[test]
    fn test_set_send_every_variant() {
        let variants = [
            (PasswordlessType::Code, "code"),
            (PasswordlessType::WebLink, "link"),
            (PasswordlessType::AndroidLink, "link_android"),
        ];
        for (variant, expected) in variants {
            let builder = ParameterBuilder::new_builder().set_send(variant);
            assert_eq!(builder.get("send"), Some(expected));
        }
    }
}

mod bulk_tests {
    use super::*;

    #[test]
    fn test_add_all_skips_none_values() {
        let parameters = ParameterBuilder::new_builder()
            .add_all([("x", Some("1")), ("y", None)])
            .as_dictionary();
        assert_eq!(parameters, map(&[("x", "1")]));
    }

    #[test]
    fn test_add_all_none_keeps_existing_value() {
        let parameters = ParameterBuilder::with_parameters([("y", "old")])
            .add_all([("y", None::<&str>)])
            .as_dictionary();
        assert_eq!(parameters, map(&[("y", "old")]));
    }

    #[test]
    fn test_add_all_overwrites() {
        let mut incoming: HashMap<String, Option<String>> = HashMap::new();
        incoming.insert("scope".to_string(), Some("profile".to_string()));
        incoming.insert("realm".to_string(), None);

        let parameters = ParameterBuilder::new_authentication_builder()
            .add_all(incoming)
            .as_dictionary();
        assert_eq!(parameters, map(&[("scope", "profile")]));
    }

    #[test]
    fn test_clear_all() {
        let builder = ParameterBuilder::new_authentication_builder()
            .set_client_id("A")
            .add_all([("x", Some("1"))])
            .clear_all();
        assert!(builder.as_dictionary().is_empty());
    }
}

mod snapshot_tests {
    use super::*;

    #[test]
    fn test_snapshot_is_independent() {
        let builder = ParameterBuilder::with_parameters([("a", "1")]).set("b", Some("2"));

        let mut snapshot = builder.as_dictionary();
        snapshot.insert("c".to_string(), "3".to_string());
        snapshot.remove("a");

        assert_eq!(builder.as_dictionary(), map(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_builder_reusable_after_snapshot() {
        let base = ParameterBuilder::new_builder().set_client_id("A");
        let first = base.as_dictionary();

        let extended = base.set_grant_type(GrantType::RefreshToken);
        let second = extended.as_dictionary();

        assert_eq!(first, map(&[("client_id", "A")]));
        assert_eq!(
            second,
            map(&[("client_id", "A"), ("grant_type", "refresh_token")])
        );
    }
}

mod request_tests {
    use super::*;

    #[test]
    fn test_request_from_builder() {
        let builder = ParameterBuilder::new_authentication_builder()
            .set_client_id("A")
            .set_grant_type(GrantType::Password);

        let request = AuthenticationRequest::post("oauth/token")
            .add_authentication_parameters(&builder)
            .set_audience("https://api");

        assert_eq!(request.parameters().len(), 4);
        assert_eq!(request.parameter(AUDIENCE_KEY), Some("https://api"));
        assert_eq!(builder.get(AUDIENCE_KEY), None);
    }
}
