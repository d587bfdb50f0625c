//! Core types for the Nexla bridge backend.
//!
//! Defines the credential model resolved from the environment, the nexset
//! projection returned to the front-end, and the token preview used by the
//! connect flow.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod credentials;
pub mod error;
pub mod nexset;
pub mod token;

pub use credentials::{Credential, ACCESS_TOKEN_VAR, SERVICE_KEY_VAR};
pub use error::CoreError;
pub use nexset::Nexset;
pub use token::{token_preview, MASKED_PREVIEW, PREVIEW_LEN};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_prefers_service_key_when_both_set() {
        temp_env::with_vars(
            [
                (SERVICE_KEY_VAR, Some("sk-12345")),
                (ACCESS_TOKEN_VAR, Some("at-67890")),
            ],
            || {
                let cred = match Credential::from_env() {
                    Ok(c) => c,
                    Err(e) => panic!("unexpected error: {e}"),
                };
                assert_eq!(
                    cred,
                    Credential::ServiceKey("sk-12345".to_owned()),
                    "service key must win when both variables are set"
                );
            },
        );
    }

    #[test]
    fn from_env_falls_back_to_access_token() {
        temp_env::with_vars(
            [
                (SERVICE_KEY_VAR, None),
                (ACCESS_TOKEN_VAR, Some("at-67890")),
            ],
            || {
                let cred = match Credential::from_env() {
                    Ok(c) => c,
                    Err(e) => panic!("unexpected error: {e}"),
                };
                assert_eq!(cred, Credential::AccessToken("at-67890".to_owned()));
            },
        );
    }

    #[test]
    fn from_env_treats_empty_string_as_absent() {
        temp_env::with_vars(
            [
                (SERVICE_KEY_VAR, Some("")),
                (ACCESS_TOKEN_VAR, Some("at-67890")),
            ],
            || {
                let cred = match Credential::from_env() {
                    Ok(c) => c,
                    Err(e) => panic!("unexpected error: {e}"),
                };
                assert_eq!(
                    cred,
                    Credential::AccessToken("at-67890".to_owned()),
                    "empty service key must not shadow the access token"
                );
            },
        );
    }

    #[test]
    fn from_env_errors_when_both_missing() {
        temp_env::with_vars(
            [(SERVICE_KEY_VAR, None::<&str>), (ACCESS_TOKEN_VAR, None)],
            || {
                assert!(Credential::from_env().is_err());
            },
        );
    }

    #[test]
    fn from_env_errors_when_both_empty() {
        temp_env::with_vars(
            [(SERVICE_KEY_VAR, Some("")), (ACCESS_TOKEN_VAR, Some(""))],
            || {
                assert!(
                    Credential::from_env().is_err(),
                    "empty strings must count as absent credentials"
                );
            },
        );
    }

    #[test]
    fn credential_kind_labels_both_forms() {
        assert_eq!(Credential::ServiceKey("sk".to_owned()).kind(), "service_key");
        assert_eq!(Credential::AccessToken("at".to_owned()).kind(), "access_token");
    }

    #[test]
    fn credential_debug_redacts_the_secret() {
        let cred = Credential::ServiceKey("sk-super-secret-value".to_owned());
        let rendered = format!("{cred:?}");
        assert!(
            !rendered.contains("sk-super-secret-value"),
            "debug output must not contain the secret, got {rendered}"
        );
        assert!(rendered.contains("redacted"), "debug output must mark the redaction");
    }

    #[test]
    fn token_preview_truncates_long_tokens_to_ten_chars() {
        assert_eq!(token_preview("abcdefghijklm"), "abcdefghij...");
    }

    #[test]
    fn token_preview_masks_short_tokens() {
        assert_eq!(token_preview("short"), MASKED_PREVIEW);
    }

    #[test]
    fn token_preview_masks_exactly_ten_chars() {
        // Strict "longer than" check: a ten-char token has nothing to hide
        // behind the ellipsis, so it is masked outright.
        assert_eq!(token_preview("abcdefghij"), MASKED_PREVIEW);
    }

    #[test]
    fn token_preview_truncates_eleven_chars() {
        assert_eq!(token_preview("abcdefghijk"), "abcdefghij...");
    }

    #[test]
    fn token_preview_masks_empty_token() {
        assert_eq!(token_preview(""), MASKED_PREVIEW);
    }

    #[test]
    fn token_preview_counts_chars_not_bytes() {
        // 13 chars, far more than 10 bytes; must not panic on a char boundary.
        assert_eq!(token_preview("日本語のトークンとても長い"), "日本語のトークンとて...");
    }

    #[test]
    fn nexset_deserialization_drops_unknown_fields() {
        let json = r#"{
            "id": 5001,
            "name": "orders",
            "description": "Raw order events",
            "status": "ACTIVE",
            "owner": {"id": 42, "email": "owner@example.com"},
            "flow_type": "streaming"
        }"#;
        let nexset: Nexset = match serde_json::from_str(json) {
            Ok(n) => n,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(nexset.id, 5001);
        assert_eq!(nexset.name.as_deref(), Some("orders"));
        assert_eq!(nexset.description.as_deref(), Some("Raw order events"));
        assert_eq!(nexset.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn nexset_deserialization_tolerates_missing_optional_fields() {
        let nexset: Nexset = match serde_json::from_str(r#"{"id": 7}"#) {
            Ok(n) => n,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(nexset.id, 7);
        assert!(nexset.name.is_none());
        assert!(nexset.description.is_none());
        assert!(nexset.status.is_none());
    }

    #[test]
    fn nexset_serialization_emits_all_four_fields() {
        let nexset: Nexset = match serde_json::from_str(r#"{"id": 7}"#) {
            Ok(n) => n,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        let value = match serde_json::to_value(&nexset) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        let obj = match value.as_object() {
            Some(o) => o,
            None => panic!("nexset must serialize to an object"),
        };
        assert_eq!(obj.len(), 4, "projection must emit exactly four fields");
        assert!(obj["name"].is_null(), "missing name must serialize as null");
        assert!(obj["description"].is_null());
        assert!(obj["status"].is_null());
    }

    proptest::proptest! {
        #[test]
        fn proptest_preview_never_reveals_more_than_prefix(token in ".*") {
            let preview = token_preview(&token);
            if token.chars().count() > PREVIEW_LEN {
                let prefix: String = token.chars().take(PREVIEW_LEN).collect();
                proptest::prop_assert_eq!(&preview, &format!("{prefix}..."));
                proptest::prop_assert_eq!(
                    preview.chars().count(),
                    PREVIEW_LEN + 3,
                    "preview must be exactly the prefix plus ellipsis"
                );
            } else {
                proptest::prop_assert_eq!(&preview, MASKED_PREVIEW);
            }
        }

        #[test]
        fn proptest_preview_is_bounded(token in ".*") {
            let preview = token_preview(&token);
            proptest::prop_assert!(
                preview.chars().count() <= PREVIEW_LEN + 3,
                "preview must never exceed the fixed prefix plus ellipsis"
            );
        }
    }
}
