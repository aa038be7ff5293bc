//! Tests for the credential presence check
//!
//! Covers the absent, malformed, falsy and valid storage states and checks
//! which of them leave the stored record in place.

#[cfg(test)]
mod tests {
    use crate::auth::Credentials;
    use crate::config::FrontendConfig;
    use crate::storage::{KeyValueStore, MemoryStorage};
    use test_case::test_case;

    const KEY: &str = "doctor";

    fn credentials(storage: &MemoryStorage) -> Credentials<&MemoryStorage> {
        Credentials::new(storage, KEY)
    }

    /// Tests that a missing record means signed out
    #[test]
    fn test_absent_record_is_unauthenticated() {
        let storage = MemoryStorage::new();
        assert!(!credentials(&storage).is_authenticated());
        assert!(!storage.contains(KEY));
    }

    /// Tests that an empty stored value is treated like a missing one
    #[test]
    fn test_empty_value_is_unauthenticated_and_kept() {
        let storage = MemoryStorage::with_entry(KEY, "");
        assert!(!credentials(&storage).is_authenticated());
        assert!(storage.contains(KEY));
    }

    /// Tests that malformed text is cleaned up
    #[test_case("not-json" ; "plain text")]
    #[test_case("{token:abc}" ; "unquoted keys")]
    #[test_case(r#"{"token":"abc""# ; "truncated")]
    fn test_malformed_record_is_removed(raw: &str) {
        let storage = MemoryStorage::with_entry(KEY, raw);
        assert!(!credentials(&storage).is_authenticated());
        assert!(!storage.contains(KEY));
    }

    /// Tests that a non-empty token authenticates
    #[test_case(r#"{"token":"abc"}"# ; "minimal")]
    #[test_case(r#"{"token":"eyJhbGciOi","doctorId":12,"name":"Dr. Wang"}"# ; "full record")]
    fn test_token_authenticates(raw: &str) {
        let storage = MemoryStorage::with_entry(KEY, raw);
        assert!(credentials(&storage).is_authenticated());
    }

    /// Tests that falsy tokens do not authenticate and the record survives
    #[test_case("{}" ; "missing token")]
    #[test_case(r#"{"token":""}"# ; "empty token")]
    #[test_case(r#"{"token":null}"# ; "null token")]
    #[test_case(r#"{"token":0}"# ; "zero token")]
    #[test_case(r#"{"token":false}"# ; "false token")]
    #[test_case("null" ; "null record")]
    fn test_falsy_token_keeps_record(raw: &str) {
        let storage = MemoryStorage::with_entry(KEY, raw);
        assert!(!credentials(&storage).is_authenticated());
        assert_eq!(storage.get(KEY).as_deref(), Some(raw));
    }

    /// Tests that repeated checks agree and never touch storage
    #[test_case(r#"{"token":"abc"}"#, true ; "authenticated")]
    #[test_case(r#"{"token":""}"#, false ; "unauthenticated")]
    fn test_repeated_checks_are_stable(raw: &str, expected: bool) {
        let storage = MemoryStorage::with_entry(KEY, raw);
        let credentials = credentials(&storage);
        for _ in 0..5 {
            assert_eq!(credentials.is_authenticated(), expected);
            assert_eq!(storage.get(KEY).as_deref(), Some(raw));
        }
    }

    /// Tests that the check follows storage changes between calls
    #[test]
    fn test_check_is_not_cached() {
        let storage = MemoryStorage::new();
        let credentials = credentials(&storage);
        assert!(!credentials.is_authenticated());

        storage.insert(KEY, r#"{"token":"abc"}"#);
        assert!(credentials.is_authenticated());

        storage.remove(KEY);
        assert!(!credentials.is_authenticated());
    }

    /// Tests that only the configured key is consulted
    #[test]
    fn test_other_keys_are_ignored() {
        let storage = MemoryStorage::with_entry("patient", r#"{"token":"abc"}"#);
        assert!(!credentials(&storage).is_authenticated());
        assert!(storage.contains("patient"));
    }

    /// Tests that signing out removes the record
    #[test]
    fn test_sign_out_removes_record() {
        let storage = MemoryStorage::with_entry(KEY, r#"{"token":"abc"}"#);
        let credentials = credentials(&storage);
        credentials.sign_out();
        assert!(!storage.contains(KEY));
        assert!(!credentials.is_authenticated());
    }

    /// Tests that the key comes from configuration
    #[test]
    fn test_from_config_uses_configured_key() {
        let config = FrontendConfig::new();
        let storage = MemoryStorage::with_entry(config.credential_key(), r#"{"token":"abc"}"#);
        let credentials = Credentials::from_config(&storage, &config);
        assert!(credentials.is_authenticated());

        credentials.sign_out();
        assert!(!storage.contains(config.credential_key()));
    }

    /// Tests that load separates absent from malformed
    #[test]
    fn test_load_reports_malformed() {
        let storage = MemoryStorage::with_entry(KEY, "not-json");
        assert!(credentials(&storage).load().is_err());
        // load itself never cleans up
        assert!(storage.contains(KEY));

        let empty = MemoryStorage::new();
        assert!(matches!(credentials(&empty).load(), Ok(None)));
    }
}
