use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// GC Notify API key, sent as `Authorization: ApiKey-v1 <key>`.
///
/// Invariant: at least [`ApiKey::MIN_LEN`] characters after trimming.
///
/// `Debug` never prints the key itself.
pub struct ApiKey(String);

impl ApiKey {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "api_key";

    /// Shortest key GC Notify ever issues (`<name>-<service id>-<secret>`).
    pub const MIN_LEN: usize = 72;

    /// Scheme prefix of the `Authorization` header.
    pub const SCHEME: &'static str = "ApiKey-v1";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let actual = trimmed.chars().count();
        if actual < Self::MIN_LEN {
            return Err(ValidationError::ApiKeyTooShort {
                min: Self::MIN_LEN,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this key.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", Self::SCHEME, self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_KEY: &str = "gcntfy-testing11-00000000-0000-0000-0000-000000000000-00000000-0000-0000-0000-00000000000000";

    #[test]
    fn api_key_rejects_short_values() {
        assert_eq!(
            ApiKey::new("bad_key").unwrap_err(),
            ValidationError::ApiKeyTooShort {
                min: ApiKey::MIN_LEN,
                actual: 7,
            }
        );

        let one_short = "k".repeat(ApiKey::MIN_LEN - 1);
        assert!(ApiKey::new(one_short).is_err());
    }

    #[test]
    fn api_key_accepts_minimum_length_and_longer() {
        assert!(ApiKey::new("k".repeat(ApiKey::MIN_LEN)).is_ok());

        let key = ApiKey::new(VALID_KEY).unwrap();
        assert_eq!(key.as_str(), VALID_KEY);
    }

    #[test]
    fn api_key_trims_surrounding_whitespace_before_length_check() {
        let padded = format!("  {}  ", "k".repeat(ApiKey::MIN_LEN - 2));
        assert!(ApiKey::new(padded).is_err());

        let key = ApiKey::new(format!(" {VALID_KEY}\n")).unwrap();
        assert_eq!(key.as_str(), VALID_KEY);
    }

    #[test]
    fn api_key_rejects_blank() {
        assert_eq!(
            ApiKey::new("   ").unwrap_err(),
            ValidationError::Empty {
                field: ApiKey::FIELD
            }
        );
    }

    #[test]
    fn authorization_header_uses_api_key_v1_scheme() {
        let key = ApiKey::new(VALID_KEY).unwrap();
        assert_eq!(key.authorization_header(), format!("ApiKey-v1 {VALID_KEY}"));
    }

    #[test]
    fn debug_does_not_leak_key() {
        let key = ApiKey::new(VALID_KEY).unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("gcntfy"));
    }
}
