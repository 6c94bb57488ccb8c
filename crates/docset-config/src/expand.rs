//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a configuration value.
///
/// Values without `${` are returned unchanged, so bare `$` characters in URLs
/// survive untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSET_TEST_SIMPLE", "app-123");
        }
        let result = expand_env("${DOCSET_TEST_SIMPLE}", "search.app_id").unwrap();
        assert_eq!(result, "app-123");
        unsafe {
            std::env::remove_var("DOCSET_TEST_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSET_TEST_UNSET");
        }
        let result = expand_env(
            "https://${DOCSET_TEST_UNSET:-docs.example.com}",
            "site.url",
        )
        .unwrap();
        assert_eq!(result, "https://docs.example.com");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSET_TEST_MISSING");
        }
        let err = expand_env("${DOCSET_TEST_MISSING}", "search.api_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("DOCSET_TEST_MISSING"));
        assert!(err.to_string().contains("search.api_key"));
    }

    #[test]
    fn test_literal_unchanged() {
        let result = expand_env("https://example.com/$path", "site.url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
