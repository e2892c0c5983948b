//! `${VAR}` and `${VAR:-default}` expansion in configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Bare `$VAR` is left alone; only the braced form is expanded. `field`
/// names the configuration key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, MissingVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| MissingVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct MissingVar(String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: no other test touches this variable
        unsafe {
            std::env::set_var("QUIRE_TEST_EXPORT_ROOT", "/srv/bibles");
        }
        let result = expand_env("${QUIRE_TEST_EXPORT_ROOT}/export", "output.dir").unwrap();
        assert_eq!(result, "/srv/bibles/export");
        unsafe {
            std::env::remove_var("QUIRE_TEST_EXPORT_ROOT");
        }
    }

    #[test]
    fn test_expand_default() {
        // SAFETY: no other test touches this variable
        unsafe {
            std::env::remove_var("QUIRE_TEST_UNSET_FONT");
        }
        let result = expand_env("${QUIRE_TEST_UNSET_FONT:-Gentium}", "convert.font").unwrap();
        assert_eq!(result, "Gentium");
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: no other test touches this variable
        unsafe {
            std::env::remove_var("QUIRE_TEST_MISSING");
        }
        let err = expand_env("${QUIRE_TEST_MISSING}", "output.dir").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in output.dir: ${QUIRE_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_bare_dollar_unchanged() {
        assert_eq!(expand_env("$HOME/export", "output.dir").unwrap(), "$HOME/export");
    }
}
