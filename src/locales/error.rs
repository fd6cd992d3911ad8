//! Error kinds reported by the locale registration cycle.

use thiserror::Error;

/// Errors produced while registering custom languages or patching locale names.
///
/// Only `RegistrationFailed` is fatal to a cycle; every other condition is
/// recorded and processing continues with the remaining codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A custom locale code did not have the expected `lang-REGION` shape.
    ///
    /// Codes like this are supposed to be filtered out before they reach the
    /// patcher; when one slips through, it is skipped and recorded.
    #[error("unexpected locale format: '{0}' has no region subtag")]
    MalformedLocaleCode(String),

    /// The host registry refused to mark a language as registered.
    ///
    /// A partially registered set plus cleared caches is worse than no
    /// registration at all, so the caller treats this as fatal.
    #[error("could not mark language '{code}' as registered: {reason}")]
    RegistrationFailed {
        /// The language code that failed to register
        code: String,
        /// Host-supplied reason for the failure
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_locale_code_display() {
        let err = LocaleError::MalformedLocaleCode("noregion".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected locale format: 'noregion' has no region subtag"
        );
    }

    #[test]
    fn test_registration_failed_display() {
        let err = LocaleError::RegistrationFailed {
            code: "du-my".to_string(),
            reason: "registry unavailable".to_string(),
        };
        assert!(err.to_string().contains("du-my"));
        assert!(err.to_string().contains("registry unavailable"));
    }
}
