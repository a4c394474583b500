//! Canonical per-platform model configuration
//!
//! The model lists are configuration data, not core logic: they define both
//! the `result.json` lookup keys and the output ordering of every artifact.
//! Pipeline functions take them as parameters so the core works with
//! arbitrary sets; these defaults mirror the models exercised by the mobile
//! E2E suites.

/// Default canonical model order for the iOS E2E suite
pub const DEFAULT_IOS_MODELS: &[&str] = &[
    "whisper-tiny",
    "whisper-base",
    "whisper-small",
    "whisper-large-v3-turbo",
    "whisper-large-v3-turbo-compressed",
    "moonshine-tiny",
    "moonshine-base",
    "sensevoice-small",
    "zipformer-20m",
    "omnilingual-300m",
    "parakeet-tdt-v3",
];

/// Default canonical model order for the Android E2E suite
pub const DEFAULT_ANDROID_MODELS: &[&str] = &[
    "whisper-tiny",
    "whisper-base",
    "whisper-base-en",
    "whisper-small",
    "whisper-large-v3-turbo",
    "whisper-large-v3-turbo-compressed",
    "moonshine-tiny",
    "moonshine-base",
    "sensevoice-small",
    "omnilingual-300m",
    "zipformer-20m",
];

/// Materialize a default list as owned strings
#[must_use]
pub fn to_owned_list(models: &[&str]) -> Vec<String> {
    models.iter().map(|m| (*m).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_nonempty_and_unique() {
        for list in [DEFAULT_IOS_MODELS, DEFAULT_ANDROID_MODELS] {
            assert!(!list.is_empty());
            let mut seen = std::collections::HashSet::new();
            for model in list {
                assert!(seen.insert(model), "duplicate model id: {model}");
            }
        }
    }

    #[test]
    fn test_to_owned_list_preserves_order() {
        let owned = to_owned_list(DEFAULT_IOS_MODELS);
        assert_eq!(owned.len(), DEFAULT_IOS_MODELS.len());
        assert_eq!(owned[0], "whisper-tiny");
        assert_eq!(owned[owned.len() - 1], "parakeet-tdt-v3");
    }
}
