//! Required-vs-optional policy shared by extraction and normalization.
//!
//! A handful of helpers so the defaulting rules read the same at every
//! call site: required blocks abort with a SchemaError naming the block,
//! optional leaves resolve to `"N/A"` or `""` and processing continues.

use crate::canonical::NOT_AVAILABLE;
use crate::error::{DccError, Result};
use crate::models::LocalizedText;

/// Unwraps a required structural block or fails with a SchemaError naming it.
pub(crate) fn require<T>(value: Option<T>, block: &'static str) -> Result<T> {
    value.ok_or(DccError::Schema(block))
}

/// Optional name-like field: absent resolves to `"N/A"`.
pub(crate) fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Optional contact/description field: absent resolves to `""`.
pub(crate) fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// First language entry of a localized text wrapper, if present at all.
pub(crate) fn localized(text: Option<&LocalizedText>) -> Option<&str> {
    text.and_then(LocalizedText::first)
}

/// The `mainSigner` flag is a "true"/"false" string in the schema. Only the
/// exact lowercase `"true"` counts; anything else (including absence) is
/// false.
pub(crate) fn parse_signer_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Content, LocalizedText};

    #[test]
    fn require_names_the_missing_block() {
        let err = require(None::<()>, "coreData").unwrap_err();
        assert_eq!(err.to_string(), "Invalid DCC XML: Missing coreData");
        assert_eq!(require(Some(7), "coreData").unwrap(), 7);
    }

    #[test]
    fn defaults_resolve_per_field_policy() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("x")), "x");
        assert_eq!(or_empty(None), "");
        assert_eq!(or_empty(Some("y")), "y");
    }

    #[test]
    fn signer_flag_is_case_sensitive() {
        assert!(parse_signer_flag(Some("true")));
        assert!(!parse_signer_flag(Some("TRUE")));
        assert!(!parse_signer_flag(Some("false")));
        assert!(!parse_signer_flag(None));
    }

    #[test]
    fn localized_reads_only_the_first_entry() {
        let text = LocalizedText {
            content: vec![
                Content {
                    lang: Some("en".into()),
                    value: "Gauge".into(),
                },
                Content {
                    lang: Some("de".into()),
                    value: "Messgerät".into(),
                },
            ],
        };
        assert_eq!(localized(Some(&text)), Some("Gauge"));
        assert_eq!(localized(None), None);
    }
}
