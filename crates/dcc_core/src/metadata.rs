//! Metadata template engine.
//!
//! Renders a storage-ready metadata document from a canonical certificate
//! and a JSON template carrying `{{TOKEN}}` markers. Substitution is plain
//! text replacement over the serialized template, then the result is parsed
//! back into a [`MetadataDocument`]; values are not escaped for embedded
//! JSON-special characters, matching the established wire behavior. Tokens
//! with no marker in the template (and vice versa) pass through silently.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::canonical::CanonicalCertificate;
use crate::error::{DccError, Result};

/// The metadata template bundled with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/metadata_template.json");

/// The rendered, storage-ready certificate description. Immutable once
/// produced; handed as-is to an external content-addressed uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub name: String,
    pub description: String,
    pub image: String,
    pub certificate_file: String,
    pub attributes: Vec<Attribute>,
    pub measurement_equipment: Vec<EquipmentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    pub identifications: Vec<EquipmentIdentification>,
    #[serde(default)]
    pub onchain_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentIdentification {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Parses the bundled [`DEFAULT_TEMPLATE`].
pub fn default_template() -> Result<Value> {
    serde_json::from_str(DEFAULT_TEMPLATE).map_err(DccError::Template)
}

/// Renders `template` against `certificate`. Absent `image_url` /
/// `certificate_file_url` substitute as empty strings; the only failure
/// mode is template JSON that does not parse (a configuration error).
pub fn render(
    certificate: &CanonicalCertificate,
    template: &Value,
    image_url: Option<&str>,
    certificate_file_url: Option<&str>,
) -> Result<MetadataDocument> {
    let mut text = serde_json::to_string_pretty(template)?;

    // Tokens are disjoint strings, so application order does not matter;
    // every occurrence of each marker is replaced.
    for (token, value) in replacements(certificate, image_url, certificate_file_url) {
        text = text.replace(token, &value);
    }

    serde_json::from_str(&text).map_err(DccError::Template)
}

fn replacements(
    cert: &CanonicalCertificate,
    image_url: Option<&str>,
    certificate_file_url: Option<&str>,
) -> Vec<(&'static str, String)> {
    let certificate_name = format!("Calibration Certificate #{}", cert.certificate_id);
    let description = format!(
        "Certificate for {} model {} from {}.",
        cert.item_name, cert.item_model, cert.customer_name
    );
    let instrument_name = format!("{} {}", cert.item_name, cert.item_model);

    let (reference_name, reference_serial, reference_onchain) = match cert.standards.first() {
        Some(s) if !cert.is_placeholder_standard(s) => (
            format!("Calibration Certificate #{}", s.certificate),
            s.serial_number.clone(),
            s.onchain_address.clone(),
        ),
        _ => ("Reference Standard".to_string(), String::new(), String::new()),
    };

    vec![
        ("{{CERTIFICATE_NAME}}", certificate_name),
        ("{{DESCRIPTION}}", description),
        ("{{IMAGE_URL}}", image_url.unwrap_or_default().to_string()),
        (
            "{{CERTIFICATE_FILE_URL}}",
            certificate_file_url.unwrap_or_default().to_string(),
        ),
        ("{{LAB_NAME}}", cert.lab_name.clone()),
        ("{{ISSUE_DATE}}", cert.issue_date.clone()),
        ("{{EXPIRATION_DATE}}", expiration_date(&cert.issue_date)),
        ("{{INSTRUMENT_NAME}}", instrument_name),
        ("{{SERIAL_NUMBER}}", cert.serial_number.clone()),
        ("{{REFERENCE_CERTIFICATE_NAME}}", reference_name),
        ("{{REFERENCE_SERIAL}}", reference_serial),
        ("{{ONCHAIN_ADDRESS}}", reference_onchain),
    ]
}

/// Issue date plus one calendar year. Calendar arithmetic keeps the month
/// and day (Feb 29 clamps to Feb 28); an unparseable issue date renders
/// the token as an empty string rather than failing the whole document.
fn expiration_date(issue_date: &str) -> String {
    NaiveDate::parse_from_str(issue_date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.checked_add_months(Months::new(12)))
        .map(|d| d.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::Standard;
    use crate::extract::extract;
    use serde_json::json;

    const SAMPLE_XML: &str = include_str!("../../../sample_certificate.xml");

    #[test]
    fn renders_default_template_from_full_certificate() {
        let cert = extract(SAMPLE_XML).unwrap();
        let template = default_template().unwrap();
        let doc = render(&cert, &template, Some("ipfs://img"), Some("ipfs://file")).unwrap();

        assert_eq!(doc.name, "Calibration Certificate #CAL-2024-0042");
        assert_eq!(
            doc.description,
            "Certificate for Digital Pressure Gauge model P-500 from Acme Corp."
        );
        assert_eq!(doc.image, "ipfs://img");
        assert_eq!(doc.certificate_file, "ipfs://file");

        let by_trait = |t: &str| {
            doc.attributes
                .iter()
                .find(|a| a.trait_type == t)
                .map(|a| a.value.clone())
                .unwrap_or_default()
        };
        assert_eq!(by_trait("Laboratory"), "Precision Calibration Lab");
        assert_eq!(by_trait("Issue Date"), "2024-01-15");
        assert_eq!(by_trait("Expiration Date"), "2025-01-15");
        assert_eq!(by_trait("Instrument"), "Digital Pressure Gauge P-500");
        assert_eq!(by_trait("Serial Number"), "SN-881122");

        assert_eq!(doc.measurement_equipment.len(), 1);
        let equipment = &doc.measurement_equipment[0];
        assert_eq!(equipment.name, "Calibration Certificate #REF-2023-0099");
        assert_eq!(equipment.identifications[0].value, "STD-0017");
        assert_eq!(equipment.onchain_address, "0xABCDEF0123");
    }

    #[test]
    fn missing_urls_substitute_as_empty_strings() {
        let cert = extract(SAMPLE_XML).unwrap();
        let template = default_template().unwrap();
        let doc = render(&cert, &template, None, None).unwrap();
        assert_eq!(doc.image, "");
        assert_eq!(doc.certificate_file, "");
    }

    #[test]
    fn placeholder_standard_renders_reference_fallbacks() {
        let mut cert = extract(SAMPLE_XML).unwrap();
        cert.standards = vec![Standard::placeholder(&cert.certificate_id)];

        let template = default_template().unwrap();
        let doc = render(&cert, &template, None, None).unwrap();

        let equipment = &doc.measurement_equipment[0];
        assert_eq!(equipment.name, "Reference Standard");
        assert_eq!(equipment.identifications[0].value, "");
        assert_eq!(equipment.onchain_address, "");
    }

    #[test]
    fn rendering_is_deterministic_byte_for_byte() {
        let cert = extract(SAMPLE_XML).unwrap();
        let template = default_template().unwrap();
        let a = render(&cert, &template, Some("u"), Some("v")).unwrap();
        let b = render(&cert, &template, Some("u"), Some("v")).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn every_occurrence_of_a_repeated_token_is_substituted() {
        let cert = extract(SAMPLE_XML).unwrap();
        let template = json!({
            "name": "{{CERTIFICATE_NAME}}",
            "description": "{{CERTIFICATE_NAME}} / {{CERTIFICATE_NAME}}",
            "image": "",
            "certificate_file": "",
            "attributes": [],
            "measurement_equipment": []
        });
        let doc = render(&cert, &template, None, None).unwrap();
        assert_eq!(
            doc.description,
            "Calibration Certificate #CAL-2024-0042 / Calibration Certificate #CAL-2024-0042"
        );
    }

    #[test]
    fn unknown_tokens_pass_through_unresolved() {
        let cert = extract(SAMPLE_XML).unwrap();
        let template = json!({
            "name": "{{CERTIFICATE_NAME}}",
            "description": "{{NOT_A_KNOWN_TOKEN}}",
            "image": "",
            "certificate_file": "",
            "attributes": [],
            "measurement_equipment": []
        });
        let doc = render(&cert, &template, None, None).unwrap();
        assert_eq!(doc.description, "{{NOT_A_KNOWN_TOKEN}}");
    }

    #[test]
    fn expiration_uses_calendar_arithmetic() {
        assert_eq!(expiration_date("2024-01-15"), "2025-01-15");
        // Leap day clamps to the last day of February
        assert_eq!(expiration_date("2024-02-29"), "2025-02-28");
        assert_eq!(expiration_date("not-a-date"), "");
    }

    #[test]
    fn template_that_is_not_the_expected_shape_fails_fast() {
        let cert = extract(SAMPLE_XML).unwrap();
        // An array cannot parse back into a MetadataDocument
        let template = json!(["{{CERTIFICATE_NAME}}"]);
        let err = render(&cert, &template, None, None).unwrap_err();
        assert!(matches!(err, DccError::Template(_)));
    }
}
