use chrono::NaiveDate;

use crate::canonical::{CanonicalCertificate, NOT_AVAILABLE};
use crate::validation::{DccRule, ValidationIssue};

fn issue(code: &str, severity: &str, message: String, field: &str) -> ValidationIssue {
    ValidationIssue {
        code: code.to_string(),
        severity: severity.to_string(),
        message,
        field: Some(field.to_string()),
    }
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

// =========================================================================
// RULE: DCC-001
// "A certificate must carry a unique identifier"
// =========================================================================
pub struct RuleDcc001;

impl DccRule for RuleDcc001 {
    fn rule_id(&self) -> &str {
        "DCC-001"
    }

    fn check(&self, cert: &CanonicalCertificate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if cert.certificate_id.trim().is_empty() || cert.certificate_id == NOT_AVAILABLE {
            issues.push(issue(
                self.rule_id(),
                "High Error",
                "Certificate has no unique identifier".to_string(),
                "certificate_id",
            ));
        }
        issues
    }
}

// =========================================================================
// RULE: DCC-002
// "Performance dates must be ISO 8601 and ordered"
// =========================================================================
pub struct RuleDcc002;

impl DccRule for RuleDcc002 {
    fn rule_id(&self) -> &str {
        "DCC-002"
    }

    fn check(&self, cert: &CanonicalCertificate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut parsed = [None, None];
        for (slot, (value, field)) in [
            (cert.valid_from.as_deref(), "valid_from"),
            (cert.valid_until.as_deref(), "valid_until"),
        ]
        .into_iter()
        .enumerate()
        {
            if let Some(raw) = value {
                match parse_iso_date(raw) {
                    Some(date) => parsed[slot] = Some(date),
                    None => issues.push(issue(
                        self.rule_id(),
                        "Warning",
                        format!("Date '{}' is not a valid ISO 8601 date", raw),
                        field,
                    )),
                }
            }
        }

        if let (Some(from), Some(until)) = (parsed[0], parsed[1]) {
            if from > until {
                issues.push(issue(
                    self.rule_id(),
                    "High Error",
                    format!("Validity window is reversed: {} is after {}", from, until),
                    "valid_from",
                ));
            }
        }
        issues
    }
}

// =========================================================================
// RULE: DCC-003
// "Country code must be two ASCII letters (ISO 3166-1 alpha-2)"
// =========================================================================
pub struct RuleDcc003;

impl DccRule for RuleDcc003 {
    fn rule_id(&self) -> &str {
        "DCC-003"
    }

    fn check(&self, cert: &CanonicalCertificate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let code = &cert.country_code;
        let well_formed = code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic());
        if !well_formed {
            issues.push(issue(
                self.rule_id(),
                "Warning",
                format!("Country code '{}' is not ISO 3166-1 alpha-2", code),
                "country_code",
            ));
        }
        issues
    }
}

// =========================================================================
// RULE: DCC-004
// "Measured value and uncertainty must be numeric when present"
// =========================================================================
pub struct RuleDcc004;

impl DccRule for RuleDcc004 {
    fn rule_id(&self) -> &str {
        "DCC-004"
    }

    fn check(&self, cert: &CanonicalCertificate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (value, field) in [
            (&cert.measured_value, "measured_value"),
            (&cert.measurement_uncertainty, "measurement_uncertainty"),
        ] {
            if value != NOT_AVAILABLE && value.parse::<f64>().is_err() {
                issues.push(issue(
                    self.rule_id(),
                    "Warning",
                    format!("Value '{}' is not numeric", value),
                    field,
                ));
            }
        }
        issues
    }
}

// =========================================================================
// RULE: DCC-005
// "An asserted main signer must be a named person"
// =========================================================================
pub struct RuleDcc005;

impl DccRule for RuleDcc005 {
    fn rule_id(&self) -> &str {
        "DCC-005"
    }

    fn check(&self, cert: &CanonicalCertificate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if cert.main_signer && cert.responsible_person == NOT_AVAILABLE {
            issues.push(issue(
                self.rule_id(),
                "Warning",
                "mainSigner is asserted but no responsible person is named".to_string(),
                "responsible_person",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{Standard, DEFAULT_EXTERNAL_URL, DEFAULT_IMAGE_URL};

    fn cert() -> CanonicalCertificate {
        CanonicalCertificate {
            certificate_id: "CAL-1".into(),
            schema_version: "2.4.0".into(),
            country_code: "DE".into(),
            language: "en".into(),
            receipt_date: None,
            valid_from: Some("2024-01-15".into()),
            valid_until: Some("2025-01-15".into()),
            issue_date: "2024-01-15".into(),
            lab_name: "Lab".into(),
            lab_email: String::new(),
            lab_phone: String::new(),
            lab_street: String::new(),
            lab_city: String::new(),
            lab_postal_code: String::new(),
            lab_country_code: String::new(),
            lab_location: ", ".into(),
            customer_name: "Customer".into(),
            customer_email: String::new(),
            customer_street: String::new(),
            customer_city: String::new(),
            customer_postal_code: String::new(),
            customer_country_code: String::new(),
            responsible_person: NOT_AVAILABLE.into(),
            main_signer: false,
            item_name: "Gauge".into(),
            manufacturer: NOT_AVAILABLE.into(),
            item_model: NOT_AVAILABLE.into(),
            serial_number: NOT_AVAILABLE.into(),
            dcc_software: NOT_AVAILABLE.into(),
            software_version: NOT_AVAILABLE.into(),
            software_description: String::new(),
            measurement_type: NOT_AVAILABLE.into(),
            measurement_method: NOT_AVAILABLE.into(),
            measurement_unit: NOT_AVAILABLE.into(),
            measured_value: "101.325".into(),
            measurement_uncertainty: NOT_AVAILABLE.into(),
            measurement_declaration: String::new(),
            standards: vec![Standard::placeholder("CAL-1")],
            external_url: DEFAULT_EXTERNAL_URL.into(),
            image_url: DEFAULT_IMAGE_URL.into(),
        }
    }

    #[test]
    fn clean_certificate_produces_no_issues() {
        let validator = crate::standard_validator();
        assert!(validator.run(&cert()).is_empty());
    }

    #[test]
    fn missing_identifier_is_a_high_error() {
        let mut c = cert();
        c.certificate_id = NOT_AVAILABLE.into();
        let issues = RuleDcc001.check(&c);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "High Error");
    }

    #[test]
    fn reversed_validity_window_is_flagged() {
        let mut c = cert();
        c.valid_from = Some("2025-06-01".into());
        c.valid_until = Some("2024-06-01".into());
        let issues = RuleDcc002.check(&c);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "High Error");
    }

    #[test]
    fn unparseable_date_is_a_warning() {
        let mut c = cert();
        c.valid_from = Some("15.01.2024".into());
        let issues = RuleDcc002.check(&c);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, "Warning");
    }

    #[test]
    fn non_alpha2_country_code_is_flagged() {
        let mut c = cert();
        c.country_code = "DEU".into();
        assert_eq!(RuleDcc003.check(&c).len(), 1);
        c.country_code = NOT_AVAILABLE.into();
        assert_eq!(RuleDcc003.check(&c).len(), 1);
    }

    #[test]
    fn non_numeric_measured_value_is_flagged() {
        let mut c = cert();
        c.measured_value = "about a hundred".into();
        let issues = RuleDcc004.check(&c);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field.as_deref(), Some("measured_value"));
    }

    #[test]
    fn unnamed_main_signer_is_flagged() {
        let mut c = cert();
        c.main_signer = true;
        assert_eq!(RuleDcc005.check(&c).len(), 1);
        c.responsible_person = "Dr. Jane Mueller".into();
        assert!(RuleDcc005.check(&c).is_empty());
    }
}
