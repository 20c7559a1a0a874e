use serde::{Deserialize, Serialize};

/// Default project URLs baked into every canonical record; callers may
/// override them downstream.
pub const DEFAULT_EXTERNAL_URL: &str = "https://calibra.vercel.app";
pub const DEFAULT_IMAGE_URL: &str = "https://calibra.vercel.app/image.png";

/// Placeholder shown for absent name-like fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// A reference standard (measuring equipment) used for the calibration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standard {
    pub name: String,
    pub serial_number: String,
    /// Certificate reference of the standard itself.
    pub certificate: String,
    pub onchain_address: String,
}

impl Standard {
    /// Synthetic entry used when a certificate lists no measuring equipment.
    pub fn placeholder(certificate_id: &str) -> Self {
        Standard {
            name: "DCC Standard".to_string(),
            serial_number: NOT_AVAILABLE.to_string(),
            certificate: certificate_id.to_string(),
            onchain_address: String::new(),
        }
    }
}

/// The normalized certificate record produced by extraction.
///
/// Every `String` field is guaranteed populated (possibly with `"N/A"` or
/// `""` per the defaulting table); the only `Option` fields are the dates
/// the schema genuinely allows to be absent. One record is owned per
/// certificate-processing operation, nothing is shared across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCertificate {
    // Identity
    pub certificate_id: String,
    pub schema_version: String,
    pub country_code: String,
    pub language: String,

    // Validity window
    pub receipt_date: Option<String>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
    /// beginPerformanceDate when present, else the processing date.
    pub issue_date: String,

    // Laboratory
    pub lab_name: String,
    pub lab_email: String,
    pub lab_phone: String,
    pub lab_street: String,
    pub lab_city: String,
    pub lab_postal_code: String,
    pub lab_country_code: String,
    /// Derived "{city}, {countryCode}".
    pub lab_location: String,

    // Customer
    pub customer_name: String,
    pub customer_email: String,
    pub customer_street: String,
    pub customer_city: String,
    pub customer_postal_code: String,
    pub customer_country_code: String,

    // Responsible person
    pub responsible_person: String,
    pub main_signer: bool,

    // Calibrated item
    pub item_name: String,
    pub manufacturer: String,
    pub item_model: String,
    pub serial_number: String,

    // Software
    pub dcc_software: String,
    pub software_version: String,
    pub software_description: String,

    // Measurement
    pub measurement_type: String,
    pub measurement_method: String,
    pub measurement_unit: String,
    pub measured_value: String,
    pub measurement_uncertainty: String,
    pub measurement_declaration: String,

    // Reference standards; never empty (synthetic placeholder otherwise)
    pub standards: Vec<Standard>,

    pub external_url: String,
    pub image_url: String,
}

impl CanonicalCertificate {
    // Legacy aliases kept for compatibility with older consumers. They are
    // views over the canonical fields, never independently sourced.

    pub fn certificate_number(&self) -> &str {
        &self.certificate_id
    }

    pub fn laboratory(&self) -> &str {
        &self.lab_name
    }

    pub fn client(&self) -> &str {
        &self.customer_name
    }

    pub fn instrument(&self) -> &str {
        &self.item_name
    }

    pub fn item_identifications(&self) -> &str {
        &self.serial_number
    }

    pub fn calibration_date(&self) -> &str {
        self.valid_from.as_deref().unwrap_or("")
    }

    pub fn expiration_date(&self) -> &str {
        self.valid_until.as_deref().unwrap_or("")
    }

    /// True when `standard` is the synthetic entry generated for this
    /// certificate because the source listed no measuring equipment.
    pub fn is_placeholder_standard(&self, standard: &Standard) -> bool {
        *standard == Standard::placeholder(&self.certificate_id)
    }
}
