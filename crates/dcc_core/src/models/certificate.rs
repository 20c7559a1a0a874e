use serde::Deserialize;

use super::administrative::AdministrativeData;
use super::measurement::MeasurementResults;

// ---------------------------------------------------------------------------
// The Root Container: <dcc:digitalCalibrationCertificate>
// Reference: PTB DCC schema v2.4
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
pub struct DigitalCalibrationCertificate {
    #[serde(rename = "@schemaVersion")]
    pub schema_version: Option<String>,

    // Required block; absence is a SchemaError, checked during extraction.
    #[serde(rename = "administrativeData")]
    pub administrative_data: Option<AdministrativeData>,

    #[serde(rename = "measurementResults")]
    pub measurement_results: Option<MeasurementResults>,
}
