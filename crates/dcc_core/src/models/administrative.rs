use serde::Deserialize;

use super::content::LocalizedText;

// ---------------------------------------------------------------------------
// <dcc:administrativeData>
// Holds the four required blocks (coreData, items, calibrationLaboratory,
// customer) plus the optional respPersons / dccSoftware blocks.
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
pub struct AdministrativeData {
    #[serde(rename = "coreData")]
    pub core_data: Option<CoreData>,

    #[serde(rename = "items")]
    pub items: Option<Items>,

    #[serde(rename = "calibrationLaboratory")]
    pub calibration_laboratory: Option<CalibrationLaboratory>,

    #[serde(rename = "customer")]
    pub customer: Option<Customer>,

    #[serde(rename = "respPersons")]
    pub resp_persons: Option<RespPersons>,

    #[serde(rename = "dccSoftware")]
    pub dcc_software: Option<DccSoftware>,
}

// ---------------------------------------------------------------------------
// <dcc:coreData> — certificate identity and validity window
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct CoreData {
    #[serde(rename = "countryCodeISO3166_1")]
    pub country_code: Option<String>,

    #[serde(rename = "usedLangCodeISO639_1")]
    pub used_lang_code: Option<String>,

    #[serde(rename = "mandatoryLangCodeISO639_1")]
    pub mandatory_lang_code: Option<String>,

    #[serde(rename = "uniqueIdentifier")]
    pub unique_identifier: Option<String>,

    #[serde(rename = "receiptDate")]
    pub receipt_date: Option<String>,

    #[serde(rename = "beginPerformanceDate")]
    pub begin_performance_date: Option<String>,

    #[serde(rename = "endPerformanceDate")]
    pub end_performance_date: Option<String>,
}

// ---------------------------------------------------------------------------
// <dcc:items> — the calibrated item(s)
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct Items {
    #[serde(rename = "item", default)]
    pub item: Vec<Item>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Item {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "manufacturer")]
    pub manufacturer: Option<Manufacturer>,

    #[serde(rename = "model")]
    pub model: Option<String>,

    #[serde(rename = "identifications")]
    pub identifications: Option<Identifications>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Manufacturer {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Identifications {
    #[serde(rename = "identification", default)]
    pub identification: Vec<Identification>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Identification {
    #[serde(rename = "issuer")]
    pub issuer: Option<String>,

    #[serde(rename = "value")]
    pub value: Option<String>,

    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,
}

// ---------------------------------------------------------------------------
// <dcc:calibrationLaboratory> and <dcc:customer>
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct CalibrationLaboratory {
    #[serde(rename = "contact")]
    pub contact: Option<Contact>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Contact {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "eMail")]
    pub email: Option<String>,

    #[serde(rename = "phone")]
    pub phone: Option<String>,

    #[serde(rename = "location")]
    pub location: Option<Location>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Location {
    #[serde(rename = "city")]
    pub city: Option<String>,

    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,

    #[serde(rename = "postCode")]
    pub post_code: Option<String>,

    #[serde(rename = "street")]
    pub street: Option<String>,
}

// The customer block carries its contact fields inline, without a
// <dcc:contact> wrapper.
#[derive(Debug, Deserialize, Default)]
pub struct Customer {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "eMail")]
    pub email: Option<String>,

    #[serde(rename = "location")]
    pub location: Option<Location>,
}

// ---------------------------------------------------------------------------
// <dcc:respPersons> — responsible persons and signer flag
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct RespPersons {
    #[serde(rename = "respPerson", default)]
    pub resp_person: Vec<RespPerson>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RespPerson {
    #[serde(rename = "person")]
    pub person: Option<Person>,

    // "true"/"false" string in the schema, parsed case-sensitively.
    #[serde(rename = "mainSigner")]
    pub main_signer: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Person {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,
}

// ---------------------------------------------------------------------------
// <dcc:dccSoftware> — software used to produce the certificate
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct DccSoftware {
    #[serde(rename = "software", default)]
    pub software: Vec<Software>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Software {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "release")]
    pub release: Option<String>,

    #[serde(rename = "description")]
    pub description: Option<LocalizedText>,
}
