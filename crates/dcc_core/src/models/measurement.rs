use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use super::administrative::{Identifications, Manufacturer};
use super::content::LocalizedText;

// ---------------------------------------------------------------------------
// <dcc:measurementResults> — the calibration results
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct MeasurementResults {
    #[serde(rename = "measurementResult", default)]
    pub measurement_result: Vec<MeasurementResult>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MeasurementResult {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "usedMethods")]
    pub used_methods: Option<UsedMethods>,

    #[serde(rename = "measuringEquipments")]
    pub measuring_equipments: Option<MeasuringEquipments>,

    #[serde(rename = "measurementMetaData")]
    pub measurement_meta_data: Option<MeasurementMetaData>,

    #[serde(rename = "data")]
    pub data: Option<MeasurementData>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UsedMethods {
    #[serde(rename = "usedMethod", default)]
    pub used_method: Vec<UsedMethod>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UsedMethod {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,
}

// ---------------------------------------------------------------------------
// <dcc:measuringEquipments> — reference standards used for the calibration
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct MeasuringEquipments {
    #[serde(rename = "measuringEquipment", default)]
    pub measuring_equipment: Vec<MeasuringEquipment>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MeasuringEquipment {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "manufacturer")]
    pub manufacturer: Option<Manufacturer>,

    #[serde(rename = "model")]
    pub model: Option<String>,

    #[serde(rename = "identifications")]
    pub identifications: Option<Identifications>,

    #[serde(rename = "certificate")]
    pub certificate: Option<CertificateReference>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CertificateReference {
    #[serde(rename = "referenceID")]
    pub reference_id: Option<String>,

    // May carry an on-chain address, sometimes wrapped in literal quotes.
    #[serde(rename = "reference")]
    pub reference: Option<String>,
}

// ---------------------------------------------------------------------------
// <dcc:measurementMetaData> — free-form declarations
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct MeasurementMetaData {
    #[serde(rename = "metaData", default)]
    pub meta_data: Vec<MetaData>,
}

#[derive(Debug, Deserialize, Default)]
pub struct MetaData {
    #[serde(rename = "declaration")]
    pub declaration: Option<LocalizedText>,
}

// ---------------------------------------------------------------------------
// <dcc:data> — quantity, unit and measured values
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize, Default)]
pub struct MeasurementData {
    #[serde(rename = "quantity", default)]
    pub quantity: Vec<Quantity>,

    #[serde(rename = "list", default)]
    pub list: Vec<DatumList>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Quantity {
    #[serde(rename = "name")]
    pub name: Option<LocalizedText>,

    #[serde(rename = "unit")]
    pub unit: Option<UnitRepresentation>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DatumList {
    #[serde(rename = "datum", default)]
    pub datum: Vec<Datum>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Datum {
    #[serde(rename = "measured")]
    pub measured: Option<SiReal>,

    #[serde(rename = "uncertainty")]
    pub uncertainty: Option<SiReal>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SiReal {
    #[serde(rename = "real")]
    pub real: Option<String>,
}

// ---------------------------------------------------------------------------
// <dcc:unit> — the unit kind is the NAME of the first child element
// (e.g. <si:unitXMLList>), so a derived struct cannot capture it. A small
// map visitor records the first non-attribute, non-text child name and
// ignores everything else.
// ---------------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct UnitRepresentation {
    pub kind: Option<String>,
}

impl<'de> Deserialize<'de> for UnitRepresentation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnitVisitor;

        impl<'de> Visitor<'de> for UnitVisitor {
            type Value = UnitRepresentation;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a unit element")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut kind = None;
                while let Some(key) = map.next_key::<String>()? {
                    map.next_value::<IgnoredAny>()?;
                    // "@..." are attributes, "$text" is character data.
                    if kind.is_none() && !key.starts_with('@') && key != "$text" {
                        kind = Some(key);
                    }
                }
                Ok(UnitRepresentation { kind })
            }

            fn visit_str<E>(self, _v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // Text-only unit element: no child to take the kind from.
                Ok(UnitRepresentation { kind: None })
            }
        }

        deserializer.deserialize_map(UnitVisitor)
    }
}
