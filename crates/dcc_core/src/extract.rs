//! Schema extraction: DCC XML text in, [`CanonicalCertificate`] out.
//!
//! Extraction is intolerant at the level of the four required blocks
//! (coreData, items, calibrationLaboratory, customer under
//! administrativeData) and tolerant everywhere else: each optional leaf
//! short-circuits to its default instead of failing, so a valid document
//! always yields a fully populated record.

use chrono::Utc;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::canonical::{
    CanonicalCertificate, Standard, DEFAULT_EXTERNAL_URL, DEFAULT_IMAGE_URL, NOT_AVAILABLE,
};
use crate::defaults::{localized, or_empty, or_na, parse_signer_flag, require};
use crate::error::{DccError, Result};
use crate::models::{
    DigitalCalibrationCertificate, Identifications, Location, MeasuringEquipment,
};

/// Extracts and normalizes one certificate. Fails with [`DccError::Parse`]
/// on malformed XML and [`DccError::Schema`] when a required block is
/// absent; nothing partial is ever returned.
pub fn extract(xml: &str) -> Result<CanonicalCertificate> {
    ensure_root(xml)?;

    let doc: DigitalCalibrationCertificate =
        quick_xml::de::from_str(xml).map_err(|e| DccError::Parse(e.to_string()))?;

    let admin = require(doc.administrative_data, "administrativeData")?;
    let core = require(admin.core_data, "coreData")?;
    let items = require(admin.items, "items")?;
    let lab = require(admin.calibration_laboratory, "calibrationLaboratory")?;
    let customer = require(admin.customer, "customer")?;

    // Core data
    let certificate_id = or_na(core.unique_identifier.as_deref());
    let country_code = or_na(core.country_code.as_deref());
    let language = core.used_lang_code.clone().unwrap_or_else(|| "en".to_string());
    let valid_from = core.begin_performance_date.clone();
    let valid_until = core.end_performance_date.clone();
    // Normalizer rule: beginPerformanceDate when present, else today.
    let issue_date = valid_from.clone().unwrap_or_else(today);

    // Calibrated item
    let item = items.item.first();
    let item_name = or_na(item.and_then(|i| localized(i.name.as_ref())));
    let manufacturer = or_na(
        item.and_then(|i| i.manufacturer.as_ref())
            .and_then(|m| localized(m.name.as_ref())),
    );
    let item_model = or_na(item.and_then(|i| i.model.as_deref()));
    let serial_number = or_na(first_identification_value(
        item.and_then(|i| i.identifications.as_ref()),
    ));

    // Laboratory
    let contact = lab.contact.as_ref();
    let lab_name = or_na(contact.and_then(|c| localized(c.name.as_ref())));
    let lab_email = or_empty(contact.and_then(|c| c.email.as_deref()));
    let lab_phone = or_empty(contact.and_then(|c| c.phone.as_deref()));
    let lab_loc = contact.and_then(|c| c.location.as_ref());
    let (lab_street, lab_city, lab_postal_code, lab_country_code) = location_fields(lab_loc);
    // Kept verbatim even when both parts are empty (yields ", ").
    let lab_location = format!("{}, {}", lab_city, lab_country_code);

    // Customer (contact fields are inline, no wrapper element)
    let customer_name = or_na(localized(customer.name.as_ref()));
    let customer_email = or_empty(customer.email.as_deref());
    let (customer_street, customer_city, customer_postal_code, customer_country_code) =
        location_fields(customer.location.as_ref());

    // Responsible person
    let resp = admin
        .resp_persons
        .as_ref()
        .and_then(|r| r.resp_person.first());
    let responsible_person = or_na(
        resp.and_then(|r| r.person.as_ref())
            .and_then(|p| localized(p.name.as_ref())),
    );
    let main_signer = parse_signer_flag(resp.and_then(|r| r.main_signer.as_deref()));

    // Software
    let software = admin.dcc_software.as_ref().and_then(|s| s.software.first());
    let dcc_software = or_na(software.and_then(|s| localized(s.name.as_ref())));
    let software_version = or_na(software.and_then(|s| s.release.as_deref()));
    let software_description = or_empty(software.and_then(|s| localized(s.description.as_ref())));

    // Measurement (first result only)
    let result = doc
        .measurement_results
        .as_ref()
        .and_then(|m| m.measurement_result.first());
    let measurement_type = or_na(result.and_then(|r| localized(r.name.as_ref())));
    let measurement_method = or_na(
        result
            .and_then(|r| r.used_methods.as_ref())
            .and_then(|m| m.used_method.first())
            .and_then(|m| localized(m.name.as_ref())),
    );
    let measurement_declaration = or_empty(
        result
            .and_then(|r| r.measurement_meta_data.as_ref())
            .and_then(|m| m.meta_data.first())
            .and_then(|m| localized(m.declaration.as_ref())),
    );

    let data = result.and_then(|r| r.data.as_ref());
    // Unit kind is the first child element name of <dcc:unit>, minus the
    // "si:" namespace prefix.
    let measurement_unit = data
        .and_then(|d| d.quantity.first())
        .and_then(|q| q.unit.as_ref())
        .and_then(|u| u.kind.as_deref())
        .map(|k| k.strip_prefix("si:").unwrap_or(k).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let datum = data
        .and_then(|d| d.list.first())
        .and_then(|l| l.datum.first());
    let measured_value = or_na(datum.and_then(|d| d.measured.as_ref()).and_then(|m| m.real.as_deref()));
    let measurement_uncertainty = or_na(
        datum
            .and_then(|d| d.uncertainty.as_ref())
            .and_then(|m| m.real.as_deref()),
    );

    // Reference standards; a document with no equipment still gets exactly
    // one synthetic entry so the sequence is never empty.
    let mut standards: Vec<Standard> = result
        .and_then(|r| r.measuring_equipments.as_ref())
        .map(|e| e.measuring_equipment.iter().map(standard_from_equipment).collect())
        .unwrap_or_default();
    if standards.is_empty() {
        standards.push(Standard::placeholder(&certificate_id));
    }

    Ok(CanonicalCertificate {
        certificate_id,
        schema_version: doc
            .schema_version
            .unwrap_or_else(|| "2.4.0".to_string()),
        country_code,
        language,
        receipt_date: core.receipt_date,
        valid_from,
        valid_until,
        issue_date,
        lab_name,
        lab_email,
        lab_phone,
        lab_street,
        lab_city,
        lab_postal_code,
        lab_country_code,
        lab_location,
        customer_name,
        customer_email,
        customer_street,
        customer_city,
        customer_postal_code,
        customer_country_code,
        responsible_person,
        main_signer,
        item_name,
        manufacturer,
        item_model,
        serial_number,
        dcc_software,
        software_version,
        software_description,
        measurement_type,
        measurement_method,
        measurement_unit,
        measured_value,
        measurement_uncertainty,
        measurement_declaration,
        standards,
        external_url: DEFAULT_EXTERNAL_URL.to_string(),
        image_url: DEFAULT_IMAGE_URL.to_string(),
    })
}

/// Verifies well-formedness up to the root element and that the root is a
/// digitalCalibrationCertificate. `quick_xml::de` accepts any root name, so
/// this check runs on the raw event stream first.
fn ensure_root(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return if e.local_name().as_ref() == b"digitalCalibrationCertificate" {
                    Ok(())
                } else {
                    Err(DccError::Schema("digitalCalibrationCertificate root element"))
                };
            }
            Ok(Event::Eof) => {
                return Err(DccError::Parse("document contains no elements".to_string()))
            }
            Ok(_) => continue,
            Err(e) => return Err(DccError::Parse(e.to_string())),
        }
    }
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn first_identification_value(ids: Option<&Identifications>) -> Option<&str> {
    ids.and_then(|i| i.identification.first())
        .and_then(|id| id.value.as_deref())
}

fn location_fields(loc: Option<&Location>) -> (String, String, String, String) {
    (
        or_empty(loc.and_then(|l| l.street.as_deref())),
        or_empty(loc.and_then(|l| l.city.as_deref())),
        or_empty(loc.and_then(|l| l.post_code.as_deref())),
        or_empty(loc.and_then(|l| l.country_code.as_deref())),
    )
}

fn standard_from_equipment(eq: &MeasuringEquipment) -> Standard {
    let name = or_na(localized(eq.name.as_ref()));
    let model = or_na(eq.model.as_deref());
    let serial_number = or_na(first_identification_value(eq.identifications.as_ref()));
    let reference = eq.certificate.as_ref();
    let certificate = or_na(reference.and_then(|c| c.reference_id.as_deref()));
    // On-chain addresses are sometimes exported wrapped in literal quotes.
    let onchain_address = reference
        .and_then(|c| c.reference.as_deref())
        .map(|r| r.replace('"', ""))
        .unwrap_or_default();

    Standard {
        name: format!("{} {}", name, model),
        serial_number,
        certificate,
        onchain_address,
    }
}
