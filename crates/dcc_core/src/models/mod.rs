//! Typed model of the DCC 2.4 XML schema.
//!
//! Every block below the root is optional at the serde level; the
//! required-vs-optional policy lives in [`crate::extract`], so a document
//! with missing business data still deserializes and each absent node
//! resolves to its documented default.

pub mod administrative;
pub mod certificate;
pub mod content;
pub mod measurement;

pub use administrative::{
    AdministrativeData, CalibrationLaboratory, Contact, CoreData, Customer, DccSoftware,
    Identification, Identifications, Item, Items, Location, Manufacturer, Person, RespPerson,
    RespPersons, Software,
};
pub use certificate::DigitalCalibrationCertificate;
pub use content::{Content, LocalizedText};
pub use measurement::{
    CertificateReference, Datum, DatumList, MeasurementData, MeasurementMetaData,
    MeasurementResult, MeasurementResults, MeasuringEquipment, MeasuringEquipments, MetaData,
    Quantity, SiReal, UnitRepresentation, UsedMethod, UsedMethods,
};
