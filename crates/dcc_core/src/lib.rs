pub mod canonical;
pub mod defaults;
pub mod error;
pub mod extract;
pub mod metadata;
pub mod models;
pub mod validation;

pub use canonical::{CanonicalCertificate, Standard};
pub use error::{DccError, Result};
pub use extract::extract;
pub use metadata::{default_template, render, MetadataDocument};

use validation::{rules, ValidationEngine};

/// The validator run by `dcc validate`: every built-in lint rule for a
/// canonical certificate. Warnings never block extraction or rendering.
pub fn standard_validator() -> ValidationEngine {
    ValidationEngine::new()
        .add_rule(rules::RuleDcc001)
        .add_rule(rules::RuleDcc002)
        .add_rule(rules::RuleDcc003)
        .add_rule(rules::RuleDcc004)
        .add_rule(rules::RuleDcc005)
}
