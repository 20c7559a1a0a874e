use serde::Serialize;

use crate::canonical::CanonicalCertificate;

pub mod rules;

// The structure of a finding
#[derive(Debug, Serialize, Clone)]
pub struct ValidationIssue {
    pub code: String,     // e.g., "DCC-002"
    pub severity: String, // "High Error", "Warning"
    pub message: String,
    pub field: Option<String>, // Which canonical field triggered it?
}

// The contract every rule must fulfill
pub trait DccRule {
    fn check(&self, certificate: &CanonicalCertificate) -> Vec<ValidationIssue>;
    fn rule_id(&self) -> &str;
}

// The Engine that holds the registry of all rules
pub struct ValidationEngine {
    rules: Vec<Box<dyn DccRule>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule<R: DccRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn run(&self, certificate: &CanonicalCertificate) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let mut rule_issues = rule.check(certificate);
            issues.append(&mut rule_issues);
        }
        issues
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
