use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One credential entry. Fields are stored as a name -> value map; column
/// order for export comes from the accompanying `FieldSet`, not from the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Field lookup where a missing field reads as the empty string.
    /// Absence and `""` are equivalent everywhere keys are built.
    pub fn get(&self, field: &str) -> &str {
        self.data.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.data.insert(field.into(), value.into());
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

/// The declared column names of the input, in source order. Every exported
/// row exposes exactly these fields in this order.
pub type FieldSet = Vec<String>;

/// Result of one dedup stage over an ordered record sequence.
#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub kept: Vec<Record>,
    pub removed: usize,
    pub log: Vec<String>,
}

/// The full outcome of one cleaning run. Constructed once, immutable after;
/// a new run replaces it wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub cleaned: Vec<Record>,
    pub original_count: usize,
    pub exact_duplicates_removed: usize,
    pub domain_duplicates_removed: usize,
    pub log: Vec<String>,
}

impl CleanReport {
    pub fn cleaned_count(&self) -> usize {
        self.cleaned.len()
    }
}
