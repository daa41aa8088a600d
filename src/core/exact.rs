use crate::config::profile::FieldProfile;
use crate::domain::model::{Record, StageOutcome};
use std::collections::HashSet;

/// First dedup pass: collapse records sharing an identical
/// name|username|password triple. First occurrence wins; order is preserved.
///
/// The URI is deliberately not part of the key, so two entries for the same
/// credential under different sites collapse here (observed upstream
/// behavior, kept as-is).
pub fn dedup_exact(records: &[Record], profile: &FieldProfile) -> StageOutcome {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    let mut removed = 0;
    let mut log = Vec::new();

    for record in records {
        let key = format!(
            "{}|{}|{}",
            record.get(&profile.name),
            record.get(&profile.username),
            record.get(&profile.password)
        );

        if seen.insert(key) {
            kept.push(record.clone());
        } else {
            removed += 1;
            let name = record.get(&profile.name);
            let label = if name.is_empty() { "with no name" } else { name };
            log.push(format!("Exact duplicate removed: {}", label));
        }
    }

    StageOutcome { kept, removed, log }
}
