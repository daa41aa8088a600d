use crate::config::profile::FieldProfile;
use crate::core::normalize::normalize_domain;
use crate::domain::model::{Record, StageOutcome};
use std::collections::HashMap;

/// Second dedup pass: collapse records sharing a normalized-domain|username|
/// password key. On a collision the record with the strictly shorter URI wins
/// (a bare domain is assumed more broadly reusable than a deep login path);
/// equal lengths keep the earlier record.
///
/// Output order is first-insertion key order. A later replacement swaps the
/// retained record's content but not its position, so the key order is
/// tracked explicitly alongside the map.
pub fn dedup_by_domain(records: &[Record], profile: &FieldProfile) -> StageOutcome {
    let mut retained: HashMap<String, Record> = HashMap::new();
    let mut key_order: Vec<String> = Vec::new();
    let mut removed = 0;
    let mut log = Vec::new();

    for record in records {
        let uri = record.get(&profile.uri);
        let domain = normalize_domain(uri);
        let key = format!(
            "{}|{}|{}",
            domain,
            record.get(&profile.username),
            record.get(&profile.password)
        );

        let existing_uri = retained
            .get(&key)
            .map(|existing| existing.get(&profile.uri).to_string());

        match existing_uri {
            None => {
                key_order.push(key.clone());
                retained.insert(key, record.clone());
            }
            Some(existing_uri) => {
                removed += 1;
                if uri.len() < existing_uri.len() {
                    log.push(format!("Replacing longer URI: {} -> {}", existing_uri, uri));
                    retained.insert(key, record.clone());
                } else {
                    let label = if uri.is_empty() { "With no URI" } else { uri };
                    log.push(format!("Duplicate by domain removed: {}", label));
                }
            }
        }
    }

    let kept = key_order
        .iter()
        .filter_map(|key| retained.remove(key))
        .collect();

    StageOutcome { kept, removed, log }
}
