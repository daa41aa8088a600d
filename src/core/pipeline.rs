use crate::config::profile::FieldProfile;
use crate::core::{domain_dedup::dedup_by_domain, exact::dedup_exact};
use crate::domain::model::{CleanReport, Record};
use crate::utils::error::{CleanError, Result};

/// Run both dedup stages over an ordered record sequence and assemble the
/// report. Pure: borrows its input, owns all intermediate state, and returns
/// a self-contained result the caller keeps.
///
/// An empty input is an error, not an empty report: a zero-record export is
/// almost always an upstream parse failure, and silently producing nothing
/// would hide it.
pub fn run_dedup(records: &[Record], profile: &FieldProfile) -> Result<CleanReport> {
    if records.is_empty() {
        return Err(CleanError::EmptyInput);
    }

    let original_count = records.len();
    let mut log = vec![format!("File loaded: {} credential(s) found", original_count)];

    let exact = dedup_exact(records, profile);
    log.extend(exact.log);
    log.push(format!(
        "Step 1 completed: {} exact duplicates removed",
        exact.removed
    ));

    let domain = dedup_by_domain(&exact.kept, profile);
    let domain_removed = domain.removed;
    log.extend(domain.log);
    log.push(format!(
        "Step 2 completed: {} duplicates by domain removed",
        domain_removed
    ));
    log.push(format!(
        "Process finished: {} unique credentials",
        domain.kept.len()
    ));

    Ok(CleanReport {
        cleaned: domain.kept,
        original_count,
        exact_duplicates_removed: exact.removed,
        domain_duplicates_removed: domain_removed,
        log,
    })
}
