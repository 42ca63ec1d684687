use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::DayGroup;

/// Load day groups from a JSON file.
///
/// A missing file is an empty diary. The result is normalized with
/// [`normalize_groups`].
pub fn load_day_groups<P: AsRef<Path>>(path: P) -> Result<Vec<DayGroup>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "meal file missing, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut groups: Vec<DayGroup> = serde_json::from_str(&content)?;
    normalize_groups(&mut groups);

    debug!(path = %path.display(), days = groups.len(), "loaded meals");
    Ok(groups)
}

/// Save day groups to a JSON file.
pub fn save_day_groups<P: AsRef<Path>>(path: P, groups: &[DayGroup]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(groups)?;
    fs::write(path, json)?;

    debug!(path = %path.display(), days = groups.len(), "saved meals");
    Ok(())
}

/// Merge groups sharing a date, drop empty groups, order days most recent
/// first and meals within a day by time.
pub fn normalize_groups(groups: &mut Vec<DayGroup>) {
    groups.sort_by_key(|g| Reverse(g.date));
    groups.dedup_by(|later, kept| {
        if later.date == kept.date {
            kept.data.append(&mut later.data);
            true
        } else {
            false
        }
    });
    groups.retain(|g| !g.is_empty());

    for group in groups.iter_mut() {
        group.data.sort_by_key(|m| m.time);
    }
}
