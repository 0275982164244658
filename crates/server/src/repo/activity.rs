use chrono::Utc;
use shared_types::{new_id, ActivityLogEntry, User};

use crate::store::MockStore;

/// Append an entry stamped with the current time.
pub fn record(store: &mut MockStore, actor: &User, action: impl Into<String>) -> ActivityLogEntry {
    let entry = ActivityLogEntry {
        id: new_id("log"),
        actor: actor.summary(),
        action: action.into(),
        timestamp: Utc::now(),
    };
    tracing::debug!(actor = %actor.id, action = %entry.action, "activity recorded");
    store.activity_log.push(entry.clone());
    entry
}

/// All entries, newest first. Entries sharing a timestamp keep the later
/// one on top.
pub fn recent(store: &MockStore) -> Vec<&ActivityLogEntry> {
    let mut entries: Vec<&ActivityLogEntry> = store.activity_log.iter().collect();
    entries.reverse();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn recent_is_newest_first() {
        let store = MockStore::seeded();
        let ids: Vec<_> = recent(&store).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"log-7"));
        assert_eq!(ids.last(), Some(&"log-1"));
    }

    #[test]
    fn recorded_entry_lands_on_top() {
        let mut store = MockStore::seeded();
        let entry = record(&mut store, &fixtures::admin(), "Viewed analytics");
        assert_eq!(recent(&store)[0].id, entry.id);
        assert_eq!(entry.actor.name, "Dean Thompson");
    }

    #[test]
    fn same_tick_entries_come_out_latest_first() {
        let mut store = MockStore::seeded();
        let first = record(&mut store, &fixtures::admin(), "Opened user management");
        record(&mut store, &fixtures::admin(), "Opened analytics");
        if let Some(last) = store.activity_log.last_mut() {
            last.timestamp = first.timestamp;
        }

        let top: Vec<_> = recent(&store).iter().take(2).map(|e| e.action.as_str()).collect();
        assert_eq!(top, vec!["Opened analytics", "Opened user management"]);
    }
}
