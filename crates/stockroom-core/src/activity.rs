//! Activity feed: who changed the inventory, what they did and when.
//!
//! Every applied mutation appends one entry attributed to the current
//! [`Actor`]. Rejected, invalid and not-found outcomes leave no trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who the feed attributes new entries to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: String,
    /// Free-form badge text, e.g. "Admin" or "Staff".
    pub role: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new("System", "System")
    }
}

/// One line of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u64,
    pub user: String,
    pub role: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

/// Source of timestamps for new entries.
pub type Clock = fn() -> DateTime<Utc>;

/// Append-only list of entries plus the actor new entries are credited to.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
    actor: Actor,
    clock: Clock,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            actor: Actor::default(),
            clock: Utc::now,
        }
    }
}

impl ActivityLog {
    pub fn from_entries(entries: Vec<ActivityEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Use `clock` instead of the system time for new entries.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn set_actor(&mut self, actor: Actor) {
        self.actor = actor;
    }

    /// Append `action` for the current actor and return the new entry.
    pub fn record(&mut self, action: impl Into<String>) -> &ActivityEntry {
        let id = self
            .entries
            .iter()
            .map(|entry| entry.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        self.entries.push(ActivityEntry {
            id,
            user: self.actor.name.clone(),
            role: self.actor.role.clone(),
            action: action.into(),
            timestamp: (self.clock)(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Entries in the order they were recorded or loaded.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// Up to `limit` entries, newest first. Equal timestamps fall back to
    /// the higher id first.
    pub fn recent(&self, limit: usize) -> Vec<&ActivityEntry> {
        let mut entries: Vec<&ActivityEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        entries.truncate(limit);
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Short age label such as "just now", "2m ago", "3h ago" or "5d ago".
///
/// Timestamps in the future read as "just now".
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 28, 12, 0, 0).unwrap()
    }

    fn entry(id: u64, minutes_before_noon: i64) -> ActivityEntry {
        ActivityEntry {
            id,
            user: "Nadia".to_string(),
            role: "Admin".to_string(),
            action: format!("action {id}"),
            timestamp: noon() - Duration::minutes(minutes_before_noon),
        }
    }

    #[test]
    fn record_credits_the_current_actor() {
        let mut log = ActivityLog::default().with_clock(noon);
        log.set_actor(Actor::new("Omar", "Staff"));
        let entry = log.record("Added item 'Cement'").clone();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.user, "Omar");
        assert_eq!(entry.role, "Staff");
        assert_eq!(entry.timestamp, noon());
    }

    #[test]
    fn ids_continue_after_loaded_entries() {
        let mut log = ActivityLog::from_entries(vec![entry(4, 10), entry(2, 5)]).with_clock(noon);
        assert_eq!(log.record("x").id, 5);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let log = ActivityLog::from_entries(vec![entry(1, 30), entry(2, 0), entry(3, 30), entry(4, 90)]);
        let ids: Vec<u64> = log.recent(3).iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(ActivityLog::default().recent(5).is_empty());
    }

    #[test]
    fn relative_time_buckets() {
        let now = noon();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now + Duration::minutes(5), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(2), now), "2m ago");
        assert_eq!(relative_time(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(5), now), "5d ago");
    }
}
