//! Roster persistence abstraction.
//!
//! The engine never persists directly: generated rosters are handed to a
//! [`RosterStore`] for saving. The store owns the roster version counter,
//! bumping it on every saved mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Roster, RosterStatus};

/// A saved roster's listing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// The roster identifier.
    pub id: Uuid,
    /// The roster's display name.
    pub name: String,
    /// The covered month (1-based).
    pub month: u32,
    /// The covered year.
    pub year: i32,
    /// The lifecycle status.
    pub status: RosterStatus,
    /// The current version.
    pub version: u32,
    /// When the roster was generated.
    pub created_date: DateTime<Utc>,
    /// Who requested the generation.
    pub created_by: String,
    /// The number of entries the roster owns.
    pub entry_count: usize,
}

impl From<&Roster> for RosterSummary {
    fn from(roster: &Roster) -> Self {
        Self {
            id: roster.id,
            name: roster.name.clone(),
            month: roster.month,
            year: roster.year,
            status: roster.status,
            version: roster.version,
            created_date: roster.created_date,
            created_by: roster.created_by.clone(),
            entry_count: roster.entries.len(),
        }
    }
}

/// Storage seam for saved rosters.
pub trait RosterStore: Send + Sync {
    /// Saves a freshly generated roster at version 1.
    fn save(&self, roster: Roster) -> EngineResult<Roster>;

    /// Fetches a saved roster by id.
    fn get(&self, id: Uuid) -> EngineResult<Roster>;

    /// Lists saved rosters, newest first.
    fn list(&self) -> Vec<RosterSummary>;
}

/// An in-memory [`RosterStore`].
#[derive(Debug, Default)]
pub struct InMemoryRosterStore {
    rosters: RwLock<HashMap<Uuid, Roster>>,
}

impl InMemoryRosterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a mutation against a saved roster under the store's write
    /// lock, bumping the version and save timestamp when it succeeds.
    ///
    /// Holding the lock for the whole read-modify-write serializes
    /// concurrent mutations of the same roster; per-entry revisions still
    /// guard each client's read-edit round trip.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RosterNotFound`] for an unknown id, or the
    /// mutation's own error (in which case no version bump happens).
    pub fn modify<T>(
        &self,
        id: Uuid,
        mutation: impl FnOnce(&mut Roster) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut rosters = self.rosters.write().expect("roster store lock poisoned");
        let roster = rosters
            .get_mut(&id)
            .ok_or(EngineError::RosterNotFound { id })?;

        let value = mutation(roster)?;
        roster.version += 1;
        roster.last_modified = Utc::now();
        Ok(value)
    }
}

impl RosterStore for InMemoryRosterStore {
    fn save(&self, mut roster: Roster) -> EngineResult<Roster> {
        roster.version = 1;
        roster.last_modified = Utc::now();
        let mut rosters = self.rosters.write().expect("roster store lock poisoned");
        rosters.insert(roster.id, roster.clone());
        Ok(roster)
    }

    fn get(&self, id: Uuid) -> EngineResult<Roster> {
        let rosters = self.rosters.read().expect("roster store lock poisoned");
        rosters
            .get(&id)
            .cloned()
            .ok_or(EngineError::RosterNotFound { id })
    }

    fn list(&self) -> Vec<RosterSummary> {
        let rosters = self.rosters.read().expect("roster store lock poisoned");
        let mut summaries: Vec<RosterSummary> =
            rosters.values().map(RosterSummary::from).collect();
        summaries.sort_by(|a, b| b.created_date.cmp(&a.created_date).then(a.id.cmp(&b.id)));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenerationConfig;

    fn roster(name: &str) -> Roster {
        Roster {
            id: Uuid::new_v4(),
            name: name.to_string(),
            month: 12,
            year: 2024,
            status: RosterStatus::Draft,
            version: 1,
            created_date: Utc::now(),
            created_by: "admin".to_string(),
            last_modified: Utc::now(),
            config: GenerationConfig::new(12, 2024),
            entries: vec![],
        }
    }

    #[test]
    fn test_save_and_get_round_trip() {
        let store = InMemoryRosterStore::new();
        let saved = store.save(roster("December 2024 Roster")).unwrap();

        let fetched = store.get(saved.id).unwrap();
        assert_eq!(fetched.name, "December 2024 Roster");
        assert_eq!(fetched.version, 1);
    }

    #[test]
    fn test_get_unknown_id_reports_not_found() {
        let store = InMemoryRosterStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(EngineError::RosterNotFound { .. })
        ));
    }

    #[test]
    fn test_save_resets_version_to_one() {
        let store = InMemoryRosterStore::new();
        let mut unsaved = roster("December 2024 Roster");
        unsaved.version = 7;
        let saved = store.save(unsaved).unwrap();
        assert_eq!(saved.version, 1);
    }

    #[test]
    fn test_modify_bumps_version_on_success() {
        let store = InMemoryRosterStore::new();
        let saved = store.save(roster("December 2024 Roster")).unwrap();

        store
            .modify(saved.id, |roster| {
                roster.name = "Renamed".to_string();
                Ok(())
            })
            .unwrap();

        let fetched = store.get(saved.id).unwrap();
        assert_eq!(fetched.name, "Renamed");
        assert_eq!(fetched.version, 2);
    }

    #[test]
    fn test_modify_failure_skips_version_bump() {
        let store = InMemoryRosterStore::new();
        let saved = store.save(roster("December 2024 Roster")).unwrap();

        let result: EngineResult<()> = store.modify(saved.id, |roster| {
            Err(EngineError::CellLocked {
                employee_id: "1".to_string(),
                date: roster.created_date.date_naive(),
            })
        });
        assert!(result.is_err());
        assert_eq!(store.get(saved.id).unwrap().version, 1);
    }

    #[test]
    fn test_modify_unknown_roster_reports_not_found() {
        let store = InMemoryRosterStore::new();
        let result = store.modify(Uuid::new_v4(), |_| Ok(()));
        assert!(matches!(
            result,
            Err(EngineError::RosterNotFound { .. })
        ));
    }

    #[test]
    fn test_list_returns_newest_first() {
        let store = InMemoryRosterStore::new();
        let mut first = roster("November 2024 Roster");
        first.created_date = Utc::now() - chrono::Duration::days(30);
        let second = roster("December 2024 Roster");

        store.save(first).unwrap();
        store.save(second).unwrap();

        let summaries = store.list();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "December 2024 Roster");
        assert_eq!(summaries[1].name, "November 2024 Roster");
    }
}
