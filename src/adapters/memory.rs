use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::model::{Boxer, BoxerId, BoxerStats, FightResult};
use crate::domain::ports::{BoxerRepository, BoxerRoster, RepositoryResult};
use crate::utils::error::{RepositoryError, Result};

/// Flat, storable form of a boxer and its record. The weight class is
/// not stored; it is derived again when the row is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxerRow {
    pub id: BoxerId,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    pub reach: f64,
    pub age: u32,
    #[serde(default)]
    pub fights: u32,
    #[serde(default)]
    pub wins: u32,
}

#[derive(Debug, Clone)]
struct BoxerRecord {
    boxer: Boxer,
    stats: BoxerStats,
}

impl TryFrom<BoxerRow> for BoxerRecord {
    type Error = RepositoryError;

    fn try_from(row: BoxerRow) -> std::result::Result<Self, Self::Error> {
        let boxer = Boxer::new(row.id, row.name, row.weight, row.height, row.reach, row.age)
            .map_err(|e| RepositoryError::CorruptRecord {
                id: row.id,
                reason: e.to_string(),
            })?;
        Ok(Self {
            boxer,
            stats: BoxerStats {
                fights: row.fights,
                wins: row.wins,
            },
        })
    }
}

impl From<&BoxerRecord> for BoxerRow {
    fn from(record: &BoxerRecord) -> Self {
        let boxer = &record.boxer;
        Self {
            id: boxer.id(),
            name: boxer.name().to_string(),
            weight: boxer.weight(),
            height: boxer.height(),
            reach: boxer.reach(),
            age: boxer.age(),
            fights: record.stats.fights,
            wins: record.stats.wins,
        }
    }
}

/// Roster kept entirely in memory. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryBoxerRepository {
    records: BTreeMap<BoxerId, BoxerRecord>,
    next_id: u64,
}

impl Default for InMemoryBoxerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBoxerRepository {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a roster from stored rows.
    ///
    /// Rows must have unique ids and unique names.
    pub fn from_rows(rows: Vec<BoxerRow>, next_id: u64) -> RepositoryResult<Self> {
        let mut records: BTreeMap<BoxerId, BoxerRecord> = BTreeMap::new();
        let mut names = HashSet::new();
        let mut after_highest = 1;
        for row in rows {
            let id = row.id;
            after_highest = id
                .0
                .checked_add(1)
                .ok_or_else(|| RepositoryError::CorruptRecord {
                    id,
                    reason: "ID is too large to assign a successor".to_string(),
                })?
                .max(after_highest);

            let record = BoxerRecord::try_from(row)?;
            if records.contains_key(&id) {
                return Err(RepositoryError::CorruptRecord {
                    id,
                    reason: "ID appears more than once".to_string(),
                });
            }
            if !names.insert(record.boxer.name().to_string()) {
                return Err(RepositoryError::CorruptRecord {
                    id,
                    reason: format!("name '{}' is already taken", record.boxer.name()),
                });
            }
            records.insert(id, record);
        }
        Ok(Self {
            records,
            next_id: next_id.max(after_highest),
        })
    }

    pub fn rows(&self) -> Vec<BoxerRow> {
        self.records.values().map(BoxerRow::from).collect()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl BoxerRepository for InMemoryBoxerRepository {
    fn get_boxer_by_id(&self, id: BoxerId) -> RepositoryResult<Boxer> {
        match self.records.get(&id) {
            Some(record) => Ok(record.boxer.clone()),
            None => {
                tracing::warn!("Boxer with ID {} not found", id);
                Err(RepositoryError::NotFound { id })
            }
        }
    }

    fn update_stats(&mut self, id: BoxerId, result: FightResult) -> RepositoryResult<()> {
        let record = self.records.get_mut(&id).ok_or_else(|| {
            tracing::warn!("Boxer with ID {} not found", id);
            RepositoryError::NotFound { id }
        })?;
        record.stats.record(result);
        tracing::info!("Updated stats for boxer ID {} with result: {}", id, result);
        Ok(())
    }
}

impl BoxerRoster for InMemoryBoxerRepository {
    fn create_boxer(
        &mut self,
        name: &str,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<Boxer> {
        if self.records.values().any(|r| r.boxer.name() == name) {
            tracing::warn!("Boxer with name '{}' already exists", name);
            return Err(RepositoryError::DuplicateName {
                name: name.to_string(),
            }
            .into());
        }

        let id = BoxerId(self.next_id);
        let following = self
            .next_id
            .checked_add(1)
            .ok_or(RepositoryError::IdsExhausted)?;
        let boxer = Boxer::new(id, name, weight, height, reach, age)?;
        self.next_id = following;
        self.records.insert(
            id,
            BoxerRecord {
                boxer: boxer.clone(),
                stats: BoxerStats::default(),
            },
        );
        tracing::info!("Created boxer '{}' with ID {}", name, id);
        Ok(boxer)
    }

    fn delete_boxer(&mut self, id: BoxerId) -> RepositoryResult<()> {
        if self.records.remove(&id).is_none() {
            tracing::warn!("Boxer with ID {} not found", id);
            return Err(RepositoryError::NotFound { id });
        }
        tracing::info!("Deleted boxer with ID {}", id);
        Ok(())
    }

    fn get_boxer_by_name(&self, name: &str) -> RepositoryResult<Boxer> {
        self.records
            .values()
            .find(|r| r.boxer.name() == name)
            .map(|r| r.boxer.clone())
            .ok_or_else(|| RepositoryError::NameNotFound {
                name: name.to_string(),
            })
    }

    fn get_stats(&self, id: BoxerId) -> RepositoryResult<BoxerStats> {
        self.records
            .get(&id)
            .map(|r| r.stats)
            .ok_or(RepositoryError::NotFound { id })
    }

    fn boxers(&self) -> Vec<Boxer> {
        self.records.values().map(|r| r.boxer.clone()).collect()
    }
}
