use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::memory::{BoxerRow, InMemoryBoxerRepository};
use crate::domain::model::{Boxer, BoxerId, BoxerStats, FightResult};
use crate::domain::ports::{BoxerRepository, BoxerRoster, RepositoryResult};
use crate::utils::error::Result;

#[derive(Debug, Serialize, Deserialize)]
struct RosterFile {
    next_id: u64,
    boxers: Vec<BoxerRow>,
}

/// Roster persisted as a single JSON document.
///
/// Every successful mutation rewrites the file.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    roster: InMemoryBoxerRepository,
}

impl JsonFileRepository {
    /// Loads the roster at `path`; a missing file is an empty roster.
    pub fn open<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref().to_path_buf();
        let roster = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: RosterFile = serde_json::from_str(&contents)?;
            tracing::debug!(
                "Loaded {} boxer(s) from {}",
                file.boxers.len(),
                path.display()
            );
            InMemoryBoxerRepository::from_rows(file.boxers, file.next_id)?
        } else {
            tracing::info!("No roster at {}, starting empty", path.display());
            InMemoryBoxerRepository::new()
        };
        Ok(Self { path, roster })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> RepositoryResult<()> {
        let file = RosterFile {
            next_id: self.roster.next_id(),
            boxers: self.roster.rows(),
        };
        let json = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        tracing::debug!("Saved roster to {}", self.path.display());
        Ok(())
    }

    // Applies a mutation and persists it; memory is rolled back if the write fails.
    fn commit<T, E, F>(&mut self, mutate: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut InMemoryBoxerRepository) -> std::result::Result<T, E>,
        E: From<crate::utils::error::RepositoryError>,
    {
        let snapshot = self.roster.clone();
        let value = mutate(&mut self.roster)?;
        if let Err(e) = self.save() {
            tracing::error!("Failed to write roster {}: {}", self.path.display(), e);
            self.roster = snapshot;
            return Err(e.into());
        }
        Ok(value)
    }
}

impl BoxerRepository for JsonFileRepository {
    fn get_boxer_by_id(&self, id: BoxerId) -> RepositoryResult<Boxer> {
        self.roster.get_boxer_by_id(id)
    }

    fn update_stats(&mut self, id: BoxerId, result: FightResult) -> RepositoryResult<()> {
        self.commit(|roster| roster.update_stats(id, result))
    }
}

impl BoxerRoster for JsonFileRepository {
    fn create_boxer(
        &mut self,
        name: &str,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<Boxer> {
        self.commit(|roster| roster.create_boxer(name, weight, height, reach, age))
    }

    fn delete_boxer(&mut self, id: BoxerId) -> RepositoryResult<()> {
        self.commit(|roster| roster.delete_boxer(id))
    }

    fn get_boxer_by_name(&self, name: &str) -> RepositoryResult<Boxer> {
        self.roster.get_boxer_by_name(name)
    }

    fn get_stats(&self, id: BoxerId) -> RepositoryResult<BoxerStats> {
        self.roster.get_stats(id)
    }

    fn boxers(&self) -> Vec<Boxer> {
        self.roster.boxers()
    }
}
