use crate::domain::model::{Boxer, BoxerId, BoxerStats, FightResult};
use crate::utils::error::{RepositoryError, Result};

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// What the ring needs from persistence: look a boxer up, record an outcome.
#[cfg_attr(test, mockall::automock)]
pub trait BoxerRepository {
    fn get_boxer_by_id(&self, id: BoxerId) -> RepositoryResult<Boxer>;

    /// Always bumps the fight count; bumps wins only for [`FightResult::Win`].
    fn update_stats(&mut self, id: BoxerId, result: FightResult) -> RepositoryResult<()>;
}

/// Roster management on top of the ring-facing repository.
pub trait BoxerRoster: BoxerRepository {
    fn create_boxer(
        &mut self,
        name: &str,
        weight: u32,
        height: u32,
        reach: f64,
        age: u32,
    ) -> Result<Boxer>;

    fn delete_boxer(&mut self, id: BoxerId) -> RepositoryResult<()>;

    fn get_boxer_by_name(&self, name: &str) -> RepositoryResult<Boxer>;

    fn get_stats(&self, id: BoxerId) -> RepositoryResult<BoxerStats>;

    /// All boxers, ordered by id.
    fn boxers(&self) -> Vec<Boxer>;
}

/// Uniform draws in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}

impl<F> RandomSource for F
where
    F: Fn() -> f64 + Send + Sync,
{
    fn next_f64(&self) -> f64 {
        self()
    }
}

pub trait ConfigProvider {
    fn roster_path(&self) -> &str;
    fn seed(&self) -> Option<u64>;
    fn verbose(&self) -> bool;
}
