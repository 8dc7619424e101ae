pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::RingConfig;

pub use adapters::{InMemoryBoxerRepository, JsonFileRepository, SeededRandom, SystemRandom};
pub use crate::core::{fight::Bout, Ring, SharedRing};
pub use domain::model::{Boxer, BoxerId, BoxerStats, FightResult, WeightClass};
pub use domain::ports::{BoxerRepository, BoxerRoster, RandomSource};
pub use utils::error::{BoxingError, RepositoryError, Result};
