pub mod fight;
pub mod ring;

pub use crate::domain::model::{Boxer, BoxerId, BoxerStats, FightResult, WeightClass};
pub use crate::domain::ports::{BoxerRepository, BoxerRoster, ConfigProvider, RandomSource};
pub use crate::utils::error::Result;
pub use fight::Bout;
pub use ring::{Ring, SharedRing, RING_CAPACITY};
