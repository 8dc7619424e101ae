// Adapters layer: concrete repositories and random sources behind the domain ports.

pub mod json_file;
pub mod memory;
pub mod random;

pub use json_file::JsonFileRepository;
pub use memory::{BoxerRow, InMemoryBoxerRepository};
pub use random::{SeededRandom, SystemRandom};
