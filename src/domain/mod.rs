// Domain layer: boxer model and the ports the ring talks through.

pub mod model;
pub mod ports;
