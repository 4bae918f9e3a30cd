// Domain layer: instants, decomposed durations and the ports the engine depends on.

pub mod instant;
pub mod model;
pub mod ports;
