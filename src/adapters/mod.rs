// Adapters layer: concrete clocks and output renderers.

pub mod clock;
pub mod render;
