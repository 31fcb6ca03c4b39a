// Domain layer: site models and ports. No web or config dependencies here.

pub mod model;
pub mod ports;
