// Domain layer: quantities, the canonical result model and ports (interfaces)
// to the collaborators the core depends on.

pub mod model;
pub mod ports;
pub mod units;
