// Domain layer: models and ports. No process or filesystem side effects beyond inspection.

pub mod model;
pub mod ports;
