// Domain layer: quantities, recipes and the ports the calculator depends on.

pub mod model;
pub mod ports;
