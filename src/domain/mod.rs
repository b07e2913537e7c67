// Domain layer: fare data, report types and the ports the checker talks through.

pub mod model;
pub mod ports;
