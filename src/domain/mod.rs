// Domain layer: migration models and ports (interfaces). No I/O here beyond std/serde types.

pub mod model;
pub mod ports;
