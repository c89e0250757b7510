// Domain layer: value types and ports. Nothing here touches the terminal.

pub mod model;
pub mod ports;
