// Domain layer: lot model and ports. Nothing here touches the terminal or the filesystem.

pub mod model;
pub mod ports;
