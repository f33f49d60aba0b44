//! Library side of the Stockroom CLI: logging setup and table rendering.

pub mod logging;
pub mod render;
