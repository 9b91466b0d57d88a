//! Translation of solver output back into named variables and broken soft constraints.
mod model;
mod model_decoder;

pub use model::*;
pub use model_decoder::*;
