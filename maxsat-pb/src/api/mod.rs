mod constraint;
mod problem;
mod results;

pub use constraint::*;
pub use problem::*;
pub use results::*;
