mod assignment;
mod constraint_id;
mod decoding_error;
mod encoding_error;
mod literal;
mod variable;

pub use assignment::*;
pub use constraint_id::*;
pub use decoding_error::*;
pub use encoding_error::*;
pub use literal::*;
pub use variable::*;
