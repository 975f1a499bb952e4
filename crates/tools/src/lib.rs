pub mod errors;
pub mod position;
