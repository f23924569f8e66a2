//! Error types

mod export;
mod field;
mod normalize;
mod table;

pub use export::*;
pub use field::*;
pub use normalize::*;
pub use table::*;
