//! Dashboard data types

mod address;
mod contact;
mod kinds;
mod status;
mod update;

pub use address::*;
pub use contact::*;
pub use kinds::*;
pub use status::*;
pub use update::*;
