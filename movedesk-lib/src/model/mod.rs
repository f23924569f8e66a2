//! Record model and dashboard data types

mod normalize;
mod path;
mod record;
mod record_serde;
mod timestamp;
pub mod types;
mod value;

pub use normalize::*;
pub use path::*;
pub use record::*;
pub use timestamp::*;
pub use value::*;
