//! Dynamically typed records, the default element type for shape criteria.

mod from;
mod mapping;
mod value;

pub use mapping::Mapping;
pub use value::Value;
