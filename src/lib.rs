#![deny(clippy::suspicious)]
#![warn(clippy::pedantic)]
#![warn(let_underscore_drop)]
// Allows need to be after warn/deny
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

//! Helpers for working with ordered sequences: toggle membership, find, remove, replace or merge
//! elements selected by a [`Criteria`], group elements, drop duplicates and move elements around.
//!
//! A [`Criteria`] is either a predicate or a shape descriptor. Shape descriptors are
//! [`Mapping`](types::Mapping)s which name fields and the values those fields must hold. Elements
//! expose their fields through the [`Shape`] trait, which is implemented for the dynamic
//! [`Value`](types::Value) and [`Mapping`](types::Mapping) types.
//!
//! ```
//! use seqops::list;
//! use seqops::types::Mapping;
//! use seqops::Criteria;
//!
//! let mut users: Vec<Mapping> = serde_yaml::from_str(
//!     r#"
//!     - {id: 1, name: foo}
//!     - {id: 2, name: bar}
//!     "#,
//! )
//! .unwrap();
//!
//! let bar = Criteria::from_yaml("{name: bar}").unwrap();
//! assert_eq!(list::find_index_by_criteria(&users, &bar), Some(1));
//!
//! list::remove_by_criteria(&mut users, &bar);
//! assert_eq!(users.len(), 1);
//! ```

mod criteria;
pub mod list;
mod shape;
pub mod types;

pub use criteria::Criteria;
pub use shape::{Merge, Shape};
