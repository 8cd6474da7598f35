//! A dynamic JSON value built from shared, reference-counted nodes.
//!
//! A [`Json`] is a cheap handle. Cloning it aliases the node behind it, so a mutation made
//! through one handle is visible through every other. Nodes carry one of seven fixed kinds
//! ([`JsonType`]), and every value belongs to a single total order ([`compare`]) that also
//! drives equality.
//!
//! ```
//! use refjson::{json, Json};
//!
//! let doc = json!({"items": [1, 2]});
//! let items = doc.get("items");
//! items.push(3);
//! assert_eq!(doc.get("items").len(), 3);
//!
//! assert_ne!(Json::from(1), Json::from(1.0));
//! ```
//!
//! Typed encoding and decoding of Rust values lives in [`codec`]. The serde traits are
//! implemented for [`Json`], [`Array`] and [`Object`], so any serde data format can read or
//! write them.

mod config;
mod error;

pub mod codec;
pub mod value;

pub use crate::config::DeserializeCfg;
pub use crate::error::{Error, Result};
pub use crate::value::*;
