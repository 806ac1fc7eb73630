//! moments-domain
//!
//! Pure data for the memorial intake form: step payloads, relationship entries
//! and the static trait / relationship-type catalogs.
//! No I/O, no CLI, no storage.

pub mod catalog;
pub mod common;
pub mod form;
pub mod relationship;

pub use catalog::*;
pub use common::*;
pub use form::*;
pub use relationship::*;
