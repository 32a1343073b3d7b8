#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # bw-entities
//!
//! Reusable, agnostic domain entities for Berlin Wandel.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod danger;
pub mod geo;
pub mod id;
pub mod location;
pub mod time;
pub mod time_category;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
