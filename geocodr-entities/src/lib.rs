#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geocodr-entities
//!
//! Reusable, agnostic domain entities for geocodr.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod geo;
pub mod geocode;
pub mod provider;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
