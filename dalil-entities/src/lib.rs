#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # dalil-entities
//!
//! Reusable, agnostic domain entities for the Dalil business directory.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod employee;
pub mod geo;
pub mod id;
pub mod marketing;
pub mod message;
pub mod password;
pub mod percent;
pub mod place;
pub mod price;
pub mod product;
pub mod subscription;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
