//! # dalil-core
//!
//! Business rules of the Dalil directory: repository and gateway
//! abstractions and the use cases operating on them.

pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use dalil_entities::{
        email::*, employee::*, geo::*, id::*, marketing::*, message::*, password::*, percent::*,
        place::*, price::*, product::*, subscription::*, time::*, url::Url, user::*,
    };
}

pub use self::repositories::Error as RepoError;
