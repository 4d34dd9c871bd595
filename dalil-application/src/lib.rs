#[macro_use]
extern crate log;

mod employees;
mod marketing;
mod media;
mod messages;
mod packages;
mod places;
mod products;
mod subscriptions;
mod users;
mod video;

pub mod prelude {
    pub use super::{
        employees::*, marketing::*, media::*, messages::*, packages::*, places::*,
        products::*, subscriptions::*, users::*, video::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use crate::error::AppError;
pub(crate) use dalil_core::{
    entities::*,
    gateways::{media::*, notify::*, video::VideoHostingGateway},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use dalil_db_sqlite::Connections;
}
