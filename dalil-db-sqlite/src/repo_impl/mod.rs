// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in milliseconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use dalil_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

// The same implementation is shared by all kinds of connections.
// Read-only connections are never used for modifications.
macro_rules! impl_repo {
    ($repo:ident, $($body:tt)*) => {
        impl<'a> $repo for DbReadOnly<'a> {
            $($body)*
        }
        impl<'a> $repo for DbReadWrite<'a> {
            $($body)*
        }
        impl<'a> $repo for DbConnection<'a> {
            $($body)*
        }
    };
}

mod employee;
mod marketing;
mod message;
mod place;
mod product;
mod subscription;
mod user;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Updates and deletes of a single row by id.
fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow!("Modified {count} rows instead of a single one").into()),
    }
}

fn load_url(url: String) -> Option<Url> {
    match url.parse() {
        Ok(url) => Some(url),
        Err(err) => {
            log::warn!("Failed to parse URL '{url}' from database: {err}");
            None
        }
    }
}

fn load_required_url(url: String) -> Result<Url> {
    url.parse()
        .map_err(|err| anyhow!("Invalid URL '{url}' in database: {err}").into())
}

fn load_percent(value: i16) -> Result<Percent> {
    Percent::try_from(i64::from(value)).map_err(|err| anyhow!("{err}: {value}").into())
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// The use cases reject prices above `Price::MAX`,
// so every valid price fits into a column.
fn price_to_i64(price: Price) -> i64 {
    debug_assert!(price <= Price::MAX);
    to_i64(price.minor_units())
}
