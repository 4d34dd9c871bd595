mod affiliates;
mod authorize;
mod change_user_flags;
mod conversations;
mod create_place;
mod discount_codes;
mod employees;
mod error;
mod load_places;
mod login;
mod packages;
mod product_media;
mod products;
mod promo_codes;
mod register_user;
mod send_message;
mod stats;
mod subscriptions;
mod update_place;
mod update_profile;
mod video_tokens;

#[cfg(test)]
pub mod tests;

pub use self::{
    affiliates::*, authorize::*, change_user_flags::*, conversations::*, create_place::*,
    discount_codes::*, employees::*, error::Error, load_places::*, login::*, packages::*,
    product_media::*, products::*, promo_codes::*, register_user::*, send_message::*, stats::*,
    subscriptions::*, update_place::*, update_profile::*, video_tokens::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*, RepoError};
}
use self::prelude::*;

fn validate_price(minor_units: u64) -> Result<Price> {
    Price::try_from_minor_units(minor_units).ok_or(Error::Price)
}

fn validate_name(name: String) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Name);
    }
    Ok(name.to_owned())
}

pub fn get_user<R>(repo: &R, id: &str) -> Result<UserProfile>
where
    R: UserRepo,
{
    repo.get_user(id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => err.into(),
    })
}
