use crate::{repositories, util::validate::PlaceInvalidation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The category is invalid")]
    Category,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid phone nr")]
    Phone,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid password")]
    Password,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid credentials")]
    Credentials,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Admins cannot revoke their own admin flag")]
    RevokeOwnAdmin,
    #[error("There is no active subscription")]
    NoActiveSubscription,
    #[error("The maximum number of places has been reached")]
    MaxPlacesReached,
    #[error("The maximum number of products has been reached")]
    MaxProductsReached,
    #[error("The maximum number of images has been reached")]
    MaxImagesReached,
    #[error("The maximum number of videos has been reached")]
    MaxVideosReached,
    #[error("Empty message")]
    EmptyMessage,
    #[error("The message is too long")]
    MessageTooLong,
    #[error("Messages to yourself are not possible")]
    MessageToSelf,
    #[error("The message replies to a message of another place")]
    InvalidReply,
    #[error("Invalid code")]
    InvalidCode,
    #[error("The code already exists")]
    CodeExists,
    #[error("The promo code cannot be redeemed")]
    InvalidPromoCode,
    #[error("Percentage out of range")]
    Percent,
    #[error("Invalid price")]
    Price,
    #[error("Invalid duration")]
    InvalidDuration,
    #[error("The package is not available")]
    PackageInactive,
    #[error("The place owner cannot be an employee")]
    OwnerCannotBeEmployee,
    #[error("The user is already an employee of the place")]
    AlreadyEmployee,
    #[error("There is already a pending request")]
    RequestPending,
    #[error("The request has already been decided")]
    RequestAlreadyDecided,
    #[error("The video hosting account is not connected")]
    VideoHostingNotConnected,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("External service failed: {0}")]
    Gateway(anyhow::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<dalil_entities::password::ParseError> for Error {
    fn from(_: dalil_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<dalil_entities::url::ParseError> for Error {
    fn from(_: dalil_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<dalil_entities::percent::PercentOutOfRange> for Error {
    fn from(_: dalil_entities::percent::PercentOutOfRange) -> Self {
        Self::Percent
    }
}

impl From<dalil_entities::email::EmailAddressParseError> for Error {
    fn from(_: dalil_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<PlaceInvalidation> for Error {
    fn from(err: PlaceInvalidation) -> Self {
        match err {
            PlaceInvalidation::Name => Self::Name,
            PlaceInvalidation::Category => Self::Category,
            PlaceInvalidation::Position => Self::InvalidPosition,
            PlaceInvalidation::Phone => Self::Phone,
        }
    }
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}
