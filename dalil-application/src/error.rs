use dalil_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use dalil_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<dalil_entities::url::ParseError> for BError {
    fn from(_: dalil_entities::url::ParseError) -> Self {
        Self::Parameter(ParameterError::Url)
    }
}

impl From<dalil_entities::email::EmailAddressParseError> for AppError {
    fn from(_: dalil_entities::email::EmailAddressParseError) -> Self {
        BError::Parameter(ParameterError::Email).into()
    }
}

impl From<dalil_entities::url::ParseError> for AppError {
    fn from(err: dalil_entities::url::ParseError) -> Self {
        BError::from(err).into()
    }
}

impl AppError {
    /// A failure of an external service, e.g. a hosting provider.
    pub fn gateway(err: anyhow::Error) -> Self {
        ParameterError::Gateway(err).into()
    }
}
