use std::{ops::Deref, sync::Arc};

use dalil_application::error::AppError;
use dalil_core::{
    entities::{EmailAddress, UserProfile},
    gateways::{
        geocode::ReverseGeoCodingGateway,
        media::{AudioHostingGateway, ImageHostingGateway},
        notify::NotificationGateway,
        video::VideoHostingGateway,
    },
    repositories::{Error as RepoError, UserRepo},
    usecases::Error as ParameterError,
};
use rocket::{
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;

pub const COOKIE_EMAIL_KEY: &str = "dalil-user-email";
pub const COOKIE_VIDEO_OAUTH_STATE_KEY: &str = "dalil-video-oauth-state";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    match auth_header_val.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Some(token),
        _ => None,
    }
}

/// Load the profile of a logged-in user.
///
/// Sessions of deleted or unknown accounts are treated as missing.
fn load_user<R: UserRepo>(repo: &R, email: &str) -> Result<UserProfile> {
    let email = email
        .parse::<EmailAddress>()
        .map_err(|_| ParameterError::Unauthorized)?;
    repo.get_user_by_email(&email).map_err(|err| match err {
        RepoError::NotFound => ParameterError::Unauthorized.into(),
        err => err.into(),
    })
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_email: Option<String>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&str> {
        self.account_email
            .as_deref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// The profile of the visitor if logged in.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<Option<UserProfile>> {
        self.account_email
            .as_deref()
            .map(|email| load_user(repo, email))
            .transpose()
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn account_email_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .map(|cookie| cookie.value().to_owned())
    }

    async fn account_email_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<String> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_email(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let mut account_email = None;
        if cfg!(feature = "cookies") {
            account_email = Self::account_email_from_cookie(request);
        }
        if cfg!(feature = "jwt") && account_email.is_none() {
            account_email = Self::account_email_from_jwt_in_header(request, &bearer_tokens).await;
        }
        Outcome::Success(Self {
            bearer_tokens,
            account_email,
        })
    }
}

/// A logged-in user.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn email(&self) -> &str {
        &self.0
    }

    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<UserProfile> {
        load_user(repo, &self.0)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.to_owned())),
            Err(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct ImageHosting(pub Arc<dyn ImageHostingGateway + Send + Sync>);

pub struct AudioHosting(pub Arc<dyn AudioHostingGateway + Send + Sync>);

pub struct VideoHosting(pub Arc<dyn VideoHostingGateway + Send + Sync>);

pub struct GeoCoding(pub Arc<dyn ReverseGeoCodingGateway + Send + Sync>);

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);
