use super::{authorize::authorize_admin, prelude::*};
use crate::gateways::video::VideoHostingGateway;

// None of the functions below call the video hosting service while
// accessing a repository. The token endpoints may answer slowly and
// the caller must not hold on to the database meanwhile.

/// Exchange the authorization code of the consent page for tokens.
pub fn exchange_video_authorization_code<G>(
    gateway: &G,
    admin: &UserProfile,
    code: &str,
    now: Timestamp,
) -> Result<OAuthTokens>
where
    G: VideoHostingGateway + ?Sized,
{
    authorize_admin(admin)?;
    gateway.exchange_code(code, now).map_err(Error::Gateway)
}

/// Persist the tokens of the shared video hosting account on the admin profile.
pub fn store_video_tokens<R>(repo: &R, admin: &UserProfile, tokens: OAuthTokens) -> Result<()>
where
    R: UserRepo,
{
    authorize_admin(admin)?;
    let mut admin = repo.get_user(admin.id.as_str())?;
    admin.video_tokens = Some(tokens);
    repo.update_user(&admin)?;
    log::info!("Connected video hosting account of {}", admin.email);
    Ok(())
}

/// The tokens of the shared video hosting account and the id
/// of the admin they belong to.
pub fn shared_video_tokens<R>(repo: &R) -> Result<(Id, OAuthTokens)>
where
    R: UserRepo,
{
    let admin = repo
        .find_admin_with_video_tokens()?
        .ok_or(Error::VideoHostingNotConnected)?;
    let UserProfile {
        id, video_tokens, ..
    } = admin;
    let tokens = video_tokens.ok_or(Error::VideoHostingNotConnected)?;
    Ok((id, tokens))
}

/// Refresh expired tokens.
///
/// Returns `None` if the current tokens are still valid.
pub fn refresh_video_tokens<G>(
    gateway: &G,
    tokens: &OAuthTokens,
    now: Timestamp,
) -> Result<Option<OAuthTokens>>
where
    G: VideoHostingGateway + ?Sized,
{
    if !tokens.is_expired(now) {
        return Ok(None);
    }
    log::debug!("Refreshing expired video hosting token");
    let refreshed = gateway
        .refresh(&tokens.refresh_token, now)
        .map_err(Error::Gateway)?;
    Ok(Some(refreshed))
}

/// Replace the tokens of the shared account after a refresh.
pub fn update_shared_video_tokens<R>(repo: &R, admin_id: &str, tokens: OAuthTokens) -> Result<()>
where
    R: UserRepo,
{
    let mut admin = repo.get_user(admin_id)?;
    admin.video_tokens = Some(tokens);
    repo.update_user(&admin)?;
    Ok(())
}
