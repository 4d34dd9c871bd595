use super::*;

/// The consent page of the video hosting service.
pub fn video_authorize_url(
    video_hosting: &dyn VideoHostingGateway,
    admin: &UserProfile,
    state: &str,
) -> Result<Url> {
    usecases::authorize_admin(admin)?;
    video_hosting.authorize_url(state).map_err(AppError::gateway)
}

/// Exchange the authorization code and store the tokens of the shared account.
pub fn connect_video_hosting(
    connections: &sqlite::Connections,
    video_hosting: &dyn VideoHostingGateway,
    admin: &UserProfile,
    code: &str,
) -> Result<()> {
    let tokens =
        usecases::exchange_video_authorization_code(video_hosting, admin, code, Timestamp::now())
            .inspect_err(|err| {
                log::warn!("Failed to connect the video hosting account: {err}");
            })?;
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::store_video_tokens(conn, admin, tokens))?)
}

/// A valid access token of the shared account.
///
/// Expired tokens are refreshed and persisted.
pub fn valid_video_access_token(
    connections: &sqlite::Connections,
    video_hosting: &dyn VideoHostingGateway,
) -> Result<String> {
    let (admin_id, tokens) = usecases::shared_video_tokens(&connections.shared()?)?;
    let Some(refreshed) =
        usecases::refresh_video_tokens(video_hosting, &tokens, Timestamp::now())?
    else {
        return Ok(tokens.access_token);
    };
    let access_token = refreshed.access_token.clone();
    connections.exclusive()?.transaction(|conn| {
        usecases::update_shared_video_tokens(conn, admin_id.as_str(), refreshed)
    })?;
    Ok(access_token)
}

/// Upload a video with the shared account and return its URL.
pub fn upload_video(
    connections: &sqlite::Connections,
    video_hosting: &dyn VideoHostingGateway,
    title: &str,
    data: Vec<u8>,
) -> Result<Url> {
    let access_token = valid_video_access_token(connections, video_hosting)?;
    let size = data.len();
    let url = video_hosting
        .upload_video(&access_token, title, data)
        .map_err(|err| {
            log::warn!("Failed to upload video '{title}' ({size} bytes): {err}");
            AppError::gateway(err)
        })?;
    info!("Uploaded video '{title}' to {url}");
    Ok(url)
}
