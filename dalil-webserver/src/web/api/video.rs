use std::sync::Arc;

use rocket::{http::SameSite, tokio::task::spawn_blocking};

use super::*;

/// Start connecting the shared video hosting account.
#[get("/video/oauth/authorize")]
pub fn get_authorize(
    db: sqlite::Connections,
    account: Account,
    cookies: &CookieJar<'_>,
    video_hosting: &State<VideoHosting>,
) -> Result<json::AuthorizationUrl> {
    let admin = account.user(&db.shared()?)?;
    let state = Id::new().to_string();
    let url = flows::video_authorize_url(&*video_hosting.0, &admin, &state)?;
    cookies.add_private(
        Cookie::build((COOKIE_VIDEO_OAUTH_STATE_KEY, state)).same_site(SameSite::Lax),
    );
    Ok(Json(json::AuthorizationUrl { url: url.into() }))
}

#[get("/video/oauth/callback?<code>&<state>")]
pub async fn get_callback(
    db: sqlite::Connections,
    account: Account,
    cookies: &CookieJar<'_>,
    video_hosting: &State<VideoHosting>,
    code: String,
    state: String,
) -> StatusResult {
    let expected_state = cookies
        .get_private(COOKIE_VIDEO_OAUTH_STATE_KEY)
        .map(|cookie| cookie.value().to_owned());
    cookies.remove_private(COOKIE_VIDEO_OAUTH_STATE_KEY);
    if expected_state.as_deref() != Some(state.as_str()) {
        warn!("Rejected video hosting callback with unexpected state");
        return Err(ParameterError::Forbidden.into());
    }
    let gateway = Arc::clone(&video_hosting.0);
    spawn_blocking(move || {
        let admin = account.user(&db.shared()?)?;
        flows::connect_video_hosting(&db, &*gateway, &admin, &code)?;
        Ok::<_, ApiError>(())
    })
    .await??;
    Ok(Status::NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::{api::tests::prelude::*, tests::*};

    fn authorize(client: &Client) -> String {
        let res = client.get("/video/oauth/authorize").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let json::AuthorizationUrl { url } = res.into_json().unwrap();
        let (_, state) = url.split_once("state=").unwrap();
        state.to_owned()
    }

    #[test]
    fn connect_the_shared_account() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        login(&client, "admin@example.com", "secret123");

        let state = authorize(&client);
        let res = client
            .get(format!("/video/oauth/callback?code=valid&state={state}"))
            .dispatch();
        assert_eq!(res.status(), Status::NoContent);

        let res = client.post("/upload/video?title=intro").body(vec![1]).dispatch();
        assert_eq!(res.status(), Status::Ok);
    }

    #[test]
    fn reject_callback_with_unexpected_state() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        login(&client, "admin@example.com", "secret123");
        authorize(&client);
        let res = client
            .get("/video/oauth/callback?code=valid&state=forged")
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
    }

    #[test]
    fn only_admins_connect_the_video_hosting() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        register_user(&db, "user@example.com", "secret123");
        login(&client, "user@example.com", "secret123");
        let res = client.get("/video/oauth/authorize").dispatch();
        assert_eq!(res.status(), Status::Forbidden);
    }

    #[test]
    fn invalid_authorization_code() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        login(&client, "admin@example.com", "secret123");
        let state = authorize(&client);
        let res = client
            .get(format!("/video/oauth/callback?code=invalid&state={state}"))
            .dispatch();
        assert_eq!(res.status(), Status::BadGateway);
    }
}
