use super::*;

fn login_response(
    email: &EmailAddress,
    cookies: &CookieJar<'_>,
    jwt_state: &jwt::JwtState,
) -> Result<Option<json::JwtToken>> {
    let mut response = None;
    if cfg!(feature = "jwt") {
        let token = jwt_state.generate_token(email.as_str())?;
        response = Some(json::JwtToken { token });
    }
    if cfg!(feature = "cookies") {
        cookies.add_private(
            Cookie::build((COOKIE_EMAIL_KEY, email.as_str().to_owned()))
                .same_site(rocket::http::SameSite::None),
        );
    }
    Ok(Json(response))
}

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<Option<json::JwtToken>> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    let credentials = usecases::Credentials {
        email: &email,
        password: &login.password,
    };
    let user = usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
        debug!("Login with email '{email}' failed: {err}");
        err
    })?;
    login_response(&user.email, cookies, jwt_state)
}

/// Log in and create the account on first sign-in.
#[post("/sign-in", format = "application/json", data = "<login>")]
pub fn post_sign_in(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<Option<json::JwtToken>> {
    let login = login?.into_inner();
    let email = login.email.parse::<EmailAddress>()?;
    let credentials = usecases::Credentials {
        email: &email,
        password: &login.password,
    };
    let user = flows::sign_in_or_register(&db, &credentials)?;
    login_response(&user.email, cookies, jwt_state)
}

#[post("/logout", format = "application/json")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<()> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    if cfg!(feature = "jwt") {
        for bearer in auth.bearer_tokens() {
            jwt_state.blacklist_token(bearer.to_owned());
        }
    }
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(db: sqlite::Connections, new_user: JsonResult<json::NewUser>) -> Result<json::User> {
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let user = flows::register_user(&db, new_user)?;
    Ok(Json(user.into()))
}

#[get("/users/current", format = "application/json")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = account.user(&db.shared()?)?;
    Ok(Json(user.into()))
}

#[put("/users/current", format = "application/json", data = "<update>")]
pub fn put_current_user(
    db: sqlite::Connections,
    account: Account,
    update: JsonResult<json::ProfileUpdate>,
) -> Result<json::User> {
    let update = from_json::profile_update(update?.into_inner());
    let user = account.user(&db.shared()?)?;
    let user = flows::update_profile(&db, &user, update)?;
    Ok(Json(user.into()))
}
