use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password: String,
    pub display_name: Option<String>,
}

/// Create a new user profile.
///
/// The very first user of an empty database becomes an admin.
pub fn register_user<R>(repo: &R, new_user: NewUser, now: Timestamp) -> Result<UserProfile>
where
    R: UserRepo,
{
    let NewUser {
        email,
        password,
        display_name,
    } = new_user;
    if !validate::is_valid_email(email.as_str()) {
        return Err(Error::Email);
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let is_admin = repo.count_users()? == 0;
    let user = UserProfile {
        id: Id::new(),
        email,
        password,
        display_name: display_name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty()),
        phone: None,
        is_admin,
        is_affiliate: false,
        video_tokens: None,
        created_at: now,
    };
    log::debug!("Creating new user {}", user.id);
    repo.create_user(&user)?;
    if is_admin {
        log::info!("Registered {} as the first admin", user.email);
    }
    Ok(user)
}
