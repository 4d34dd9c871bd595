use super::{authorize::authorize_admin, prelude::*};

#[derive(Debug, Clone, Copy, Default)]
pub struct UserFlags {
    pub is_admin: Option<bool>,
    pub is_affiliate: Option<bool>,
}

pub fn change_user_flags<R>(
    repo: &R,
    account: &UserProfile,
    user_id: &str,
    flags: UserFlags,
) -> Result<UserProfile>
where
    R: UserRepo,
{
    authorize_admin(account)?;
    if account.id.as_str() == user_id && flags.is_admin == Some(false) {
        return Err(Error::RevokeOwnAdmin);
    }
    let mut user = repo.get_user(user_id)?;
    if let Some(is_admin) = flags.is_admin {
        user.is_admin = is_admin;
    }
    if let Some(is_affiliate) = flags.is_affiliate {
        user.is_affiliate = is_affiliate;
    }
    log::info!(
        "Changing flags of user {}: admin = {}, affiliate = {}",
        user.id,
        user.is_admin,
        user.is_affiliate
    );
    repo.update_user(&user)?;
    Ok(user)
}
