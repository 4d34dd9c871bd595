use super::{authorize::authorize_admin, prelude::*};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub users: usize,
    pub places: usize,
    pub active_places: usize,
    pub products: usize,
    pub active_subscriptions: usize,
}

pub fn stats<R>(repo: &R, account: &UserProfile, now: Timestamp) -> Result<Stats>
where
    R: Db,
{
    authorize_admin(account)?;
    Ok(Stats {
        users: repo.count_users()?,
        places: repo.count_places(false)?,
        active_places: repo.count_places(true)?,
        products: repo.count_products()?,
        active_subscriptions: repo.count_active_subscriptions(now)?,
    })
}

pub fn all_users<R>(
    repo: &R,
    account: &UserProfile,
    pagination: &Pagination,
) -> Result<Vec<UserProfile>>
where
    R: UserRepo,
{
    authorize_admin(account)?;
    Ok(repo.all_users(pagination)?)
}

pub fn all_places<R>(repo: &R, account: &UserProfile) -> Result<Vec<Place>>
where
    R: PlaceRepo,
{
    authorize_admin(account)?;
    Ok(repo.all_places()?)
}
