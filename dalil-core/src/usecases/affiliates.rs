use super::{authorize::authorize_admin, prelude::*};
use crate::util::validate::{is_valid_code, normalize_code};

#[derive(Debug, Clone)]
pub struct NewAffiliate {
    pub user_id: String,
    pub code: String,
    pub commission_percent: i64,
    pub discount_percent: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct AffiliateUpdate {
    pub commission_percent: i64,
    pub discount_percent: i64,
}

/// Normalize a new code and ensure that it is neither
/// used by an affiliate nor by a discount code.
pub fn check_new_code<R>(repo: &R, code: &str) -> Result<String>
where
    R: AffiliateRepo + DiscountCodeRepo + ?Sized,
{
    let code = normalize_code(code);
    if !is_valid_code(&code) {
        return Err(Error::InvalidCode);
    }
    if repo.try_get_affiliate_by_code(&code)?.is_some()
        || repo.try_get_discount_code_by_code(&code)?.is_some()
    {
        return Err(Error::CodeExists);
    }
    Ok(code)
}

pub fn create_affiliate<R>(
    repo: &R,
    account: &UserProfile,
    new_affiliate: NewAffiliate,
    now: Timestamp,
) -> Result<Affiliate>
where
    R: UserRepo + AffiliateRepo + DiscountCodeRepo,
{
    authorize_admin(account)?;
    let NewAffiliate {
        user_id,
        code,
        commission_percent,
        discount_percent,
    } = new_affiliate;
    let commission_percent = Percent::try_from(commission_percent)?;
    let discount_percent = Percent::try_from(discount_percent)?;
    let code = check_new_code(repo, &code)?;
    let mut user = repo
        .get_user(&user_id)
        .map_err(|err| match err {
            RepoError::NotFound => Error::UserDoesNotExist,
            err => err.into(),
        })?;
    let affiliate = Affiliate {
        id: Id::new(),
        user_id: user.id.clone(),
        code,
        commission_percent,
        discount_percent,
        usage_count: 0,
        is_active: true,
        created_at: now,
    };
    repo.create_affiliate(&affiliate)?;
    if !user.is_affiliate {
        user.is_affiliate = true;
        repo.update_user(&user)?;
    }
    log::info!("Created affiliate code {} for user {}", affiliate.code, user.id);
    Ok(affiliate)
}

pub fn update_affiliate<R>(
    repo: &R,
    account: &UserProfile,
    id: &str,
    update: AffiliateUpdate,
) -> Result<Affiliate>
where
    R: AffiliateRepo,
{
    authorize_admin(account)?;
    let mut affiliate = repo.get_affiliate(id)?;
    affiliate.commission_percent = Percent::try_from(update.commission_percent)?;
    affiliate.discount_percent = Percent::try_from(update.discount_percent)?;
    repo.update_affiliate(&affiliate)?;
    Ok(affiliate)
}

pub fn set_affiliate_active<R>(
    repo: &R,
    account: &UserProfile,
    id: &str,
    active: bool,
) -> Result<Affiliate>
where
    R: AffiliateRepo,
{
    authorize_admin(account)?;
    let mut affiliate = repo.get_affiliate(id)?;
    affiliate.is_active = active;
    repo.update_affiliate(&affiliate)?;
    Ok(affiliate)
}

pub fn all_affiliates<R>(repo: &R, account: &UserProfile) -> Result<Vec<Affiliate>>
where
    R: AffiliateRepo,
{
    authorize_admin(account)?;
    Ok(repo.all_affiliates()?)
}
