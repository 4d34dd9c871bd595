use super::{
    prelude::*,
    promo_codes::{redeem_promo_code, resolve_promo_code, PromoCode},
};

/// The currently valid subscription of a user together with its package.
pub fn active_subscription<R>(
    repo: &R,
    user_id: &str,
    now: Timestamp,
) -> Result<Option<(Subscription, Package)>>
where
    R: SubscriptionRepo + PackageRepo + ?Sized,
{
    let Some(subscription) = repo
        .subscriptions_of_user(user_id)?
        .into_iter()
        .filter(|s| s.is_valid_at(now))
        .max_by_key(|s| s.started_at)
    else {
        return Ok(None);
    };
    let package = repo.get_package(subscription.package_id.as_str())?;
    Ok(Some((subscription, package)))
}

/// The package limits that apply to the places of the given owner.
///
/// Returns `None` for admins who are not restricted by any package.
pub fn package_of_owner<R>(repo: &R, owner_id: &str, now: Timestamp) -> Result<Option<Package>>
where
    R: UserRepo + SubscriptionRepo + PackageRepo + ?Sized,
{
    let owner = repo.get_user(owner_id)?;
    if owner.is_admin {
        return Ok(None);
    }
    active_subscription(repo, owner_id, now)?
        .map(|(_, package)| Some(package))
        .ok_or(Error::NoActiveSubscription)
}

/// Subscribe a user to a package.
///
/// The previous subscription of the user is replaced.
/// Should run within a single transaction.
pub fn subscribe<R>(
    repo: &R,
    user: &UserProfile,
    package_id: &str,
    promo_code: Option<&str>,
    now: Timestamp,
) -> Result<Subscription>
where
    R: SubscriptionRepo + PackageRepo + DiscountCodeRepo + AffiliateRepo,
{
    let package = repo.get_package(package_id)?;
    if !package.is_active {
        return Err(Error::PackageInactive);
    }
    let promo = promo_code
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|code| resolve_promo_code(repo, code, now))
        .transpose()?;
    let percent = promo.as_ref().map(PromoCode::percent).unwrap_or_default();
    let (discount_code, affiliate_code) = match &promo {
        Some(PromoCode::Discount(d)) => (Some(d.code.clone()), None),
        Some(PromoCode::Affiliate(a)) => (None, Some(a.code.clone())),
        None => (None, None),
    };
    if let Some(promo) = promo {
        redeem_promo_code(repo, promo)?;
    }
    for mut previous in repo
        .subscriptions_of_user(user.id.as_str())?
        .into_iter()
        .filter(|s| s.is_active)
    {
        log::debug!("Replacing subscription {} of user {}", previous.id, user.id);
        previous.is_active = false;
        repo.update_subscription(&previous)?;
    }
    let subscription = Subscription {
        id: Id::new(),
        user_id: user.id.clone(),
        package_id: package.id,
        started_at: now,
        expires_at: now.add_days(package.duration_days),
        paid_price: package.price.discounted(percent),
        discount_code,
        affiliate_code,
        is_active: true,
    };
    repo.create_subscription(&subscription)?;
    log::info!(
        "User {} subscribed to package {} until {}",
        user.id,
        subscription.package_id,
        subscription.expires_at
    );
    Ok(subscription)
}

pub fn subscriptions_of_user<R>(repo: &R, user: &UserProfile) -> Result<Vec<Subscription>>
where
    R: SubscriptionRepo,
{
    Ok(repo.subscriptions_of_user(user.id.as_str())?)
}

pub fn expire_subscriptions<R>(repo: &R, now: Timestamp) -> Result<usize>
where
    R: SubscriptionRepo,
{
    let count = repo.expire_subscriptions(now)?;
    if count > 0 {
        log::info!("{count} subscription(s) expired");
    }
    Ok(count)
}
