use super::*;

#[get("/packages")]
pub fn get_packages(db: sqlite::Connections) -> Result<Vec<json::Package>> {
    let packages = usecases::active_packages(&db.shared()?)?;
    Ok(Json(packages.into_iter().map(Into::into).collect()))
}

#[post("/subscriptions", format = "application/json", data = "<subscription>")]
pub fn post_subscription(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    subscription: JsonResult<json::NewSubscription>,
) -> Result<json::Subscription> {
    let json::NewSubscription {
        package_id,
        promo_code,
    } = subscription?.into_inner();
    let user = account.user(&db.shared()?)?;
    let subscription = flows::subscribe(
        &db,
        &*notify.0,
        &user,
        &package_id,
        promo_code.as_deref(),
    )?;
    Ok(Json(subscription.into()))
}

#[get("/users/current/subscription")]
pub fn get_current_subscription(
    db: sqlite::Connections,
    account: Account,
) -> Result<Option<json::ActiveSubscription>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let active = usecases::active_subscription(&db, user.id.as_str(), Timestamp::now())?;
    Ok(Json(active.map(to_json::active_subscription)))
}

#[get("/users/current/subscriptions")]
pub fn get_my_subscriptions(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Subscription>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let subscriptions = usecases::subscriptions_of_user(&db, &user)?;
    Ok(Json(subscriptions.into_iter().map(Into::into).collect()))
}
