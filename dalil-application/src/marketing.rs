use super::*;

pub fn create_affiliate(
    connections: &sqlite::Connections,
    account: &UserProfile,
    new_affiliate: usecases::NewAffiliate,
) -> Result<Affiliate> {
    let affiliate = connections.exclusive()?.transaction(|conn| {
        usecases::create_affiliate(conn, account, new_affiliate, Timestamp::now()).map_err(
            |err| {
                log::warn!("Failed to create affiliate: {err}");
                err
            },
        )
    })?;
    info!(
        "Created affiliate code {} for user {}",
        affiliate.code, affiliate.user_id
    );
    Ok(affiliate)
}

pub fn update_affiliate(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
    update: usecases::AffiliateUpdate,
) -> Result<Affiliate> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_affiliate(conn, account, id, update))?)
}

pub fn set_affiliate_active(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
    active: bool,
) -> Result<Affiliate> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::set_affiliate_active(conn, account, id, active))?)
}

pub fn create_discount_code(
    connections: &sqlite::Connections,
    account: &UserProfile,
    new_code: usecases::NewDiscountCode,
) -> Result<DiscountCode> {
    let code = connections.exclusive()?.transaction(|conn| {
        usecases::create_discount_code(conn, account, new_code, Timestamp::now()).map_err(
            |err| {
                log::warn!("Failed to create discount code: {err}");
                err
            },
        )
    })?;
    info!("Created discount code {} ({}%)", code.code, code.percent);
    Ok(code)
}

pub fn update_discount_code(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
    update: usecases::DiscountCodeUpdate,
) -> Result<DiscountCode> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_discount_code(conn, account, id, update))?)
}

pub fn set_discount_code_active(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
    active: bool,
) -> Result<DiscountCode> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::set_discount_code_active(conn, account, id, active))?)
}

pub fn toggle_discount_code(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
) -> Result<DiscountCode> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::toggle_discount_code(conn, account, id))?)
}
