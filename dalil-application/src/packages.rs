use super::*;

pub fn create_package(
    connections: &sqlite::Connections,
    account: &UserProfile,
    new_package: usecases::NewPackage,
) -> Result<Package> {
    let package = connections
        .exclusive()?
        .transaction(|conn| usecases::create_package(conn, account, new_package))?;
    info!("Created package {} ({})", package.name, package.id);
    Ok(package)
}

pub fn update_package(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
    fields: usecases::NewPackage,
) -> Result<Package> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_package(conn, account, id, fields).map_err(|err| {
            log::warn!("Failed to update package {id}: {err}");
            err
        })
    })?)
}

pub fn set_package_active(
    connections: &sqlite::Connections,
    account: &UserProfile,
    id: &str,
    active: bool,
) -> Result<Package> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::set_package_active(conn, account, id, active))?)
}
