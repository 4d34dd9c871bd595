use super::*;
use crate::adapters::csv::PlaceRecord;

#[get("/admin/users?<offset>&<limit>")]
pub fn get_users(
    db: sqlite::Connections,
    account: Account,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    let admin = account.user(&db)?;
    let users = usecases::all_users(&db, &admin, &Pagination { offset, limit })?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[put("/admin/users/<id>/flags", format = "application/json", data = "<flags>")]
pub fn put_user_flags(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    flags: JsonResult<json::UserFlags>,
) -> Result<json::User> {
    let flags = from_json::user_flags(flags?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let user = flows::change_user_flags(&db, &admin, id, flags)?;
    Ok(Json(user.into()))
}

#[get("/admin/stats")]
pub fn get_stats(db: sqlite::Connections, account: Account) -> Result<json::Stats> {
    let db = db.shared()?;
    let admin = account.user(&db)?;
    let stats = usecases::stats(&db, &admin, Timestamp::now())?;
    Ok(Json(to_json::stats(stats)))
}

#[put("/admin/places/<id>/active", format = "application/json", data = "<flag>")]
pub fn put_place_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    flag: JsonResult<json::ActiveFlag>,
) -> Result<json::Place> {
    let json::ActiveFlag { is_active } = flag?.into_inner();
    let admin = account.user(&db.shared()?)?;
    usecases::authorize_admin(&admin)?;
    let place = flows::set_place_active(&db, &admin, id, is_active)?;
    Ok(Json(place.into()))
}

#[get("/admin/export/places.csv")]
pub fn get_places_csv(
    db: sqlite::Connections,
    account: Account,
) -> result::Result<(ContentType, String), ApiError> {
    let places = {
        let db = db.shared()?;
        let admin = account.user(&db)?;
        usecases::all_places(&db, &admin)?
    };
    debug!("Exporting {} places", places.len());
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in places.into_iter().map(PlaceRecord::from) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok((ContentType::CSV, data))
}

/// Including inactive packages
#[get("/admin/packages")]
pub fn get_packages(db: sqlite::Connections, account: Account) -> Result<Vec<json::Package>> {
    let db = db.shared()?;
    let admin = account.user(&db)?;
    let packages = usecases::all_packages(&db, &admin)?;
    Ok(Json(packages.into_iter().map(Into::into).collect()))
}

#[post("/admin/packages", format = "application/json", data = "<package>")]
pub fn post_package(
    db: sqlite::Connections,
    account: Account,
    package: JsonResult<json::NewPackage>,
) -> Result<json::Package> {
    let package = from_json::new_package(package?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let package = flows::create_package(&db, &admin, package)?;
    Ok(Json(package.into()))
}

#[put("/admin/packages/<id>", format = "application/json", data = "<package>")]
pub fn put_package(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    package: JsonResult<json::NewPackage>,
) -> Result<json::Package> {
    let package = from_json::new_package(package?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let package = flows::update_package(&db, &admin, id, package)?;
    Ok(Json(package.into()))
}

#[put("/admin/packages/<id>/active", format = "application/json", data = "<flag>")]
pub fn put_package_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    flag: JsonResult<json::ActiveFlag>,
) -> Result<json::Package> {
    let json::ActiveFlag { is_active } = flag?.into_inner();
    let admin = account.user(&db.shared()?)?;
    let package = flows::set_package_active(&db, &admin, id, is_active)?;
    Ok(Json(package.into()))
}
