use super::*;

#[post(
    "/places/<place_id>/employee-requests",
    format = "application/json",
    data = "<request>"
)]
pub fn post_employee_request(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    place_id: &str,
    request: JsonResult<json::NewEmployeeRequest>,
) -> Result<json::EmployeeRequest> {
    let json::NewEmployeeRequest { note } = request?.into_inner();
    let user = account.user(&db.shared()?)?;
    let (request, _) = flows::request_employment(&db, &*notify.0, &user, place_id, note)?;
    Ok(Json(request.into()))
}

#[get("/places/<place_id>/employee-requests")]
pub fn get_employee_requests_of_place(
    db: sqlite::Connections,
    account: Account,
    place_id: &str,
) -> Result<Vec<json::EmployeeRequest>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let requests = usecases::pending_requests_of_place(&db, &user, place_id)?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[get("/users/current/employee-requests")]
pub fn get_my_employee_requests(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::EmployeeRequest>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let requests = usecases::employment_requests_of_user(&db, &user)?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[post(
    "/employee-requests/<id>/accept",
    format = "application/json",
    data = "<update>"
)]
pub fn post_accept_employee_request(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
    update: JsonResult<json::PermissionUpdate>,
) -> Result<json::PlaceEmployee> {
    let json::PermissionUpdate { permission } = update?.into_inner();
    let user = account.user(&db.shared()?)?;
    let employee =
        flows::accept_employee_request(&db, &*notify.0, &user, id, permission.into())?;
    Ok(Json(employee.into()))
}

#[post("/employee-requests/<id>/reject")]
pub fn post_reject_employee_request(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: &str,
) -> Result<json::EmployeeRequest> {
    let user = account.user(&db.shared()?)?;
    let request = flows::reject_employee_request(&db, &*notify.0, &user, id)?;
    Ok(Json(request.into()))
}

#[get("/places/<place_id>/employees")]
pub fn get_employees_of_place(
    db: sqlite::Connections,
    account: Account,
    place_id: &str,
) -> Result<Vec<json::PlaceEmployee>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let employees = usecases::employees_of_place(&db, &user, place_id)?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

#[put("/employees/<id>/permission", format = "application/json", data = "<update>")]
pub fn put_employee_permission(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::PermissionUpdate>,
) -> Result<json::PlaceEmployee> {
    let json::PermissionUpdate { permission } = update?.into_inner();
    let user = account.user(&db.shared()?)?;
    let employee = flows::change_employee_permission(&db, &user, id, permission.into())?;
    Ok(Json(employee.into()))
}

#[delete("/employees/<id>")]
pub fn delete_employee(db: sqlite::Connections, account: Account, id: &str) -> StatusResult {
    let user = account.user(&db.shared()?)?;
    flows::remove_employee(&db, &user, id)?;
    Ok(Status::NoContent)
}

/// The places the current user works for.
#[get("/users/current/employments")]
pub fn get_my_employments(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::EmployeePlace>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let places = usecases::places_of_employee(&db, &user)?;
    Ok(Json(
        places.into_iter().map(to_json::employee_place).collect(),
    ))
}
