use super::{authorize::authorize_place_owner, prelude::*};

pub fn request_employment<R>(
    repo: &R,
    user: &UserProfile,
    place_id: &str,
    note: Option<String>,
    now: Timestamp,
) -> Result<(EmployeeRequest, Place)>
where
    R: PlaceRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    if place.is_owned_by(&user.id) {
        return Err(Error::OwnerCannotBeEmployee);
    }
    if repo
        .try_get_employee(place_id, user.id.as_str())?
        .is_some()
    {
        return Err(Error::AlreadyEmployee);
    }
    if repo
        .employee_requests_of_user(user.id.as_str())?
        .iter()
        .any(|r| r.place_id == place.id && r.is_pending())
    {
        return Err(Error::RequestPending);
    }
    let request = EmployeeRequest {
        id: Id::new(),
        place_id: place.id.clone(),
        user_id: user.id.clone(),
        note: note.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty()),
        status: RequestStatus::Pending,
        created_at: now,
        decided_at: None,
    };
    repo.create_employee_request(&request)?;
    Ok((request, place))
}

fn load_pending_request<R>(
    repo: &R,
    user: &UserProfile,
    request_id: &str,
) -> Result<(EmployeeRequest, Place)>
where
    R: PlaceRepo + EmployeeRepo,
{
    let request = repo.get_employee_request(request_id)?;
    let place = repo.get_place(request.place_id.as_str())?;
    authorize_place_owner(user, &place)?;
    if !request.is_pending() {
        return Err(Error::RequestAlreadyDecided);
    }
    Ok((request, place))
}

/// Accept a pending request and employ the requesting user.
///
/// Should run within a single transaction.
pub fn accept_employee_request<R>(
    repo: &R,
    user: &UserProfile,
    request_id: &str,
    permission: Permission,
    now: Timestamp,
) -> Result<(PlaceEmployee, EmployeeRequest, Place)>
where
    R: PlaceRepo + EmployeeRepo,
{
    let (mut request, place) = load_pending_request(repo, user, request_id)?;
    request.status = RequestStatus::Accepted;
    request.decided_at = Some(now);
    repo.update_employee_request(&request)?;
    let employee = PlaceEmployee {
        id: Id::new(),
        place_id: request.place_id.clone(),
        user_id: request.user_id.clone(),
        permission,
        created_at: now,
    };
    repo.create_employee(&employee)?;
    log::info!(
        "User {} is now employed at place {} with permission {}",
        employee.user_id,
        employee.place_id,
        employee.permission
    );
    Ok((employee, request, place))
}

pub fn reject_employee_request<R>(
    repo: &R,
    user: &UserProfile,
    request_id: &str,
    now: Timestamp,
) -> Result<(EmployeeRequest, Place)>
where
    R: PlaceRepo + EmployeeRepo,
{
    let (mut request, place) = load_pending_request(repo, user, request_id)?;
    request.status = RequestStatus::Rejected;
    request.decided_at = Some(now);
    repo.update_employee_request(&request)?;
    Ok((request, place))
}

fn load_managed_employee<R>(repo: &R, user: &UserProfile, employee_id: &str) -> Result<PlaceEmployee>
where
    R: PlaceRepo + EmployeeRepo,
{
    let employee = repo.get_employee(employee_id)?;
    let place = repo.get_place(employee.place_id.as_str())?;
    authorize_place_owner(user, &place)?;
    Ok(employee)
}

pub fn remove_employee<R>(repo: &R, user: &UserProfile, employee_id: &str) -> Result<()>
where
    R: PlaceRepo + EmployeeRepo,
{
    let employee = load_managed_employee(repo, user, employee_id)?;
    log::info!(
        "Removing employee {} from place {}",
        employee.user_id,
        employee.place_id
    );
    repo.delete_employee(employee_id)?;
    Ok(())
}

pub fn change_employee_permission<R>(
    repo: &R,
    user: &UserProfile,
    employee_id: &str,
    permission: Permission,
) -> Result<PlaceEmployee>
where
    R: PlaceRepo + EmployeeRepo,
{
    let mut employee = load_managed_employee(repo, user, employee_id)?;
    employee.permission = permission;
    repo.update_employee(&employee)?;
    Ok(employee)
}

pub fn employees_of_place<R>(
    repo: &R,
    user: &UserProfile,
    place_id: &str,
) -> Result<Vec<PlaceEmployee>>
where
    R: PlaceRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    authorize_place_owner(user, &place)?;
    Ok(repo.employees_of_place(place_id)?)
}

pub fn pending_requests_of_place<R>(
    repo: &R,
    user: &UserProfile,
    place_id: &str,
) -> Result<Vec<EmployeeRequest>>
where
    R: PlaceRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    authorize_place_owner(user, &place)?;
    Ok(repo
        .employee_requests_of_place(place_id)?
        .into_iter()
        .filter(EmployeeRequest::is_pending)
        .collect())
}

pub fn employment_requests_of_user<R>(repo: &R, user: &UserProfile) -> Result<Vec<EmployeeRequest>>
where
    R: EmployeeRepo,
{
    Ok(repo.employee_requests_of_user(user.id.as_str())?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dalil_entities::builders::*;

    fn setup() -> (MockDb, UserProfile, UserProfile) {
        let db = MockDb::default();
        let owner = UserProfile::build().id("o").finish();
        let user = UserProfile::build().id("u").finish();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").owner("o").finish());
        (db, owner, user)
    }

    #[test]
    fn request_and_accept() {
        let (db, owner, user) = setup();
        let now = Timestamp::from_secs(1);
        let (request, _) = request_employment(&db, &user, "p", Some(" hi ".into()), now).unwrap();
        assert_eq!(Some("hi"), request.note.as_deref());
        assert_eq!(1, pending_requests_of_place(&db, &owner, "p").unwrap().len());

        assert!(matches!(
            accept_employee_request(&db, &user, request.id.as_str(), Permission::Full, now),
            Err(Error::Forbidden)
        ));
        let (employee, request, _) = accept_employee_request(
            &db,
            &owner,
            request.id.as_str(),
            Permission::MessagesPosts,
            Timestamp::from_secs(2),
        )
        .unwrap();
        assert_eq!(RequestStatus::Accepted, request.status);
        assert_eq!(Some(Timestamp::from_secs(2)), request.decided_at);
        assert_eq!(Permission::MessagesPosts, employee.permission);
        assert!(pending_requests_of_place(&db, &owner, "p").unwrap().is_empty());
        assert_eq!(1, employees_of_place(&db, &owner, "p").unwrap().len());

        assert!(matches!(
            accept_employee_request(&db, &owner, request.id.as_str(), Permission::Full, now),
            Err(Error::RequestAlreadyDecided)
        ));
        assert!(matches!(
            request_employment(&db, &user, "p", None, now),
            Err(Error::AlreadyEmployee)
        ));
    }

    #[test]
    fn invalid_requests() {
        let (db, owner, user) = setup();
        let now = Timestamp::now();
        assert!(matches!(
            request_employment(&db, &owner, "p", None, now),
            Err(Error::OwnerCannotBeEmployee)
        ));
        request_employment(&db, &user, "p", None, now).unwrap();
        assert!(matches!(
            request_employment(&db, &user, "p", None, now),
            Err(Error::RequestPending)
        ));
    }

    #[test]
    fn reject_then_request_again() {
        let (db, owner, user) = setup();
        let now = Timestamp::now();
        let (request, _) = request_employment(&db, &user, "p", None, now).unwrap();
        let (rejected, _) = reject_employee_request(&db, &owner, request.id.as_str(), now).unwrap();
        assert_eq!(RequestStatus::Rejected, rejected.status);
        assert!(request_employment(&db, &user, "p", None, now).is_ok());
        assert_eq!(2, employment_requests_of_user(&db, &user).unwrap().len());
    }

    #[test]
    fn change_permission_and_remove() {
        let (db, owner, user) = setup();
        let now = Timestamp::now();
        let (request, _) = request_employment(&db, &user, "p", None, now).unwrap();
        let (employee, _, _) =
            accept_employee_request(&db, &owner, request.id.as_str(), Permission::Basic, now)
                .unwrap();
        let changed =
            change_employee_permission(&db, &owner, employee.id.as_str(), Permission::Full)
                .unwrap();
        assert_eq!(Permission::Full, changed.permission);
        assert!(matches!(
            remove_employee(&db, &user, employee.id.as_str()),
            Err(Error::Forbidden)
        ));
        remove_employee(&db, &owner, employee.id.as_str()).unwrap();
        assert!(employees_of_place(&db, &owner, "p").unwrap().is_empty());
    }
}
