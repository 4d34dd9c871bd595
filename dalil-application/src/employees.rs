use super::*;

pub fn request_employment(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user: &UserProfile,
    place_id: &str,
    note: Option<String>,
) -> Result<(EmployeeRequest, Place)> {
    let (request, place) = connections.exclusive()?.transaction(|conn| {
        usecases::request_employment(conn, user, place_id, note, Timestamp::now()).map_err(
            |err| {
                log::warn!("User {} could not request employment: {err}", user.id);
                err
            },
        )
    })?;
    notify.notify(NotificationEvent::EmploymentRequested {
        request: &request,
        place: &place,
    });
    Ok((request, place))
}

pub fn accept_employee_request(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user: &UserProfile,
    request_id: &str,
    permission: Permission,
) -> Result<PlaceEmployee> {
    let (employee, request, place) = connections.exclusive()?.transaction(|conn| {
        usecases::accept_employee_request(conn, user, request_id, permission, Timestamp::now())
    })?;
    notify.notify(NotificationEvent::EmploymentDecided {
        request: &request,
        place: &place,
    });
    Ok(employee)
}

pub fn reject_employee_request(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user: &UserProfile,
    request_id: &str,
) -> Result<EmployeeRequest> {
    let (request, place) = connections.exclusive()?.transaction(|conn| {
        usecases::reject_employee_request(conn, user, request_id, Timestamp::now())
    })?;
    notify.notify(NotificationEvent::EmploymentDecided {
        request: &request,
        place: &place,
    });
    Ok(request)
}

pub fn remove_employee(
    connections: &sqlite::Connections,
    user: &UserProfile,
    employee_id: &str,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::remove_employee(conn, user, employee_id))?;
    info!("Removed employee {employee_id}");
    Ok(())
}

pub fn change_employee_permission(
    connections: &sqlite::Connections,
    user: &UserProfile,
    employee_id: &str,
    permission: Permission,
) -> Result<PlaceEmployee> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_employee_permission(conn, user, employee_id, permission)
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn setup() -> (BackendFixture, UserProfile, UserProfile, Place) {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let package = fixture.create_package(&admin, 1);
        let owner = fixture.create_owner("owner@example.com", &package);
        let user = fixture.create_user("user@example.com");
        let place = fixture.create_place(&owner, "Cafe");
        (fixture, owner, user, place)
    }

    #[test]
    fn accept_request_and_notify() {
        let (fixture, owner, user, place) = setup();
        let db = &fixture.db_connections;
        let (request, _) =
            flows::request_employment(db, &fixture.notify, &user, place.id.as_str(), None)
                .unwrap();
        assert!(
            flows::request_employment(db, &fixture.notify, &user, place.id.as_str(), None)
                .is_err()
        );
        let employee = flows::accept_employee_request(
            db,
            &fixture.notify,
            &owner,
            request.id.as_str(),
            Permission::Basic,
        )
        .unwrap();
        assert_eq!(employee.user_id, user.id);
        assert_eq!(
            *fixture.notify.events.borrow(),
            vec![
                format!("requested:{}", user.id),
                format!("decided:{}:accepted", user.id)
            ]
        );

        let employee = flows::change_employee_permission(
            db,
            &owner,
            employee.id.as_str(),
            Permission::Full,
        )
        .unwrap();
        assert_eq!(employee.permission, Permission::Full);
        let places = usecases::places_of_employee(&db.shared().unwrap(), &user).unwrap();
        assert_eq!(places.len(), 1);
    }

    #[test]
    fn owner_cannot_request() {
        let (fixture, owner, _, place) = setup();
        let err = flows::request_employment(
            &fixture.db_connections,
            &fixture.notify,
            &owner,
            place.id.as_str(),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::OwnerCannotBeEmployee))
        ));
    }

    #[test]
    fn decide_only_once() {
        let (fixture, owner, user, place) = setup();
        let db = &fixture.db_connections;
        let (request, _) =
            flows::request_employment(db, &fixture.notify, &user, place.id.as_str(), None)
                .unwrap();
        let request =
            flows::reject_employee_request(db, &fixture.notify, &owner, request.id.as_str())
                .unwrap();
        assert_eq!(request.status, RequestStatus::Rejected);
        assert!(flows::accept_employee_request(
            db,
            &fixture.notify,
            &owner,
            request.id.as_str(),
            Permission::Full,
        )
        .is_err());
    }

    #[test]
    fn only_owner_removes_employees() {
        let (fixture, owner, user, place) = setup();
        let db = &fixture.db_connections;
        let (request, _) =
            flows::request_employment(db, &fixture.notify, &user, place.id.as_str(), None)
                .unwrap();
        let employee = flows::accept_employee_request(
            db,
            &fixture.notify,
            &owner,
            request.id.as_str(),
            Permission::Basic,
        )
        .unwrap();
        assert!(flows::remove_employee(db, &user, employee.id.as_str()).is_err());
        flows::remove_employee(db, &owner, employee.id.as_str()).unwrap();
        assert!(usecases::places_of_employee(&db.shared().unwrap(), &user)
            .unwrap()
            .is_empty());
    }
}
