use num_traits::{FromPrimitive, ToPrimitive};

use super::*;

fn load_status(value: i16) -> Result<RequestStatus> {
    RequestStatus::from_i16(value).ok_or_else(|| anyhow!("Invalid request status: {value}").into())
}

fn load_permission(value: i16) -> Result<Permission> {
    Permission::from_i16(value).ok_or_else(|| anyhow!("Invalid permission: {value}").into())
}

fn store_status(status: RequestStatus) -> i16 {
    status.to_i16().unwrap_or_default()
}

fn store_permission(permission: Permission) -> i16 {
    permission.to_i16().unwrap_or_default()
}

impl<'a> From<&'a EmployeeRequest> for models::NewEmployeeRequest<'a> {
    fn from(r: &'a EmployeeRequest) -> Self {
        Self {
            id: r.id.as_str(),
            place_id: r.place_id.as_str(),
            user_id: r.user_id.as_str(),
            note: r.note.as_deref(),
            status: store_status(r.status),
            created_at: r.created_at.as_millis(),
            decided_at: r.decided_at.map(Timestamp::as_millis),
        }
    }
}

fn load_request(r: models::EmployeeRequestEntity) -> Result<EmployeeRequest> {
    let models::EmployeeRequestEntity {
        id,
        place_id,
        user_id,
        note,
        status,
        created_at,
        decided_at,
    } = r;
    Ok(EmployeeRequest {
        id: id.into(),
        place_id: place_id.into(),
        user_id: user_id.into(),
        note,
        status: load_status(status)?,
        created_at: Timestamp::from_millis(created_at),
        decided_at: decided_at.map(Timestamp::from_millis),
    })
}

impl<'a> From<&'a PlaceEmployee> for models::NewPlaceEmployee<'a> {
    fn from(e: &'a PlaceEmployee) -> Self {
        Self {
            id: e.id.as_str(),
            place_id: e.place_id.as_str(),
            user_id: e.user_id.as_str(),
            permission: store_permission(e.permission),
            created_at: e.created_at.as_millis(),
        }
    }
}

fn load_employee(e: models::PlaceEmployeeEntity) -> Result<PlaceEmployee> {
    let models::PlaceEmployeeEntity {
        id,
        place_id,
        user_id,
        permission,
        created_at,
    } = e;
    Ok(PlaceEmployee {
        id: id.into(),
        place_id: place_id.into(),
        user_id: user_id.into(),
        permission: load_permission(permission)?,
        created_at: Timestamp::from_millis(created_at),
    })
}

impl_repo!(
    EmployeeRepo,
    fn create_employee_request(&self, request: &EmployeeRequest) -> Result<()> {
        create_employee_request(&mut self.conn.borrow_mut(), request)
    }
    fn update_employee_request(&self, request: &EmployeeRequest) -> Result<()> {
        update_employee_request(&mut self.conn.borrow_mut(), request)
    }
    fn get_employee_request(&self, id: &str) -> Result<EmployeeRequest> {
        get_employee_request(&mut self.conn.borrow_mut(), id)
    }
    fn employee_requests_of_place(&self, place_id: &str) -> Result<Vec<EmployeeRequest>> {
        employee_requests_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn employee_requests_of_user(&self, user_id: &str) -> Result<Vec<EmployeeRequest>> {
        employee_requests_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn create_employee(&self, employee: &PlaceEmployee) -> Result<()> {
        create_employee(&mut self.conn.borrow_mut(), employee)
    }
    fn update_employee(&self, employee: &PlaceEmployee) -> Result<()> {
        update_employee(&mut self.conn.borrow_mut(), employee)
    }
    fn delete_employee(&self, id: &str) -> Result<()> {
        delete_employee(&mut self.conn.borrow_mut(), id)
    }
    fn get_employee(&self, id: &str) -> Result<PlaceEmployee> {
        get_employee(&mut self.conn.borrow_mut(), id)
    }
    fn employees_of_place(&self, place_id: &str) -> Result<Vec<PlaceEmployee>> {
        employees_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn employments_of_user(&self, user_id: &str) -> Result<Vec<PlaceEmployee>> {
        employments_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn try_get_employee(&self, place_id: &str, user_id: &str) -> Result<Option<PlaceEmployee>> {
        try_get_employee(&mut self.conn.borrow_mut(), place_id, user_id)
    }
);

fn create_employee_request(conn: &mut SqliteConnection, request: &EmployeeRequest) -> Result<()> {
    let new_request = models::NewEmployeeRequest::from(request);
    diesel::insert_into(schema::employee_requests::table)
        .values(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_employee_request(conn: &mut SqliteConnection, request: &EmployeeRequest) -> Result<()> {
    use schema::employee_requests::dsl;
    let new_request = models::NewEmployeeRequest::from(request);
    let count = diesel::update(dsl::employee_requests.filter(dsl::id.eq(new_request.id)))
        .set(&new_request)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_employee_request(conn: &mut SqliteConnection, id: &str) -> Result<EmployeeRequest> {
    use schema::employee_requests::dsl;
    let entity = dsl::employee_requests
        .filter(dsl::id.eq(id))
        .first::<models::EmployeeRequestEntity>(conn)
        .map_err(from_diesel_err)?;
    load_request(entity)
}

fn employee_requests_of_place(
    conn: &mut SqliteConnection,
    place_id: &str,
) -> Result<Vec<EmployeeRequest>> {
    use schema::employee_requests::dsl;
    dsl::employee_requests
        .filter(dsl::place_id.eq(place_id))
        .order_by(dsl::created_at.desc())
        .load::<models::EmployeeRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_request)
        .collect()
}

fn employee_requests_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<EmployeeRequest>> {
    use schema::employee_requests::dsl;
    dsl::employee_requests
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::created_at.desc())
        .load::<models::EmployeeRequestEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_request)
        .collect()
}

fn create_employee(conn: &mut SqliteConnection, employee: &PlaceEmployee) -> Result<()> {
    let new_employee = models::NewPlaceEmployee::from(employee);
    diesel::insert_into(schema::place_employees::table)
        .values(&new_employee)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_employee(conn: &mut SqliteConnection, employee: &PlaceEmployee) -> Result<()> {
    use schema::place_employees::dsl;
    let new_employee = models::NewPlaceEmployee::from(employee);
    let count = diesel::update(dsl::place_employees.filter(dsl::id.eq(new_employee.id)))
        .set(&new_employee)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_employee(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::place_employees::dsl;
    let count = diesel::delete(dsl::place_employees.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_employee(conn: &mut SqliteConnection, id: &str) -> Result<PlaceEmployee> {
    use schema::place_employees::dsl;
    let entity = dsl::place_employees
        .filter(dsl::id.eq(id))
        .first::<models::PlaceEmployeeEntity>(conn)
        .map_err(from_diesel_err)?;
    load_employee(entity)
}

fn employees_of_place(conn: &mut SqliteConnection, place_id: &str) -> Result<Vec<PlaceEmployee>> {
    use schema::place_employees::dsl;
    dsl::place_employees
        .filter(dsl::place_id.eq(place_id))
        .order_by(dsl::created_at)
        .load::<models::PlaceEmployeeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_employee)
        .collect()
}

fn employments_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<PlaceEmployee>> {
    use schema::place_employees::dsl;
    dsl::place_employees
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::created_at)
        .load::<models::PlaceEmployeeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_employee)
        .collect()
}

fn try_get_employee(
    conn: &mut SqliteConnection,
    place_id: &str,
    user_id: &str,
) -> Result<Option<PlaceEmployee>> {
    use schema::place_employees::dsl;
    dsl::place_employees
        .filter(dsl::place_id.eq(place_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::PlaceEmployeeEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_employee)
        .transpose()
}
