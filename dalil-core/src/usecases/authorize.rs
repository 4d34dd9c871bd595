use super::prelude::*;

/// How a user is related to a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceAccess {
    Owner,
    Admin,
    Employee(Permission),
}

pub fn authorize_admin(user: &UserProfile) -> Result<()> {
    if user.is_admin {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

/// Owners and admins always pass, employees
/// only with at least the required permission.
pub fn authorize_place_access<R>(
    repo: &R,
    user: &UserProfile,
    place: &Place,
    min_permission: Permission,
) -> Result<PlaceAccess>
where
    R: EmployeeRepo + ?Sized,
{
    if place.is_owned_by(&user.id) {
        return Ok(PlaceAccess::Owner);
    }
    if user.is_admin {
        return Ok(PlaceAccess::Admin);
    }
    match repo.try_get_employee(place.id.as_str(), user.id.as_str())? {
        Some(employee) if employee.permission >= min_permission => {
            Ok(PlaceAccess::Employee(employee.permission))
        }
        _ => Err(Error::Forbidden),
    }
}

/// Only the owner of the place or an admin.
pub fn authorize_place_owner(user: &UserProfile, place: &Place) -> Result<PlaceAccess> {
    if place.is_owned_by(&user.id) {
        Ok(PlaceAccess::Owner)
    } else if user.is_admin {
        Ok(PlaceAccess::Admin)
    } else {
        Err(Error::Forbidden)
    }
}

/// Whether the user may see inactive content of the place.
pub fn is_privileged<R>(repo: &R, user: Option<&UserProfile>, place: &Place) -> Result<bool>
where
    R: EmployeeRepo + ?Sized,
{
    let Some(user) = user else {
        return Ok(false);
    };
    match authorize_place_access(repo, user, place, Permission::Basic) {
        Ok(_) => Ok(true),
        Err(Error::Forbidden) => Ok(false),
        Err(err) => Err(err),
    }
}
