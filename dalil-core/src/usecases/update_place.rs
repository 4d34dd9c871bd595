use super::{
    authorize::{authorize_place_access, authorize_place_owner},
    create_place::{apply_place_fields, NewPlace},
    prelude::*,
};

pub type UpdatePlace = NewPlace;

pub fn update_place<R>(
    repo: &R,
    user: &UserProfile,
    id: &str,
    update: UpdatePlace,
) -> Result<Place>
where
    R: PlaceRepo + EmployeeRepo,
{
    let old_place = repo.get_place(id)?;
    authorize_place_access(repo, user, &old_place, Permission::Full)?;
    let place = apply_place_fields(old_place, update)?;
    repo.update_place(&place)?;
    Ok(place)
}

pub fn set_place_active<R>(repo: &R, user: &UserProfile, id: &str, active: bool) -> Result<Place>
where
    R: PlaceRepo,
{
    let mut place = repo.get_place(id)?;
    authorize_place_owner(user, &place)?;
    if place.is_active != active {
        log::info!("Setting place {id} active = {active}");
        repo.set_place_active(id, active)?;
        place.is_active = active;
    }
    Ok(place)
}

pub fn toggle_place_active<R>(repo: &R, user: &UserProfile, id: &str) -> Result<Place>
where
    R: PlaceRepo,
{
    let place = repo.get_place(id)?;
    set_place_active(repo, user, id, !place.is_active)
}
