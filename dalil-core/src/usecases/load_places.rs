use super::{authorize::is_privileged, prelude::*};

/// Load a single place.
///
/// Inactive places are only visible to the owner,
/// employees and admins.
pub fn get_place<R>(repo: &R, viewer: Option<&UserProfile>, id: &str) -> Result<Place>
where
    R: PlaceRepo + EmployeeRepo,
{
    let place = repo.get_place(id)?;
    if !place.is_active && !is_privileged(repo, viewer, &place)? {
        return Err(RepoError::NotFound.into());
    }
    Ok(place)
}

pub fn places_of_owner<R>(repo: &R, owner: &UserProfile) -> Result<Vec<Place>>
where
    R: PlaceRepo,
{
    Ok(repo.places_of_owner(owner.id.as_str())?)
}

/// Places the user works for.
pub fn places_of_employee<R>(repo: &R, user: &UserProfile) -> Result<Vec<(Place, Permission)>>
where
    R: PlaceRepo + EmployeeRepo,
{
    repo.employments_of_user(user.id.as_str())?
        .into_iter()
        .map(|e| Ok((repo.get_place(e.place_id.as_str())?, e.permission)))
        .collect()
}

pub fn record_place_view<R>(repo: &R, id: &str, now: Timestamp) -> Result<PlaceViews>
where
    R: PlaceRepo,
{
    Ok(repo.record_place_view(id, now)?)
}

pub fn search_places<R>(repo: &R, query: &PlaceQuery) -> Result<Vec<Place>>
where
    R: PlaceRepo,
{
    if query.limit == Some(0) {
        return Err(Error::InvalidLimit);
    }
    Ok(repo.search_places(query)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dalil_entities::builders::*;

    #[test]
    fn hide_inactive_places_from_strangers() {
        let db = MockDb::default();
        let owner = UserProfile::build().id("o").finish();
        let stranger = UserProfile::build().id("s").finish();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").owner("o").active(false).finish());
        assert!(get_place(&db, Some(&owner), "p").is_ok());
        assert!(get_place(&db, Some(&stranger), "p")
            .unwrap_err()
            .is_not_found());
        assert!(get_place(&db, None, "p").unwrap_err().is_not_found());
    }

    #[test]
    fn count_views_per_day() {
        let db = MockDb::default();
        db.places.borrow_mut().push(Place::build().id("p").finish());
        let day = 24 * 60 * 60;
        record_place_view(&db, "p", Timestamp::from_secs(10)).unwrap();
        let views = record_place_view(&db, "p", Timestamp::from_secs(20)).unwrap();
        assert_eq!(2, views.total);
        assert_eq!(2, views.today);
        let views = record_place_view(&db, "p", Timestamp::from_secs(day + 1)).unwrap();
        assert_eq!(3, views.total);
        assert_eq!(1, views.today);
        assert_eq!(1, views.day);
        assert!(record_place_view(&db, "missing", Timestamp::now())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn search_active_places_by_text() {
        let db = MockDb::default();
        db.places.borrow_mut().extend([
            Place::build().name("Damascus Sweets").finish(),
            Place::build()
                .name("Bakery")
                .description("Fresh SWEETS daily")
                .finish(),
            Place::build().name("Closed sweets").active(false).finish(),
            Place::build().name("Hardware").finish(),
        ]);
        let query = PlaceQuery {
            text: Some("sweets".into()),
            ..Default::default()
        };
        assert_eq!(2, search_places(&db, &query).unwrap().len());
        let query = PlaceQuery {
            include_inactive: true,
            ..query
        };
        assert_eq!(3, search_places(&db, &query).unwrap().len());
        let query = PlaceQuery {
            limit: Some(0),
            ..query
        };
        assert!(matches!(
            search_places(&db, &query),
            Err(Error::InvalidLimit)
        ));
    }
}
