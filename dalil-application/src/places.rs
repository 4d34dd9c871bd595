use super::*;

pub fn create_place(
    connections: &sqlite::Connections,
    owner: &UserProfile,
    new_place: usecases::NewPlace,
) -> Result<Place> {
    let place = connections.exclusive()?.transaction(|conn| {
        usecases::create_place(conn, owner, new_place, Timestamp::now()).map_err(|err| {
            log::warn!("Failed to create place of user {}: {err}", owner.id);
            err
        })
    })?;
    info!("Created place {} of user {}", place.id, owner.id);
    Ok(place)
}

pub fn update_place(
    connections: &sqlite::Connections,
    user: &UserProfile,
    id: &str,
    update: usecases::UpdatePlace,
) -> Result<Place> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::update_place(conn, user, id, update).map_err(|err| {
            log::warn!("Failed to update place {id}: {err}");
            err
        })
    })?)
}

pub fn set_place_active(
    connections: &sqlite::Connections,
    user: &UserProfile,
    id: &str,
    active: bool,
) -> Result<Place> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::set_place_active(conn, user, id, active))?)
}

pub fn toggle_place_active(
    connections: &sqlite::Connections,
    user: &UserProfile,
    id: &str,
) -> Result<Place> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::toggle_place_active(conn, user, id))?)
}

pub fn record_place_view(connections: &sqlite::Connections, id: &str) -> Result<PlaceViews> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::record_place_view(conn, id, Timestamp::now()))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_places_up_to_the_package_limit() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let package = fixture.create_package(&admin, 1);
        let owner = fixture.create_owner("owner@example.com", &package);
        fixture.create_place(&owner, "Cafe");
        let err = flows::create_place(
            &fixture.db_connections,
            &owner,
            usecases::NewPlace {
                name: "Bakery".into(),
                category: "food".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::MaxPlacesReached))
        ));
    }

    #[test]
    fn no_place_without_subscription() {
        let fixture = BackendFixture::new();
        fixture.create_user("admin@example.com");
        let user = fixture.create_user("user@example.com");
        let err = flows::create_place(
            &fixture.db_connections,
            &user,
            usecases::NewPlace {
                name: "Bakery".into(),
                category: "food".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::NoActiveSubscription))
        ));
    }

    #[test]
    fn toggle_twice_restores_place() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let package = fixture.create_package(&admin, 3);
        let owner = fixture.create_owner("owner@example.com", &package);
        let place = fixture.create_place(&owner, "Cafe");
        let id = place.id.as_str();
        let toggled = flows::toggle_place_active(&fixture.db_connections, &owner, id).unwrap();
        assert!(!toggled.is_active);
        let restored = flows::toggle_place_active(&fixture.db_connections, &owner, id).unwrap();
        assert_eq!(restored.is_active, place.is_active);
    }

    #[test]
    fn only_owner_updates_place() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let package = fixture.create_package(&admin, 3);
        let owner = fixture.create_owner("owner@example.com", &package);
        let stranger = fixture.create_user("stranger@example.com");
        let place = fixture.create_place(&owner, "Cafe");
        let update = usecases::UpdatePlace {
            name: "Cafe Dalil".into(),
            category: "food".into(),
            ..Default::default()
        };
        assert!(flows::update_place(
            &fixture.db_connections,
            &stranger,
            place.id.as_str(),
            update.clone()
        )
        .is_err());
        let place =
            flows::update_place(&fixture.db_connections, &owner, place.id.as_str(), update)
                .unwrap();
        assert_eq!(place.name, "Cafe Dalil");
    }

    #[test]
    fn count_views() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let package = fixture.create_package(&admin, 3);
        let owner = fixture.create_owner("owner@example.com", &package);
        let place = fixture.create_place(&owner, "Cafe");
        flows::record_place_view(&fixture.db_connections, place.id.as_str()).unwrap();
        let views = flows::record_place_view(&fixture.db_connections, place.id.as_str()).unwrap();
        assert_eq!(views.total, 2);
        assert_eq!(views.today, 2);
        assert!(flows::record_place_view(&fixture.db_connections, "missing").is_err());
    }
}
