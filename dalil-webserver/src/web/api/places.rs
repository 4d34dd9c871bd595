use super::*;

#[post("/places", format = "application/json", data = "<new_place>")]
pub fn post_place(
    db: sqlite::Connections,
    account: Account,
    new_place: JsonResult<json::NewPlace>,
) -> Result<json::Place> {
    let new_place = from_json::new_place(new_place?.into_inner());
    let owner = account.user(&db.shared()?)?;
    let place = flows::create_place(&db, &owner, new_place)?;
    Ok(Json(place.into()))
}

#[get("/places/<id>")]
pub fn get_place(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::Place> {
    let db = db.shared()?;
    let viewer = auth.user(&db)?;
    let place = usecases::get_place(&db, viewer.as_ref(), id)?;
    let views = to_json::place_views(place.views, Timestamp::now());
    let mut place = json::Place::from(place);
    place.views = views;
    Ok(Json(place))
}

#[put("/places/<id>", format = "application/json", data = "<update>")]
pub fn put_place(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::NewPlace>,
) -> Result<json::Place> {
    let update = from_json::new_place(update?.into_inner());
    let user = account.user(&db.shared()?)?;
    let place = flows::update_place(&db, &user, id, update)?;
    Ok(Json(place.into()))
}

#[put("/places/<id>/active", format = "application/json", data = "<flag>")]
pub fn put_place_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    flag: JsonResult<json::ActiveFlag>,
) -> Result<json::Place> {
    let json::ActiveFlag { is_active } = flag?.into_inner();
    let user = account.user(&db.shared()?)?;
    let place = flows::set_place_active(&db, &user, id, is_active)?;
    Ok(Json(place.into()))
}

#[post("/places/<id>/toggle-active")]
pub fn post_place_toggle_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> Result<json::Place> {
    let user = account.user(&db.shared()?)?;
    let place = flows::toggle_place_active(&db, &user, id)?;
    Ok(Json(place.into()))
}

#[post("/places/<id>/views")]
pub fn post_place_view(db: sqlite::Connections, id: &str) -> Result<json::PlaceViews> {
    let views = flows::record_place_view(&db, id)?;
    Ok(Json(views.into()))
}

#[get("/places?<text>&<category>&<city>&<limit>")]
pub fn get_places(
    db: sqlite::Connections,
    text: Option<String>,
    category: Option<String>,
    city: Option<String>,
    limit: Option<usize>,
) -> Result<Vec<json::Place>> {
    let query = PlaceQuery {
        text,
        category,
        city,
        include_inactive: false,
        limit,
    };
    let places = usecases::search_places(&db.shared()?, &query)?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

#[get("/users/current/places")]
pub fn get_my_places(db: sqlite::Connections, account: Account) -> Result<Vec<json::Place>> {
    let db = db.shared()?;
    let owner = account.user(&db)?;
    let places = usecases::places_of_owner(&db, &owner)?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::{api::tests::prelude::*, tests::*};

    const CAFE: &str = r#"{"name":"Cafe Nour","category":"food","lat":33.51,"lng":36.29,"phones":["+963 944 000 111"]}"#;

    #[test]
    fn create_places_within_the_package_limit() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let package = create_package(&db, &admin, 1);
        create_owner(&db, "owner@example.com", &package);
        login(&client, "owner@example.com", "secret123");

        let res = client
            .post("/places")
            .header(ContentType::JSON)
            .body(CAFE)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        let place: json::Place = res.into_json().unwrap();
        assert_eq!(place.name, "Cafe Nour");
        assert_eq!(place.lat, Some(33.51));
        assert!(place.is_active);

        let res = client
            .post("/places")
            .header(ContentType::JSON)
            .body(CAFE)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let err: json::Error = res.into_json().unwrap();
        assert_eq!(
            err.message_ar,
            "لقد وصلت إلى الحد الأقصى لعدد المحلات في باقتك"
        );

        let res = client.get("/users/current/places").dispatch();
        let places: Vec<json::Place> = res.into_json().unwrap();
        assert_eq!(places.len(), 1);
    }

    #[test]
    fn create_place_without_subscription() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        register_user(&db, "owner@example.com", "secret123");
        login(&client, "owner@example.com", "secret123");
        let res = client
            .post("/places")
            .header(ContentType::JSON)
            .body(CAFE)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn create_place_with_invalid_position() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let package = create_package(&db, &admin, 3);
        create_owner(&db, "owner@example.com", &package);
        login(&client, "owner@example.com", "secret123");
        let res = client
            .post("/places")
            .header(ContentType::JSON)
            .body(r#"{"name":"Cafe","category":"food","lat":91.0,"lng":0.0}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn toggle_active_twice() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let package = create_package(&db, &admin, 1);
        let owner = create_owner(&db, "owner@example.com", &package);
        let place = create_place(&db, &owner, "Bakery");
        login(&client, "owner@example.com", "secret123");

        let url = format!("/places/{}/toggle-active", place.id);
        let res = client.post(&url).dispatch();
        let toggled: json::Place = res.into_json().unwrap();
        assert!(!toggled.is_active);
        let res = client.post(&url).dispatch();
        let restored: json::Place = res.into_json().unwrap();
        assert!(restored.is_active);
    }

    #[test]
    fn inactive_places_are_hidden_from_visitors() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let package = create_package(&db, &admin, 1);
        let owner = create_owner(&db, "owner@example.com", &package);
        let place = create_place(&db, &owner, "Bakery");
        flows::set_place_active(&db, &owner, place.id.as_str(), false).unwrap();

        let res = client.get(format!("/places/{}", place.id)).dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let err: json::Error = res.into_json().unwrap();
        assert_eq!(err.http_status, 404);

        login(&client, "owner@example.com", "secret123");
        let res = client.get(format!("/places/{}", place.id)).dispatch();
        assert_eq!(res.status(), Status::Ok);
    }

    #[test]
    fn count_views() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let package = create_package(&db, &admin, 1);
        let owner = create_owner(&db, "owner@example.com", &package);
        let place = create_place(&db, &owner, "Bakery");
        let url = format!("/places/{}/views", place.id);
        client.post(&url).dispatch();
        let res = client.post(&url).dispatch();
        let views: json::PlaceViews = res.into_json().unwrap();
        assert_eq!(views.total, 2);
        assert_eq!(views.today, 2);

        let res = client.post("/places/does-not-exist/views").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn search_places_by_text() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let package = create_package(&db, &admin, 3);
        let owner = create_owner(&db, "owner@example.com", &package);
        create_place(&db, &owner, "Bakery Salam");
        create_place(&db, &owner, "Pharmacy");
        let res = client.get("/places?text=bakery").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let places: Vec<json::Place> = res.into_json().unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Bakery Salam");

        let res = client.get("/places?limit=0").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }
}
