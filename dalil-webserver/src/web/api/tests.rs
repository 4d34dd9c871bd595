pub mod prelude {
    pub use crate::web::tests::{
        Client, ContentType, Cookie, Header, LocalResponse, Status, DUMMY_VERSION,
    };
    use crate::web::{api, sqlite, tests::rocket_test_setup};

    pub fn setup() -> (Client, sqlite::Connections) {
        rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(res: &LocalResponse) {
        assert_eq!(
            res.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    /// Log in with a private session cookie.
    pub fn login(client: &Client, email: &str, password: &str) {
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email":"{email}","password":"{password}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }
}

use self::prelude::*;

#[test]
fn unknown_routes_are_not_found() {
    let (client, _db) = setup();
    let res = client.get("/does-not-exist").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn reject_invalid_json() {
    let (client, db) = setup();
    crate::web::tests::register_user(&db, "user@example.com", "secret123");
    login(&client, "user@example.com", "secret123");
    let res = client
        .post("/places")
        .header(ContentType::JSON)
        .body(r#"{"name":42}"#)
        .dispatch();
    assert_eq!(res.status(), Status::UnprocessableEntity);
    test_json(&res);
    let err: dalil_boundary::Error = res.into_json().unwrap();
    assert_eq!(err.http_status, 422);
}
