use super::*;

#[get("/admin/affiliates")]
pub fn get_affiliates(db: sqlite::Connections, account: Account) -> Result<Vec<json::Affiliate>> {
    let db = db.shared()?;
    let admin = account.user(&db)?;
    let affiliates = usecases::all_affiliates(&db, &admin)?;
    Ok(Json(affiliates.into_iter().map(Into::into).collect()))
}

#[post("/admin/affiliates", format = "application/json", data = "<affiliate>")]
pub fn post_affiliate(
    db: sqlite::Connections,
    account: Account,
    affiliate: JsonResult<json::NewAffiliate>,
) -> Result<json::Affiliate> {
    let affiliate = from_json::new_affiliate(affiliate?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let affiliate = flows::create_affiliate(&db, &admin, affiliate)?;
    Ok(Json(affiliate.into()))
}

#[put("/admin/affiliates/<id>", format = "application/json", data = "<update>")]
pub fn put_affiliate(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::AffiliateUpdate>,
) -> Result<json::Affiliate> {
    let update = from_json::affiliate_update(update?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let affiliate = flows::update_affiliate(&db, &admin, id, update)?;
    Ok(Json(affiliate.into()))
}

#[put("/admin/affiliates/<id>/active", format = "application/json", data = "<flag>")]
pub fn put_affiliate_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    flag: JsonResult<json::ActiveFlag>,
) -> Result<json::Affiliate> {
    let json::ActiveFlag { is_active } = flag?.into_inner();
    let admin = account.user(&db.shared()?)?;
    let affiliate = flows::set_affiliate_active(&db, &admin, id, is_active)?;
    Ok(Json(affiliate.into()))
}

#[get("/admin/discount-codes")]
pub fn get_discount_codes(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::DiscountCode>> {
    let db = db.shared()?;
    let admin = account.user(&db)?;
    let codes = usecases::all_discount_codes(&db, &admin)?;
    Ok(Json(codes.into_iter().map(Into::into).collect()))
}

#[post("/admin/discount-codes", format = "application/json", data = "<code>")]
pub fn post_discount_code(
    db: sqlite::Connections,
    account: Account,
    code: JsonResult<json::NewDiscountCode>,
) -> Result<json::DiscountCode> {
    let code = from_json::new_discount_code(code?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let code = flows::create_discount_code(&db, &admin, code)?;
    Ok(Json(code.into()))
}

#[put("/admin/discount-codes/<id>", format = "application/json", data = "<update>")]
pub fn put_discount_code(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::DiscountCodeUpdate>,
) -> Result<json::DiscountCode> {
    let update = from_json::discount_code_update(update?.into_inner());
    let admin = account.user(&db.shared()?)?;
    let code = flows::update_discount_code(&db, &admin, id, update)?;
    Ok(Json(code.into()))
}

#[put(
    "/admin/discount-codes/<id>/active",
    format = "application/json",
    data = "<flag>"
)]
pub fn put_discount_code_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    flag: JsonResult<json::ActiveFlag>,
) -> Result<json::DiscountCode> {
    let json::ActiveFlag { is_active } = flag?.into_inner();
    let admin = account.user(&db.shared()?)?;
    let code = flows::set_discount_code_active(&db, &admin, id, is_active)?;
    Ok(Json(code.into()))
}

#[post("/admin/discount-codes/<id>/toggle-active")]
pub fn post_discount_code_toggle_active(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> Result<json::DiscountCode> {
    let admin = account.user(&db.shared()?)?;
    let code = flows::toggle_discount_code(&db, &admin, id)?;
    Ok(Json(code.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::{api::tests::prelude::*, tests::*};

    fn post_code(client: &Client, body: &str) -> Status {
        client
            .post("/admin/discount-codes")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .status()
    }

    #[test]
    fn create_affiliate_for_existing_user() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        let partner = register_user(&db, "partner@example.com", "secret123");
        login(&client, "admin@example.com", "secret123");

        let res = client
            .post("/admin/affiliates")
            .header(ContentType::JSON)
            .body(format!(
                r#"{{"user_id":"{}","code":"salma10","commission_percent":10,"discount_percent":5}}"#,
                partner.id
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let affiliate: json::Affiliate = res.into_json().unwrap();
        assert_eq!(affiliate.code, "SALMA10");
        assert_eq!(affiliate.commission_percent, 10);

        let res = client
            .put(format!("/admin/affiliates/{}", affiliate.id))
            .header(ContentType::JSON)
            .body(r#"{"commission_percent":101,"discount_percent":5}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);

        let res = client
            .put(format!("/admin/affiliates/{}/active", affiliate.id))
            .header(ContentType::JSON)
            .body(r#"{"is_active":false}"#)
            .dispatch();
        let affiliate: json::Affiliate = res.into_json().unwrap();
        assert!(!affiliate.is_active);

        let res = client.get("/admin/affiliates").dispatch();
        let affiliates: Vec<json::Affiliate> = res.into_json().unwrap();
        assert_eq!(affiliates.len(), 1);

        let res = client.get("/admin/users").dispatch();
        let users: Vec<json::User> = res.into_json().unwrap();
        let partner = users.iter().find(|u| u.id == partner.id.as_str()).unwrap();
        assert!(partner.is_affiliate);
    }

    #[test]
    fn codes_are_unique() {
        let (client, db) = setup();
        let admin = register_user(&db, "admin@example.com", "secret123");
        let partner = register_user(&db, "partner@example.com", "secret123");
        flows::create_affiliate(
            &db,
            &admin,
            usecases::NewAffiliate {
                user_id: partner.id.to_string(),
                code: "EID".into(),
                commission_percent: 10,
                discount_percent: 10,
            },
        )
        .unwrap();
        login(&client, "admin@example.com", "secret123");
        assert_eq!(post_code(&client, r#"{"code":"eid","percent":20}"#), Status::BadRequest);
        assert_eq!(post_code(&client, r#"{"code":"x","percent":20}"#), Status::BadRequest);
        assert_eq!(post_code(&client, r#"{"code":"SUMMER","percent":20}"#), Status::Ok);
        assert_eq!(post_code(&client, r#"{"code":"summer","percent":5}"#), Status::BadRequest);
    }

    #[test]
    fn toggle_discount_code() {
        let (client, db) = setup();
        register_user(&db, "admin@example.com", "secret123");
        login(&client, "admin@example.com", "secret123");
        assert_eq!(
            post_code(&client, r#"{"code":"WINTER","percent":15,"max_uses":3}"#),
            Status::Ok
        );
        let res = client.get("/admin/discount-codes").dispatch();
        let codes: Vec<json::DiscountCode> = res.into_json().unwrap();
        let code = &codes[0];
        assert_eq!(code.max_uses, Some(3));
        assert!(code.is_active);

        let url = format!("/admin/discount-codes/{}/toggle-active", code.id);
        let res = client.post(&url).dispatch();
        let toggled: json::DiscountCode = res.into_json().unwrap();
        assert!(!toggled.is_active);

        let res = client
            .put(format!("/admin/discount-codes/{}", code.id))
            .header(ContentType::JSON)
            .body(r#"{"percent":30}"#)
            .dispatch();
        let updated: json::DiscountCode = res.into_json().unwrap();
        assert_eq!(updated.percent, 30);
        assert_eq!(updated.max_uses, None);
        assert!(!updated.is_active);
    }
}
