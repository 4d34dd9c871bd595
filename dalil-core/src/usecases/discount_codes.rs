use super::{affiliates::check_new_code, authorize::authorize_admin, prelude::*};

#[derive(Debug, Clone)]
pub struct NewDiscountCode {
    pub code: String,
    pub percent: i64,
    pub max_uses: Option<u32>,
    pub expires_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy)]
pub struct DiscountCodeUpdate {
    pub percent: i64,
    pub max_uses: Option<u32>,
    pub expires_at: Option<Timestamp>,
}

pub fn create_discount_code<R>(
    repo: &R,
    account: &UserProfile,
    new_code: NewDiscountCode,
    now: Timestamp,
) -> Result<DiscountCode>
where
    R: AffiliateRepo + DiscountCodeRepo,
{
    authorize_admin(account)?;
    let NewDiscountCode {
        code,
        percent,
        max_uses,
        expires_at,
    } = new_code;
    let percent = Percent::try_from(percent)?;
    let code = check_new_code(repo, &code)?;
    let discount_code = DiscountCode {
        id: Id::new(),
        code,
        percent,
        max_uses,
        usage_count: 0,
        is_active: true,
        expires_at,
        created_at: now,
    };
    repo.create_discount_code(&discount_code)?;
    Ok(discount_code)
}

pub fn update_discount_code<R>(
    repo: &R,
    account: &UserProfile,
    id: &str,
    update: DiscountCodeUpdate,
) -> Result<DiscountCode>
where
    R: DiscountCodeRepo,
{
    authorize_admin(account)?;
    let mut code = repo.get_discount_code(id)?;
    code.percent = Percent::try_from(update.percent)?;
    code.max_uses = update.max_uses;
    code.expires_at = update.expires_at;
    repo.update_discount_code(&code)?;
    Ok(code)
}

pub fn set_discount_code_active<R>(
    repo: &R,
    account: &UserProfile,
    id: &str,
    active: bool,
) -> Result<DiscountCode>
where
    R: DiscountCodeRepo,
{
    authorize_admin(account)?;
    let mut code = repo.get_discount_code(id)?;
    code.is_active = active;
    repo.update_discount_code(&code)?;
    Ok(code)
}

pub fn toggle_discount_code<R>(repo: &R, account: &UserProfile, id: &str) -> Result<DiscountCode>
where
    R: DiscountCodeRepo,
{
    authorize_admin(account)?;
    let code = repo.get_discount_code(id)?.toggled();
    repo.update_discount_code(&code)?;
    Ok(code)
}

pub fn all_discount_codes<R>(repo: &R, account: &UserProfile) -> Result<Vec<DiscountCode>>
where
    R: DiscountCodeRepo,
{
    authorize_admin(account)?;
    Ok(repo.all_discount_codes()?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dalil_entities::builders::*;

    fn new_code(code: &str, percent: i64) -> NewDiscountCode {
        NewDiscountCode {
            code: code.into(),
            percent,
            max_uses: Some(10),
            expires_at: None,
        }
    }

    #[test]
    fn toggle_twice_restores() {
        let db = MockDb::default();
        let admin = UserProfile::build().admin().finish();
        let code = create_discount_code(&db, &admin, new_code("RAMADAN", 30), Timestamp::now())
            .unwrap();
        let toggled = toggle_discount_code(&db, &admin, code.id.as_str()).unwrap();
        assert!(!toggled.is_active);
        let restored = toggle_discount_code(&db, &admin, code.id.as_str()).unwrap();
        assert_eq!(code, restored);
        assert_eq!(code, db.discount_codes.borrow()[0]);
    }

    #[test]
    fn reject_out_of_range_percent() {
        let db = MockDb::default();
        let admin = UserProfile::build().admin().finish();
        assert!(matches!(
            create_discount_code(&db, &admin, new_code("TOO_MUCH", 120), Timestamp::now()),
            Err(Error::Percent)
        ));
        assert!(db.discount_codes.borrow().is_empty());
    }

    #[test]
    fn only_admins() {
        let db = MockDb::default();
        let user = UserProfile::build().finish();
        assert!(matches!(
            create_discount_code(&db, &user, new_code("RAMADAN", 30), Timestamp::now()),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            all_discount_codes(&db, &user),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn update_limits() {
        let db = MockDb::default();
        let admin = UserProfile::build().admin().finish();
        let code = create_discount_code(&db, &admin, new_code("EID", 10), Timestamp::now())
            .unwrap();
        let updated = update_discount_code(
            &db,
            &admin,
            code.id.as_str(),
            DiscountCodeUpdate {
                percent: 15,
                max_uses: None,
                expires_at: Some(Timestamp::from_secs(100)),
            },
        )
        .unwrap();
        assert_eq!(15, updated.percent.value());
        assert_eq!(None, updated.max_uses);
        assert_eq!(code.code, updated.code);
    }
}
