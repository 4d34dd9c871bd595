use super::*;

fn load_count(value: i32) -> u32 {
    value.max(0) as u32
}

impl<'a> From<&'a Affiliate> for models::NewAffiliate<'a> {
    fn from(a: &'a Affiliate) -> Self {
        Self {
            id: a.id.as_str(),
            user_id: a.user_id.as_str(),
            code: &a.code,
            commission_percent: i16::from(a.commission_percent.value()),
            discount_percent: i16::from(a.discount_percent.value()),
            usage_count: to_i32(a.usage_count),
            is_active: a.is_active,
            created_at: a.created_at.as_millis(),
        }
    }
}

fn load_affiliate(a: models::AffiliateEntity) -> Result<Affiliate> {
    let models::AffiliateEntity {
        id,
        user_id,
        code,
        commission_percent,
        discount_percent,
        usage_count,
        is_active,
        created_at,
    } = a;
    Ok(Affiliate {
        id: id.into(),
        user_id: user_id.into(),
        code,
        commission_percent: load_percent(commission_percent)?,
        discount_percent: load_percent(discount_percent)?,
        usage_count: load_count(usage_count),
        is_active,
        created_at: Timestamp::from_millis(created_at),
    })
}

impl<'a> From<&'a DiscountCode> for models::NewDiscountCode<'a> {
    fn from(d: &'a DiscountCode) -> Self {
        Self {
            id: d.id.as_str(),
            code: &d.code,
            percent: i16::from(d.percent.value()),
            max_uses: d.max_uses.map(to_i32),
            usage_count: to_i32(d.usage_count),
            is_active: d.is_active,
            expires_at: d.expires_at.map(Timestamp::as_millis),
            created_at: d.created_at.as_millis(),
        }
    }
}

fn load_discount_code(d: models::DiscountCodeEntity) -> Result<DiscountCode> {
    let models::DiscountCodeEntity {
        id,
        code,
        percent,
        max_uses,
        usage_count,
        is_active,
        expires_at,
        created_at,
    } = d;
    Ok(DiscountCode {
        id: id.into(),
        code,
        percent: load_percent(percent)?,
        max_uses: max_uses.map(load_count),
        usage_count: load_count(usage_count),
        is_active,
        expires_at: expires_at.map(Timestamp::from_millis),
        created_at: Timestamp::from_millis(created_at),
    })
}

impl_repo!(
    AffiliateRepo,
    fn create_affiliate(&self, affiliate: &Affiliate) -> Result<()> {
        create_affiliate(&mut self.conn.borrow_mut(), affiliate)
    }
    fn update_affiliate(&self, affiliate: &Affiliate) -> Result<()> {
        update_affiliate(&mut self.conn.borrow_mut(), affiliate)
    }
    fn get_affiliate(&self, id: &str) -> Result<Affiliate> {
        get_affiliate(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_affiliate_by_code(&self, code: &str) -> Result<Option<Affiliate>> {
        try_get_affiliate_by_code(&mut self.conn.borrow_mut(), code)
    }
    fn all_affiliates(&self) -> Result<Vec<Affiliate>> {
        all_affiliates(&mut self.conn.borrow_mut())
    }
);

impl_repo!(
    DiscountCodeRepo,
    fn create_discount_code(&self, code: &DiscountCode) -> Result<()> {
        create_discount_code(&mut self.conn.borrow_mut(), code)
    }
    fn update_discount_code(&self, code: &DiscountCode) -> Result<()> {
        update_discount_code(&mut self.conn.borrow_mut(), code)
    }
    fn get_discount_code(&self, id: &str) -> Result<DiscountCode> {
        get_discount_code(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_discount_code_by_code(&self, code: &str) -> Result<Option<DiscountCode>> {
        try_get_discount_code_by_code(&mut self.conn.borrow_mut(), code)
    }
    fn all_discount_codes(&self) -> Result<Vec<DiscountCode>> {
        all_discount_codes(&mut self.conn.borrow_mut())
    }
);

fn create_affiliate(conn: &mut SqliteConnection, affiliate: &Affiliate) -> Result<()> {
    let new_affiliate = models::NewAffiliate::from(affiliate);
    diesel::insert_into(schema::affiliates::table)
        .values(&new_affiliate)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_affiliate(conn: &mut SqliteConnection, affiliate: &Affiliate) -> Result<()> {
    use schema::affiliates::dsl;
    let new_affiliate = models::NewAffiliate::from(affiliate);
    let count = diesel::update(dsl::affiliates.filter(dsl::id.eq(new_affiliate.id)))
        .set(&new_affiliate)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_affiliate(conn: &mut SqliteConnection, id: &str) -> Result<Affiliate> {
    use schema::affiliates::dsl;
    let entity = dsl::affiliates
        .filter(dsl::id.eq(id))
        .first::<models::AffiliateEntity>(conn)
        .map_err(from_diesel_err)?;
    load_affiliate(entity)
}

fn try_get_affiliate_by_code(conn: &mut SqliteConnection, code: &str) -> Result<Option<Affiliate>> {
    use schema::affiliates::dsl;
    dsl::affiliates
        .filter(dsl::code.eq(code))
        .first::<models::AffiliateEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_affiliate)
        .transpose()
}

fn all_affiliates(conn: &mut SqliteConnection) -> Result<Vec<Affiliate>> {
    use schema::affiliates::dsl;
    dsl::affiliates
        .order_by(dsl::created_at.desc())
        .load::<models::AffiliateEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_affiliate)
        .collect()
}

fn create_discount_code(conn: &mut SqliteConnection, code: &DiscountCode) -> Result<()> {
    let new_code = models::NewDiscountCode::from(code);
    diesel::insert_into(schema::discount_codes::table)
        .values(&new_code)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_discount_code(conn: &mut SqliteConnection, code: &DiscountCode) -> Result<()> {
    use schema::discount_codes::dsl;
    let new_code = models::NewDiscountCode::from(code);
    let count = diesel::update(dsl::discount_codes.filter(dsl::id.eq(new_code.id)))
        .set(&new_code)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_discount_code(conn: &mut SqliteConnection, id: &str) -> Result<DiscountCode> {
    use schema::discount_codes::dsl;
    let entity = dsl::discount_codes
        .filter(dsl::id.eq(id))
        .first::<models::DiscountCodeEntity>(conn)
        .map_err(from_diesel_err)?;
    load_discount_code(entity)
}

fn try_get_discount_code_by_code(
    conn: &mut SqliteConnection,
    code: &str,
) -> Result<Option<DiscountCode>> {
    use schema::discount_codes::dsl;
    dsl::discount_codes
        .filter(dsl::code.eq(code))
        .first::<models::DiscountCodeEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_discount_code)
        .transpose()
}

fn all_discount_codes(conn: &mut SqliteConnection) -> Result<Vec<DiscountCode>> {
    use schema::discount_codes::dsl;
    dsl::discount_codes
        .order_by(dsl::created_at.desc())
        .load::<models::DiscountCodeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_discount_code)
        .collect()
}
