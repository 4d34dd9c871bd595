use super::*;

fn load_limit(value: i32) -> u32 {
    value.max(0) as u32
}

impl<'a> From<&'a Package> for models::NewPackage<'a> {
    fn from(p: &'a Package) -> Self {
        Self {
            id: p.id.as_str(),
            name: &p.name,
            description: p.description.as_deref(),
            price: price_to_i64(p.price),
            duration_days: to_i32(p.duration_days),
            max_places: to_i32(p.max_places),
            max_products_per_place: to_i32(p.max_products_per_place),
            max_images_per_product: to_i32(p.max_images_per_product),
            max_videos_per_product: to_i32(p.max_videos_per_product),
            is_active: p.is_active,
        }
    }
}

impl From<models::PackageEntity> for Package {
    fn from(p: models::PackageEntity) -> Self {
        let models::PackageEntity {
            id,
            name,
            description,
            price,
            duration_days,
            max_places,
            max_products_per_place,
            max_images_per_product,
            max_videos_per_product,
            is_active,
        } = p;
        Self {
            id: id.into(),
            name,
            description,
            price: Price::from_minor_units(price.max(0) as u64),
            duration_days: load_limit(duration_days),
            max_places: load_limit(max_places),
            max_products_per_place: load_limit(max_products_per_place),
            max_images_per_product: load_limit(max_images_per_product),
            max_videos_per_product: load_limit(max_videos_per_product),
            is_active,
        }
    }
}

impl<'a> From<&'a Subscription> for models::NewSubscription<'a> {
    fn from(s: &'a Subscription) -> Self {
        Self {
            id: s.id.as_str(),
            user_id: s.user_id.as_str(),
            package_id: s.package_id.as_str(),
            started_at: s.started_at.as_millis(),
            expires_at: s.expires_at.as_millis(),
            paid_price: price_to_i64(s.paid_price),
            discount_code: s.discount_code.as_deref(),
            affiliate_code: s.affiliate_code.as_deref(),
            is_active: s.is_active,
        }
    }
}

impl From<models::SubscriptionEntity> for Subscription {
    fn from(s: models::SubscriptionEntity) -> Self {
        let models::SubscriptionEntity {
            id,
            user_id,
            package_id,
            started_at,
            expires_at,
            paid_price,
            discount_code,
            affiliate_code,
            is_active,
        } = s;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            package_id: package_id.into(),
            started_at: Timestamp::from_millis(started_at),
            expires_at: Timestamp::from_millis(expires_at),
            paid_price: Price::from_minor_units(paid_price.max(0) as u64),
            discount_code,
            affiliate_code,
            is_active,
        }
    }
}

impl_repo!(
    PackageRepo,
    fn create_package(&self, package: &Package) -> Result<()> {
        create_package(&mut self.conn.borrow_mut(), package)
    }
    fn update_package(&self, package: &Package) -> Result<()> {
        update_package(&mut self.conn.borrow_mut(), package)
    }
    fn get_package(&self, id: &str) -> Result<Package> {
        get_package(&mut self.conn.borrow_mut(), id)
    }
    fn all_packages(&self) -> Result<Vec<Package>> {
        all_packages(&mut self.conn.borrow_mut())
    }
);

impl_repo!(
    SubscriptionRepo,
    fn create_subscription(&self, subscription: &Subscription) -> Result<()> {
        create_subscription(&mut self.conn.borrow_mut(), subscription)
    }
    fn update_subscription(&self, subscription: &Subscription) -> Result<()> {
        update_subscription(&mut self.conn.borrow_mut(), subscription)
    }
    fn get_subscription(&self, id: &str) -> Result<Subscription> {
        get_subscription(&mut self.conn.borrow_mut(), id)
    }
    fn subscriptions_of_user(&self, user_id: &str) -> Result<Vec<Subscription>> {
        subscriptions_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn count_active_subscriptions(&self, now: Timestamp) -> Result<usize> {
        count_active_subscriptions(&mut self.conn.borrow_mut(), now)
    }
    fn expire_subscriptions(&self, now: Timestamp) -> Result<usize> {
        expire_subscriptions(&mut self.conn.borrow_mut(), now)
    }
);

fn create_package(conn: &mut SqliteConnection, package: &Package) -> Result<()> {
    let new_package = models::NewPackage::from(package);
    diesel::insert_into(schema::packages::table)
        .values(&new_package)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_package(conn: &mut SqliteConnection, package: &Package) -> Result<()> {
    use schema::packages::dsl;
    let new_package = models::NewPackage::from(package);
    let count = diesel::update(dsl::packages.filter(dsl::id.eq(new_package.id)))
        .set(&new_package)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_package(conn: &mut SqliteConnection, id: &str) -> Result<Package> {
    use schema::packages::dsl;
    Ok(dsl::packages
        .filter(dsl::id.eq(id))
        .first::<models::PackageEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_packages(conn: &mut SqliteConnection) -> Result<Vec<Package>> {
    use schema::packages::dsl;
    Ok(dsl::packages
        .order_by(dsl::price)
        .load::<models::PackageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn create_subscription(conn: &mut SqliteConnection, subscription: &Subscription) -> Result<()> {
    let new_subscription = models::NewSubscription::from(subscription);
    diesel::insert_into(schema::subscriptions::table)
        .values(&new_subscription)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_subscription(conn: &mut SqliteConnection, subscription: &Subscription) -> Result<()> {
    use schema::subscriptions::dsl;
    let new_subscription = models::NewSubscription::from(subscription);
    let count = diesel::update(dsl::subscriptions.filter(dsl::id.eq(new_subscription.id)))
        .set(&new_subscription)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_subscription(conn: &mut SqliteConnection, id: &str) -> Result<Subscription> {
    use schema::subscriptions::dsl;
    Ok(dsl::subscriptions
        .filter(dsl::id.eq(id))
        .first::<models::SubscriptionEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn subscriptions_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Subscription>> {
    use schema::subscriptions::dsl;
    Ok(dsl::subscriptions
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::started_at.desc())
        .load::<models::SubscriptionEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_active_subscriptions(conn: &mut SqliteConnection, now: Timestamp) -> Result<usize> {
    use schema::subscriptions::dsl;
    let now = now.as_millis();
    Ok(dsl::subscriptions
        .filter(dsl::is_active.eq(true))
        .filter(dsl::started_at.le(now))
        .filter(dsl::expires_at.gt(now))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn expire_subscriptions(conn: &mut SqliteConnection, now: Timestamp) -> Result<usize> {
    use schema::subscriptions::dsl;
    diesel::update(
        dsl::subscriptions
            .filter(dsl::is_active.eq(true))
            .filter(dsl::expires_at.le(now.as_millis())),
    )
    .set(dsl::is_active.eq(false))
    .execute(conn)
    .map_err(from_diesel_err)
}
