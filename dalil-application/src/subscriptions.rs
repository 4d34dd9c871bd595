use super::*;

pub fn subscribe(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    user: &UserProfile,
    package_id: &str,
    promo_code: Option<&str>,
) -> Result<Subscription> {
    let subscription = connections.exclusive()?.transaction(|conn| {
        usecases::subscribe(conn, user, package_id, promo_code, Timestamp::now()).map_err(
            |err| {
                log::warn!(
                    "User {} failed to subscribe to package {package_id}: {err}",
                    user.id
                );
                err
            },
        )
    })?;
    notify.notify(NotificationEvent::UserSubscribed {
        user,
        subscription: &subscription,
    });
    Ok(subscription)
}

/// Deactivate all subscriptions that ended before `now`.
pub fn expire_subscriptions(connections: &sqlite::Connections, now: Timestamp) -> Result<usize> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::expire_subscriptions(conn, now))?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn pay_discounted_price_and_count_usage() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let user = fixture.create_user("user@example.com");
        let db = &fixture.db_connections;
        let package = fixture.create_package(&admin, 1);
        let code = flows::create_discount_code(
            db,
            &admin,
            usecases::NewDiscountCode {
                code: "WELCOME".into(),
                percent: 25,
                max_uses: Some(1),
                expires_at: None,
            },
        )
        .unwrap();
        let subscription = flows::subscribe(
            db,
            &fixture.notify,
            &user,
            package.id.as_str(),
            Some("welcome"),
        )
        .unwrap();
        assert_eq!(u64::from(subscription.paid_price), 7_500);
        assert_eq!(subscription.discount_code.as_deref(), Some("WELCOME"));
        assert_eq!(
            *fixture.notify.events.borrow(),
            vec![format!("subscribed:{}", user.id)]
        );

        let codes = usecases::all_discount_codes(&db.shared().unwrap(), &admin).unwrap();
        let code = codes.into_iter().find(|c| c.id == code.id).unwrap();
        assert_eq!(code.usage_count, 1);

        let err = flows::subscribe(
            db,
            &fixture.notify,
            &user,
            package.id.as_str(),
            Some("WELCOME"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::InvalidPromoCode))
        ));
    }

    #[test]
    fn replace_previous_subscription() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let user = fixture.create_user("user@example.com");
        let db = &fixture.db_connections;
        let package = fixture.create_package(&admin, 1);
        let first = flows::subscribe(db, &fixture.notify, &user, package.id.as_str(), None).unwrap();
        let second =
            flows::subscribe(db, &fixture.notify, &user, package.id.as_str(), None).unwrap();
        let subscriptions = usecases::subscriptions_of_user(&db.shared().unwrap(), &user).unwrap();
        let active: Vec<_> = subscriptions.iter().filter(|s| s.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn expire_after_duration() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let user = fixture.create_user("user@example.com");
        let db = &fixture.db_connections;
        let package = fixture.create_package(&admin, 1);
        let subscription =
            flows::subscribe(db, &fixture.notify, &user, package.id.as_str(), None).unwrap();
        assert_eq!(
            flows::expire_subscriptions(db, subscription.started_at.add_days(29)).unwrap(),
            0
        );
        assert_eq!(
            flows::expire_subscriptions(db, subscription.expires_at).unwrap(),
            1
        );
        let now = subscription.expires_at;
        assert!(
            usecases::active_subscription(&db.shared().unwrap(), user.id.as_str(), now)
                .unwrap()
                .is_none()
        );
    }
}
