use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<UserProfile> {
    let email = new_user.email.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, new_user, Timestamp::now()).map_err(|err| {
            log::warn!("Failed to register user {email}: {err}");
            err
        })
    })?)
}

/// Log in or create the account on the first sign-in.
pub fn sign_in_or_register(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
) -> Result<UserProfile> {
    let (user, created) = connections
        .exclusive()?
        .transaction(|conn| usecases::sign_in_or_register(conn, credentials, Timestamp::now()))?;
    if created {
        info!("Registered {} on first sign-in", user.email);
    }
    Ok(user)
}

pub fn update_profile(
    connections: &sqlite::Connections,
    user: &UserProfile,
    update: usecases::ProfileUpdate,
) -> Result<UserProfile> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_profile(conn, &user.id, update))?)
}

pub fn change_user_flags(
    connections: &sqlite::Connections,
    account: &UserProfile,
    user_id: &str,
    flags: usecases::UserFlags,
) -> Result<UserProfile> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::change_user_flags(conn, account, user_id, flags).map_err(|err| {
            log::warn!("Failed to change flags of user {user_id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn first_registered_user_is_admin() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let user = fixture.create_user("user@example.com");
        assert!(admin.is_admin);
        assert!(!user.is_admin);
    }

    #[test]
    fn reject_duplicate_email() {
        let fixture = BackendFixture::new();
        fixture.create_user("user@example.com");
        let err = flows::register_user(
            &fixture.db_connections,
            usecases::NewUser {
                email: "user@example.com".parse().unwrap(),
                password: "secret123".into(),
                display_name: None,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::UserExists))
        ));
    }

    #[test]
    fn sign_in_creates_account_once() {
        let fixture = BackendFixture::new();
        let email: EmailAddress = "new@example.com".parse().unwrap();
        let credentials = usecases::Credentials {
            email: &email,
            password: "secret123",
        };
        let first = flows::sign_in_or_register(&fixture.db_connections, &credentials).unwrap();
        let second = flows::sign_in_or_register(&fixture.db_connections, &credentials).unwrap();
        assert_eq!(first.id, second.id);

        let wrong = usecases::Credentials {
            email: &email,
            password: "wrong-password",
        };
        assert!(flows::sign_in_or_register(&fixture.db_connections, &wrong).is_err());
    }

    #[test]
    fn only_admins_change_flags() {
        let fixture = BackendFixture::new();
        let admin = fixture.create_user("admin@example.com");
        let user = fixture.create_user("user@example.com");
        let flags = usecases::UserFlags {
            is_admin: None,
            is_affiliate: Some(true),
        };
        assert!(flows::change_user_flags(
            &fixture.db_connections,
            &user,
            admin.id.as_str(),
            flags
        )
        .is_err());
        let user =
            flows::change_user_flags(&fixture.db_connections, &admin, user.id.as_str(), flags)
                .unwrap();
        assert!(user.is_affiliate);
    }
}
