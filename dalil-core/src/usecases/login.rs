use super::{
    prelude::*,
    register_user::{register_user, NewUser},
};

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<UserProfile>
where
    R: UserRepo,
{
    match repo.try_get_user_by_email(login.email)? {
        Some(user) if user.password.verify(login.password) => Ok(user),
        _ => Err(Error::Credentials),
    }
}

/// Log in with an existing account or create a new one on first sign-in.
///
/// Returns the profile and whether it has just been created.
pub fn sign_in_or_register<R>(
    repo: &R,
    login: &Credentials,
    now: Timestamp,
) -> Result<(UserProfile, bool)>
where
    R: UserRepo,
{
    if repo.try_get_user_by_email(login.email)?.is_some() {
        return login_with_email(repo, login).map(|user| (user, false));
    }
    let new_user = NewUser {
        email: login.email.clone(),
        password: login.password.to_owned(),
        display_name: None,
    };
    register_user(repo, new_user, now).map(|user| (user, true))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn login_with_valid_and_invalid_password() {
        let db = MockDb::default();
        let email: EmailAddress = "user@example.com".parse().unwrap();
        let created = sign_in_or_register(
            &db,
            &Credentials {
                email: &email,
                password: "secret",
            },
            Timestamp::now(),
        )
        .unwrap();
        assert!(created.1);

        let user = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "secret",
            },
        )
        .unwrap();
        assert_eq!(created.0.id, user.id);

        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "wrong!",
                },
            ),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn sign_in_twice_does_not_register_again() {
        let db = MockDb::default();
        let email: EmailAddress = "user@example.com".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "secret",
        };
        let (first, created) = sign_in_or_register(&db, &login, Timestamp::now()).unwrap();
        assert!(created);
        let (second, created) = sign_in_or_register(&db, &login, Timestamp::now()).unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);
        assert_eq!(1, db.users.borrow().len());
    }

    #[test]
    fn unknown_user() {
        let db = MockDb::default();
        let email: EmailAddress = "nobody@example.com".parse().unwrap();
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "secret",
                },
            ),
            Err(Error::Credentials)
        ));
    }
}
