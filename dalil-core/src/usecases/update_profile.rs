use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub phone: Option<String>,
}

pub fn update_profile<R>(repo: &R, user_id: &Id, update: ProfileUpdate) -> Result<UserProfile>
where
    R: UserRepo,
{
    let ProfileUpdate {
        display_name,
        phone,
    } = update;
    let phone = phone
        .map(|p| validate::normalize_phone(p.trim()))
        .filter(|p| !p.is_empty());
    if let Some(ref phone) = phone {
        if !validate::is_valid_phone(phone) {
            return Err(Error::Phone);
        }
    }
    let mut user = repo.get_user(user_id.as_str())?;
    user.display_name = display_name
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty());
    user.phone = phone;
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dalil_entities::builders::*;

    #[test]
    fn update_name_and_phone() {
        let db = MockDb::default();
        let user = UserProfile::build().id("u").finish();
        db.users.borrow_mut().push(user.clone());
        let updated = update_profile(
            &db,
            &user.id,
            ProfileUpdate {
                display_name: Some("Lina".into()),
                phone: Some("+963 944 123456".into()),
            },
        )
        .unwrap();
        assert_eq!(Some("Lina"), updated.display_name.as_deref());
        assert_eq!(Some("+963944123456"), updated.phone.as_deref());
        assert_eq!(updated, db.users.borrow()[0]);
    }

    #[test]
    fn reject_invalid_phone() {
        let db = MockDb::default();
        let user = UserProfile::build().id("u").finish();
        db.users.borrow_mut().push(user.clone());
        let update = ProfileUpdate {
            display_name: None,
            phone: Some("123".into()),
        };
        assert!(matches!(
            update_profile(&db, &user.id, update),
            Err(Error::Phone)
        ));
    }
}
