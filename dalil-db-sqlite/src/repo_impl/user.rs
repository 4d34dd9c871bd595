use super::*;

impl<'a> From<&'a UserProfile> for models::NewUser<'a> {
    fn from(u: &'a UserProfile) -> Self {
        let tokens = u.video_tokens.as_ref();
        Self {
            id: u.id.as_str(),
            email: u.email.as_str(),
            password: u.password.as_ref(),
            display_name: u.display_name.as_deref(),
            phone: u.phone.as_deref(),
            is_admin: u.is_admin,
            is_affiliate: u.is_affiliate,
            video_access_token: tokens.map(|t| t.access_token.as_str()),
            video_refresh_token: tokens.map(|t| t.refresh_token.as_str()),
            video_token_expires_at: tokens.map(|t| t.expires_at.as_millis()),
            created_at: u.created_at.as_millis(),
        }
    }
}

impl From<models::UserEntity> for UserProfile {
    fn from(u: models::UserEntity) -> Self {
        let models::UserEntity {
            id,
            email,
            password,
            display_name,
            phone,
            is_admin,
            is_affiliate,
            video_access_token,
            video_refresh_token,
            video_token_expires_at,
            created_at,
        } = u;
        let video_tokens = match (video_access_token, video_refresh_token, video_token_expires_at)
        {
            (Some(access_token), Some(refresh_token), Some(expires_at)) => Some(OAuthTokens {
                access_token,
                refresh_token,
                expires_at: Timestamp::from_millis(expires_at),
            }),
            _ => None,
        };
        Self {
            id: id.into(),
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash(password),
            display_name,
            phone,
            is_admin,
            is_affiliate,
            video_tokens,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl_repo!(
    UserRepo,
    fn create_user(&self, user: &UserProfile) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &UserProfile) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> Result<UserProfile> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<UserProfile> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)?.ok_or(repo::Error::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<UserProfile>> {
        try_get_user_by_email(&mut self.conn.borrow_mut(), email)
    }
    fn all_users(&self, pagination: &Pagination) -> Result<Vec<UserProfile>> {
        all_users(&mut self.conn.borrow_mut(), pagination)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
    fn find_admin_with_video_tokens(&self) -> Result<Option<UserProfile>> {
        find_admin_with_video_tokens(&mut self.conn.borrow_mut())
    }
);

fn create_user(conn: &mut SqliteConnection, u: &UserProfile) -> Result<()> {
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &UserProfile) -> Result<()> {
    use schema::users::dsl;
    let new_user = models::NewUser::from(u);
    let count = diesel::update(dsl::users.filter(dsl::id.eq(new_user.id)))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<UserProfile> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<UserProfile>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn all_users(conn: &mut SqliteConnection, pagination: &Pagination) -> Result<Vec<UserProfile>> {
    use schema::users::dsl;
    let mut query = dsl::users
        .order_by(dsl::created_at)
        .into_boxed();
    if let Some(offset) = pagination.offset {
        query = query.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        query = query.limit(limit as i64);
    } else if pagination.offset.is_some() {
        // SQLite requires a LIMIT clause for OFFSET
        query = query.limit(i64::MAX);
    }
    Ok(query
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn find_admin_with_video_tokens(conn: &mut SqliteConnection) -> Result<Option<UserProfile>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::is_admin.eq(true))
        .filter(dsl::video_refresh_token.is_not_null())
        .order_by(dsl::created_at)
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
