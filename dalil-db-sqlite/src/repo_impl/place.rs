use super::*;

const PHONE_SEPARATOR: char = ',';

fn join_phones(phones: &[String]) -> String {
    phones.join(&PHONE_SEPARATOR.to_string())
}

fn split_phones(phones: &str) -> Vec<String> {
    phones
        .split(PHONE_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl<'a> From<&'a Place> for models::NewPlace<'a> {
    fn from(p: &'a Place) -> Self {
        let Place {
            id,
            owner_id,
            subscription_id,
            name,
            description,
            category,
            city,
            address,
            pos,
            phones,
            whatsapp,
            logo_url,
            cover_url,
            is_active,
            views,
            created_at,
        } = p;
        Self {
            id: id.as_str(),
            owner_id: owner_id.as_str(),
            subscription_id: subscription_id.as_ref().map(Id::as_str),
            name,
            description: description.as_deref(),
            category,
            city: city.as_deref(),
            address: address.as_deref(),
            lat: pos.as_ref().map(MapPoint::lat),
            lng: pos.as_ref().map(MapPoint::lng),
            phones: join_phones(phones),
            whatsapp: whatsapp.as_deref(),
            logo_url: logo_url.as_ref().map(Url::as_str),
            cover_url: cover_url.as_ref().map(Url::as_str),
            is_active: *is_active,
            views_total: to_i64(views.total),
            views_today: to_i64(views.today),
            views_day: views.day,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<models::PlaceEntity> for Place {
    fn from(p: models::PlaceEntity) -> Self {
        let models::PlaceEntity {
            id,
            owner_id,
            subscription_id,
            name,
            description,
            category,
            city,
            address,
            lat,
            lng,
            phones,
            whatsapp,
            logo_url,
            cover_url,
            is_active,
            views_total,
            views_today,
            views_day,
            created_at,
        } = p;
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng),
            _ => None,
        };
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            subscription_id: subscription_id.map(Into::into),
            name,
            description,
            category,
            city,
            address,
            pos,
            phones: split_phones(&phones),
            whatsapp,
            logo_url: logo_url.and_then(load_url),
            cover_url: cover_url.and_then(load_url),
            is_active,
            views: PlaceViews {
                total: views_total.max(0) as u64,
                today: views_today.max(0) as u64,
                day: views_day,
            },
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl_repo!(
    PlaceRepo,
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }
    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn places_of_owner(&self, owner_id: &str) -> Result<Vec<Place>> {
        places_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }
    fn count_places_of_owner(&self, owner_id: &str) -> Result<usize> {
        count_places_of_owner(&mut self.conn.borrow_mut(), owner_id)
    }
    fn count_places(&self, only_active: bool) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut(), only_active)
    }
    fn search_places(&self, query: &PlaceQuery) -> Result<Vec<Place>> {
        search_places(&mut self.conn.borrow_mut(), query)
    }
    fn record_place_view(&self, id: &str, now: Timestamp) -> Result<PlaceViews> {
        record_place_view(&mut self.conn.borrow_mut(), id, now)
    }
    fn set_place_active(&self, id: &str, active: bool) -> Result<()> {
        set_place_active(&mut self.conn.borrow_mut(), id, active)
    }
);

fn create_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    let new_place = models::NewPlace::from(place);
    diesel::insert_into(schema::places::table)
        .values(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::places::dsl;
    let new_place = models::NewPlace::from(place);
    let count = diesel::update(dsl::places.filter(dsl::id.eq(new_place.id)))
        .set(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Place> {
    use schema::places::dsl;
    Ok(dsl::places
        .filter(dsl::id.eq(id))
        .first::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_places(
    conn: &mut SqliteConnection,
    query: schema::places::BoxedQuery<'_, diesel::sqlite::Sqlite>,
) -> Result<Vec<Place>> {
    Ok(query
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn all_places(conn: &mut SqliteConnection) -> Result<Vec<Place>> {
    use schema::places::dsl;
    load_places(conn, dsl::places.order_by(dsl::created_at.desc()).into_boxed())
}

fn places_of_owner(conn: &mut SqliteConnection, owner_id: &str) -> Result<Vec<Place>> {
    use schema::places::dsl;
    load_places(
        conn,
        dsl::places
            .filter(dsl::owner_id.eq(owner_id.to_owned()))
            .order_by(dsl::created_at)
            .into_boxed(),
    )
}

fn count_places_of_owner(conn: &mut SqliteConnection, owner_id: &str) -> Result<usize> {
    use schema::places::dsl;
    Ok(dsl::places
        .filter(dsl::owner_id.eq(owner_id))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_places(conn: &mut SqliteConnection, only_active: bool) -> Result<usize> {
    use schema::places::dsl;
    let mut query = dsl::places.select(diesel::dsl::count(dsl::id)).into_boxed();
    if only_active {
        query = query.filter(dsl::is_active.eq(true));
    }
    Ok(query.first::<i64>(conn).map_err(from_diesel_err)? as usize)
}

fn like_pattern(text: &str) -> String {
    format!("%{}%", text.trim().replace('%', "").replace('_', ""))
}

fn search_places(conn: &mut SqliteConnection, query: &PlaceQuery) -> Result<Vec<Place>> {
    use schema::places::dsl;
    let PlaceQuery {
        text,
        category,
        city,
        include_inactive,
        limit,
    } = query;
    let mut boxed = dsl::places.into_boxed();
    if !include_inactive {
        boxed = boxed.filter(dsl::is_active.eq(true));
    }
    if let Some(text) = text.as_deref().filter(|t| !t.trim().is_empty()) {
        let pattern = like_pattern(text);
        boxed = boxed.filter(
            dsl::name
                .like(pattern.clone())
                .or(dsl::description.like(pattern)),
        );
    }
    // Categories are stored in lower case.
    if let Some(category) = category
        .as_deref()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
    {
        boxed = boxed.filter(dsl::category.eq(category));
    }
    if let Some(city) = city.as_deref().filter(|c| !c.is_empty()) {
        boxed = boxed.filter(dsl::city.like(like_pattern(city)));
    }
    boxed = boxed.order_by((dsl::views_total.desc(), dsl::created_at.desc()));
    if let Some(limit) = limit {
        boxed = boxed.limit(*limit as i64);
    }
    load_places(conn, boxed)
}

fn record_place_view(conn: &mut SqliteConnection, id: &str, now: Timestamp) -> Result<PlaceViews> {
    use schema::places::dsl;
    let (total, today, day) = dsl::places
        .filter(dsl::id.eq(id))
        .select((dsl::views_total, dsl::views_today, dsl::views_day))
        .first::<(i64, i64, i64)>(conn)
        .map_err(from_diesel_err)?;
    let views = PlaceViews {
        total: total.max(0) as u64,
        today: today.max(0) as u64,
        day,
    }
    .record(now);
    let count = diesel::update(dsl::places.filter(dsl::id.eq(id)))
        .set((
            dsl::views_total.eq(to_i64(views.total)),
            dsl::views_today.eq(to_i64(views.today)),
            dsl::views_day.eq(views.day),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)?;
    Ok(views)
}

fn set_place_active(conn: &mut SqliteConnection, id: &str, active: bool) -> Result<()> {
    use schema::places::dsl;
    let count = diesel::update(dsl::places.filter(dsl::id.eq(id)))
        .set(dsl::is_active.eq(active))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}
