use super::*;

impl<'a> From<&'a Product> for models::NewProduct<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: p.id.as_str(),
            place_id: p.place_id.as_str(),
            name: &p.name,
            description: p.description.as_deref(),
            price: p.price.map(price_to_i64),
            is_active: p.is_active,
            created_at: p.created_at.as_millis(),
        }
    }
}

impl From<models::ProductEntity> for Product {
    fn from(p: models::ProductEntity) -> Self {
        let models::ProductEntity {
            id,
            place_id,
            name,
            description,
            price,
            is_active,
            created_at,
        } = p;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            name,
            description,
            price: price.map(load_price),
            is_active,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn load_price(minor_units: i64) -> Price {
    Price::from_minor_units(minor_units.max(0) as u64)
}

fn load_media(m: models::ProductMediaEntity) -> Result<ProductMedia> {
    let models::ProductMediaEntity {
        id,
        product_id,
        url,
        position,
    } = m;
    Ok(ProductMedia {
        id: id.into(),
        product_id: product_id.into(),
        url: load_required_url(url)?,
        position: position.max(0) as u32,
    })
}

impl From<models::ProductVariantEntity> for ProductVariant {
    fn from(v: models::ProductVariantEntity) -> Self {
        let models::ProductVariantEntity {
            id,
            product_id,
            name,
            price,
        } = v;
        Self {
            id: id.into(),
            product_id: product_id.into(),
            name,
            price: load_price(price),
        }
    }
}

impl_repo!(
    ProductRepo,
    fn create_product(&self, product: &Product) -> Result<()> {
        create_product(&mut self.conn.borrow_mut(), product)
    }
    fn update_product(&self, product: &Product) -> Result<()> {
        update_product(&mut self.conn.borrow_mut(), product)
    }
    fn delete_product(&self, id: &str) -> Result<()> {
        delete_product(&mut self.conn.borrow_mut(), id)
    }
    fn get_product(&self, id: &str) -> Result<Product> {
        get_product(&mut self.conn.borrow_mut(), id)
    }
    fn products_of_place(&self, place_id: &str) -> Result<Vec<Product>> {
        products_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn count_products_of_place(&self, place_id: &str) -> Result<usize> {
        count_products_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn count_products(&self) -> Result<usize> {
        count_products(&mut self.conn.borrow_mut())
    }
    fn search_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        search_products(&mut self.conn.borrow_mut(), query)
    }
    fn add_product_media(&self, kind: MediaKind, media: &ProductMedia) -> Result<()> {
        add_product_media(&mut self.conn.borrow_mut(), kind, media)
    }
    fn delete_product_media(&self, kind: MediaKind, id: &str) -> Result<()> {
        delete_product_media(&mut self.conn.borrow_mut(), kind, id)
    }
    fn get_product_media(&self, kind: MediaKind, id: &str) -> Result<ProductMedia> {
        get_product_media(&mut self.conn.borrow_mut(), kind, id)
    }
    fn product_media(&self, kind: MediaKind, product_id: &str) -> Result<Vec<ProductMedia>> {
        product_media(&mut self.conn.borrow_mut(), kind, product_id)
    }
    fn count_product_media(&self, kind: MediaKind, product_id: &str) -> Result<usize> {
        count_product_media(&mut self.conn.borrow_mut(), kind, product_id)
    }
    fn add_product_variant(&self, variant: &ProductVariant) -> Result<()> {
        add_product_variant(&mut self.conn.borrow_mut(), variant)
    }
    fn delete_product_variant(&self, id: &str) -> Result<()> {
        delete_product_variant(&mut self.conn.borrow_mut(), id)
    }
    fn get_product_variant(&self, id: &str) -> Result<ProductVariant> {
        get_product_variant(&mut self.conn.borrow_mut(), id)
    }
    fn product_variants(&self, product_id: &str) -> Result<Vec<ProductVariant>> {
        product_variants(&mut self.conn.borrow_mut(), product_id)
    }
);

fn create_product(conn: &mut SqliteConnection, product: &Product) -> Result<()> {
    let new_product = models::NewProduct::from(product);
    diesel::insert_into(schema::products::table)
        .values(&new_product)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_product(conn: &mut SqliteConnection, product: &Product) -> Result<()> {
    use schema::products::dsl;
    let new_product = models::NewProduct::from(product);
    let count = diesel::update(dsl::products.filter(dsl::id.eq(new_product.id)))
        .set(&new_product)
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_product(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{product_images, product_variants, product_videos, products};
    diesel::delete(product_images::table.filter(product_images::product_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(product_videos::table.filter(product_videos::product_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    diesel::delete(product_variants::table.filter(product_variants::product_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let count = diesel::delete(products::table.filter(products::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_product(conn: &mut SqliteConnection, id: &str) -> Result<Product> {
    use schema::products::dsl;
    Ok(dsl::products
        .filter(dsl::id.eq(id))
        .first::<models::ProductEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn products_of_place(conn: &mut SqliteConnection, place_id: &str) -> Result<Vec<Product>> {
    use schema::products::dsl;
    Ok(dsl::products
        .filter(dsl::place_id.eq(place_id))
        .order_by(dsl::created_at.desc())
        .load::<models::ProductEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_products_of_place(conn: &mut SqliteConnection, place_id: &str) -> Result<usize> {
    use schema::products::dsl;
    Ok(dsl::products
        .filter(dsl::place_id.eq(place_id))
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_products(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::products::dsl;
    Ok(dsl::products
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn search_products(conn: &mut SqliteConnection, query: &ProductQuery) -> Result<Vec<Product>> {
    use schema::{places, products};
    let ProductQuery {
        text,
        place_id,
        limit,
    } = query;
    let mut boxed = products::table
        .inner_join(places::table)
        .select(products::all_columns)
        .filter(products::is_active.eq(true))
        .filter(places::is_active.eq(true))
        .into_boxed();
    if let Some(text) = text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let pattern = format!("%{}%", text.replace(['%', '_'], ""));
        boxed = boxed.filter(
            products::name
                .like(pattern.clone())
                .or(products::description.like(pattern)),
        );
    }
    if let Some(place_id) = place_id {
        boxed = boxed.filter(products::place_id.eq(place_id.as_str().to_owned()));
    }
    boxed = boxed.order_by(products::created_at.desc());
    if let Some(limit) = limit {
        boxed = boxed.limit(*limit as i64);
    }
    Ok(boxed
        .load::<models::ProductEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn add_product_media(conn: &mut SqliteConnection, kind: MediaKind, media: &ProductMedia) -> Result<()> {
    let ProductMedia {
        id,
        product_id,
        url,
        position,
    } = media;
    match kind {
        MediaKind::Image => diesel::insert_into(schema::product_images::table)
            .values(&models::NewProductImage {
                id: id.as_str(),
                product_id: product_id.as_str(),
                url: url.as_str(),
                position: to_i32(*position),
            })
            .execute(conn),
        MediaKind::Video => diesel::insert_into(schema::product_videos::table)
            .values(&models::NewProductVideo {
                id: id.as_str(),
                product_id: product_id.as_str(),
                url: url.as_str(),
                position: to_i32(*position),
            })
            .execute(conn),
    }
    .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_product_media(conn: &mut SqliteConnection, kind: MediaKind, id: &str) -> Result<()> {
    use schema::{product_images, product_videos};
    let count = match kind {
        MediaKind::Image => {
            diesel::delete(product_images::table.filter(product_images::id.eq(id))).execute(conn)
        }
        MediaKind::Video => {
            diesel::delete(product_videos::table.filter(product_videos::id.eq(id))).execute(conn)
        }
    }
    .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_product_media(conn: &mut SqliteConnection, kind: MediaKind, id: &str) -> Result<ProductMedia> {
    use schema::{product_images, product_videos};
    let entity = match kind {
        MediaKind::Image => product_images::table
            .filter(product_images::id.eq(id))
            .first::<models::ProductMediaEntity>(conn),
        MediaKind::Video => product_videos::table
            .filter(product_videos::id.eq(id))
            .first::<models::ProductMediaEntity>(conn),
    }
    .map_err(from_diesel_err)?;
    load_media(entity)
}

fn product_media(
    conn: &mut SqliteConnection,
    kind: MediaKind,
    product_id: &str,
) -> Result<Vec<ProductMedia>> {
    use schema::{product_images, product_videos};
    let entities = match kind {
        MediaKind::Image => product_images::table
            .filter(product_images::product_id.eq(product_id))
            .order_by(product_images::position)
            .load::<models::ProductMediaEntity>(conn),
        MediaKind::Video => product_videos::table
            .filter(product_videos::product_id.eq(product_id))
            .order_by(product_videos::position)
            .load::<models::ProductMediaEntity>(conn),
    }
    .map_err(from_diesel_err)?;
    entities.into_iter().map(load_media).collect()
}

fn count_product_media(conn: &mut SqliteConnection, kind: MediaKind, product_id: &str) -> Result<usize> {
    use schema::{product_images, product_videos};
    let count = match kind {
        MediaKind::Image => product_images::table
            .filter(product_images::product_id.eq(product_id))
            .select(diesel::dsl::count(product_images::id))
            .first::<i64>(conn),
        MediaKind::Video => product_videos::table
            .filter(product_videos::product_id.eq(product_id))
            .select(diesel::dsl::count(product_videos::id))
            .first::<i64>(conn),
    }
    .map_err(from_diesel_err)?;
    Ok(count as usize)
}

fn add_product_variant(conn: &mut SqliteConnection, variant: &ProductVariant) -> Result<()> {
    let new_variant = models::NewProductVariant {
        id: variant.id.as_str(),
        product_id: variant.product_id.as_str(),
        name: &variant.name,
        price: price_to_i64(variant.price),
    };
    diesel::insert_into(schema::product_variants::table)
        .values(&new_variant)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_product_variant(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::product_variants::dsl;
    let count = diesel::delete(dsl::product_variants.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_product_variant(conn: &mut SqliteConnection, id: &str) -> Result<ProductVariant> {
    use schema::product_variants::dsl;
    Ok(dsl::product_variants
        .filter(dsl::id.eq(id))
        .first::<models::ProductVariantEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn product_variants(conn: &mut SqliteConnection, product_id: &str) -> Result<Vec<ProductVariant>> {
    use schema::product_variants::dsl;
    Ok(dsl::product_variants
        .filter(dsl::product_id.eq(product_id))
        .order_by(dsl::name)
        .load::<models::ProductVariantEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
