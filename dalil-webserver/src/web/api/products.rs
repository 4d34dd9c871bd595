use super::*;

fn parse_media_url(media: json::NewProductMedia) -> result::Result<Url, ParameterError> {
    Ok(media.url.trim().parse::<Url>()?)
}

#[post("/places/<place_id>/products", format = "application/json", data = "<new_product>")]
pub fn post_product(
    db: sqlite::Connections,
    account: Account,
    place_id: &str,
    new_product: JsonResult<json::NewProduct>,
) -> Result<json::Product> {
    let new_product = from_json::new_product(new_product?.into_inner());
    let user = account.user(&db.shared()?)?;
    let product = flows::create_product(&db, &user, place_id, new_product)?;
    Ok(Json(product.into()))
}

#[get("/places/<place_id>/products")]
pub fn get_products_of_place(
    db: sqlite::Connections,
    auth: Auth,
    place_id: &str,
) -> Result<Vec<json::Product>> {
    let db = db.shared()?;
    let viewer = auth.user(&db)?;
    let products = usecases::products_of_place(&db, viewer.as_ref(), place_id)?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[get("/products/<id>")]
pub fn get_product(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::ProductDetails> {
    let db = db.shared()?;
    let viewer = auth.user(&db)?;
    let details = usecases::get_product(&db, viewer.as_ref(), id)?;
    Ok(Json(to_json::product_details(details)))
}

#[put("/products/<id>", format = "application/json", data = "<update>")]
pub fn put_product(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    update: JsonResult<json::UpdateProduct>,
) -> Result<json::Product> {
    let update = from_json::update_product(update?.into_inner());
    let user = account.user(&db.shared()?)?;
    let product = flows::update_product(&db, &user, id, update)?;
    Ok(Json(product.into()))
}

#[delete("/products/<id>")]
pub fn delete_product(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    let user = account.user(&db.shared()?)?;
    flows::delete_product(&db, &user, id)?;
    Ok(Json(()))
}

#[get("/products?<text>&<place_id>&<limit>")]
pub fn get_products(
    db: sqlite::Connections,
    text: Option<String>,
    place_id: Option<String>,
    limit: Option<usize>,
) -> Result<Vec<json::Product>> {
    let query = ProductQuery {
        text,
        place_id: place_id.map(Id::from),
        limit,
    };
    let products = usecases::search_products(&db.shared()?, &query)?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

fn add_media(
    db: &sqlite::Connections,
    account: &Account,
    product_id: &str,
    kind: MediaKind,
    media: json::NewProductMedia,
) -> Result<json::ProductMedia> {
    let url = parse_media_url(media)?;
    let user = account.user(&db.shared()?)?;
    let media = flows::add_product_media(db, &user, product_id, kind, url)?;
    Ok(Json(media.into()))
}

#[post("/products/<id>/images", format = "application/json", data = "<media>")]
pub fn post_product_image(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    media: JsonResult<json::NewProductMedia>,
) -> Result<json::ProductMedia> {
    add_media(&db, &account, id, MediaKind::Image, media?.into_inner())
}

#[post("/products/<id>/videos", format = "application/json", data = "<media>")]
pub fn post_product_video(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    media: JsonResult<json::NewProductMedia>,
) -> Result<json::ProductMedia> {
    add_media(&db, &account, id, MediaKind::Video, media?.into_inner())
}

#[delete("/product-images/<id>")]
pub fn delete_product_image(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    let user = account.user(&db.shared()?)?;
    flows::delete_product_media(&db, &user, MediaKind::Image, id)?;
    Ok(Json(()))
}

#[delete("/product-videos/<id>")]
pub fn delete_product_video(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    let user = account.user(&db.shared()?)?;
    flows::delete_product_media(&db, &user, MediaKind::Video, id)?;
    Ok(Json(()))
}

#[post("/products/<id>/variants", format = "application/json", data = "<variant>")]
pub fn post_product_variant(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    variant: JsonResult<json::NewProductVariant>,
) -> Result<json::ProductVariant> {
    let json::NewProductVariant { name, price } = variant?.into_inner();
    let user = account.user(&db.shared()?)?;
    let variant = flows::add_product_variant(&db, &user, id, name, price)?;
    Ok(Json(variant.into()))
}

#[delete("/product-variants/<id>")]
pub fn delete_product_variant(db: sqlite::Connections, account: Account, id: &str) -> Result<()> {
    let user = account.user(&db.shared()?)?;
    flows::delete_product_variant(&db, &user, id)?;
    Ok(Json(()))
}
