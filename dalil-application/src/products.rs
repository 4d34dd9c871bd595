use super::*;

pub fn create_product(
    connections: &sqlite::Connections,
    user: &UserProfile,
    place_id: &str,
    new_product: usecases::NewProduct,
) -> Result<Product> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_product(conn, user, place_id, new_product, Timestamp::now()).map_err(
            |err| {
                log::warn!("Failed to create product of place {place_id}: {err}");
                err
            },
        )
    })?)
}

pub fn update_product(
    connections: &sqlite::Connections,
    user: &UserProfile,
    id: &str,
    update: usecases::UpdateProduct,
) -> Result<Product> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_product(conn, user, id, update))?)
}

pub fn delete_product(connections: &sqlite::Connections, user: &UserProfile, id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_product(conn, user, id))?;
    info!("Deleted product {id}");
    Ok(())
}

/// Attach media that has already been uploaded elsewhere.
pub fn add_product_media(
    connections: &sqlite::Connections,
    user: &UserProfile,
    product_id: &str,
    kind: MediaKind,
    url: Url,
) -> Result<ProductMedia> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_product_media(conn, user, product_id, kind, url, Timestamp::now())
    })?)
}

fn check_media_capacity(
    connections: &sqlite::Connections,
    user: &UserProfile,
    product_id: &str,
    kind: MediaKind,
) -> Result<()> {
    usecases::check_media_capacity(
        &connections.shared()?,
        user,
        product_id,
        kind,
        Timestamp::now(),
    )?;
    Ok(())
}

/// Upload an image to the image hosting service and attach it to the product.
pub fn upload_product_image(
    connections: &sqlite::Connections,
    image_hosting: &dyn ImageHostingGateway,
    user: &UserProfile,
    product_id: &str,
    file_name: &str,
    data: Vec<u8>,
) -> Result<ProductMedia> {
    check_media_capacity(connections, user, product_id, MediaKind::Image)?;
    let url = media::upload_image(image_hosting, file_name, data)?;
    add_product_media(connections, user, product_id, MediaKind::Image, url)
}

/// Upload a video with the shared video hosting account and attach it to the product.
pub fn upload_product_video(
    connections: &sqlite::Connections,
    video_hosting: &dyn VideoHostingGateway,
    user: &UserProfile,
    product_id: &str,
    title: &str,
    data: Vec<u8>,
) -> Result<ProductMedia> {
    check_media_capacity(connections, user, product_id, MediaKind::Video)?;
    let url = video::upload_video(connections, video_hosting, title, data)?;
    add_product_media(connections, user, product_id, MediaKind::Video, url)
}

pub fn delete_product_media(
    connections: &sqlite::Connections,
    user: &UserProfile,
    kind: MediaKind,
    id: &str,
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_product_media(conn, user, kind, id))?)
}

pub fn add_product_variant(
    connections: &sqlite::Connections,
    user: &UserProfile,
    product_id: &str,
    name: String,
    price: u64,
) -> Result<ProductVariant> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::add_product_variant(conn, user, product_id, name, price)
    })?)
}

pub fn delete_product_variant(
    connections: &sqlite::Connections,
    user: &UserProfile,
    id: &str,
) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_product_variant(conn, user, id))?)
}
