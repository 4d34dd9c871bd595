use super::{prelude::*, products::load_managed_product, subscriptions::package_of_owner};

/// Check that the user may attach another media of the given kind.
///
/// Returns the product and the position of the next media.
pub fn check_media_capacity<R>(
    repo: &R,
    user: &UserProfile,
    product_id: &str,
    kind: MediaKind,
    now: Timestamp,
) -> Result<(Product, u32)>
where
    R: Db,
{
    let (product, place) = load_managed_product(repo, user, product_id)?;
    let count = repo.count_product_media(kind, product_id)?;
    if let Some(package) = package_of_owner(repo, place.owner_id.as_str(), now)? {
        let (max, err) = match kind {
            MediaKind::Image => (package.max_images_per_product, Error::MaxImagesReached),
            MediaKind::Video => (package.max_videos_per_product, Error::MaxVideosReached),
        };
        if count >= max as usize {
            return Err(err);
        }
    }
    Ok((product, count as u32))
}

/// Attach an already uploaded image or video to a product.
///
/// The URL is stored as is and the media is appended after
/// all existing media of the same kind.
pub fn add_product_media<R>(
    repo: &R,
    user: &UserProfile,
    product_id: &str,
    kind: MediaKind,
    url: Url,
    now: Timestamp,
) -> Result<ProductMedia>
where
    R: Db,
{
    let (product, position) = check_media_capacity(repo, user, product_id, kind, now)?;
    let media = ProductMedia {
        id: Id::new(),
        product_id: product.id,
        url,
        position,
    };
    repo.add_product_media(kind, &media)?;
    Ok(media)
}

pub fn add_product_image<R: Db>(
    repo: &R,
    user: &UserProfile,
    product_id: &str,
    url: Url,
    now: Timestamp,
) -> Result<ProductImage> {
    add_product_media(repo, user, product_id, MediaKind::Image, url, now)
}

pub fn add_product_video<R: Db>(
    repo: &R,
    user: &UserProfile,
    product_id: &str,
    url: Url,
    now: Timestamp,
) -> Result<ProductVideo> {
    add_product_media(repo, user, product_id, MediaKind::Video, url, now)
}

pub fn delete_product_media<R>(
    repo: &R,
    user: &UserProfile,
    kind: MediaKind,
    id: &str,
) -> Result<()>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let media = repo.get_product_media(kind, id)?;
    load_managed_product(repo, user, media.product_id.as_str())?;
    repo.delete_product_media(kind, id)?;
    Ok(())
}

pub fn add_product_variant<R>(
    repo: &R,
    user: &UserProfile,
    product_id: &str,
    name: String,
    price: u64,
) -> Result<ProductVariant>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let (product, _) = load_managed_product(repo, user, product_id)?;
    let variant = ProductVariant {
        id: Id::new(),
        product_id: product.id,
        name: super::validate_name(name)?,
        price: super::validate_price(price)?,
    };
    repo.add_product_variant(&variant)?;
    Ok(variant)
}

pub fn delete_product_variant<R>(repo: &R, user: &UserProfile, id: &str) -> Result<()>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let variant = repo.get_product_variant(id)?;
    load_managed_product(repo, user, variant.product_id.as_str())?;
    repo.delete_product_variant(id)?;
    Ok(())
}
