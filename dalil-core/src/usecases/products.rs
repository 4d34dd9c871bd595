use super::{
    authorize::{authorize_place_access, is_privileged},
    prelude::*,
    subscriptions::package_of_owner,
    validate_name,
};

#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub is_active: bool,
}

/// Load the product and its place and check that the user
/// may manage the products of the place.
pub(crate) fn load_managed_product<R>(
    repo: &R,
    user: &UserProfile,
    product_id: &str,
) -> Result<(Product, Place)>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo + ?Sized,
{
    let product = repo.get_product(product_id)?;
    let place = repo.get_place(product.place_id.as_str())?;
    authorize_place_access(repo, user, &place, Permission::MessagesPosts)?;
    Ok((product, place))
}

pub fn create_product<R>(
    repo: &R,
    user: &UserProfile,
    place_id: &str,
    new_product: NewProduct,
    now: Timestamp,
) -> Result<Product>
where
    R: Db,
{
    let place = repo.get_place(place_id)?;
    authorize_place_access(repo, user, &place, Permission::MessagesPosts)?;
    if let Some(package) = package_of_owner(repo, place.owner_id.as_str(), now)? {
        let count = repo.count_products_of_place(place_id)?;
        if count >= package.max_products_per_place as usize {
            return Err(Error::MaxProductsReached);
        }
    }
    let NewProduct {
        name,
        description,
        price,
    } = new_product;
    let product = Product {
        id: Id::new(),
        place_id: place.id,
        name: validate_name(name)?,
        description: description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty()),
        price: price.map(super::validate_price).transpose()?,
        is_active: true,
        created_at: now,
    };
    repo.create_product(&product)?;
    Ok(product)
}

pub fn update_product<R>(
    repo: &R,
    user: &UserProfile,
    id: &str,
    update: UpdateProduct,
) -> Result<Product>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let (mut product, _) = load_managed_product(repo, user, id)?;
    let UpdateProduct {
        name,
        description,
        price,
        is_active,
    } = update;
    product.name = validate_name(name)?;
    product.description = description
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty());
    product.price = price.map(super::validate_price).transpose()?;
    product.is_active = is_active;
    repo.update_product(&product)?;
    Ok(product)
}

pub fn delete_product<R>(repo: &R, user: &UserProfile, id: &str) -> Result<()>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let (product, _) = load_managed_product(repo, user, id)?;
    log::debug!("Deleting product {}", product.id);
    repo.delete_product(id)?;
    Ok(())
}

/// A product with all of its media and variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub product: Product,
    pub images: Vec<ProductImage>,
    pub videos: Vec<ProductVideo>,
    pub variants: Vec<ProductVariant>,
}

pub fn get_product<R>(repo: &R, viewer: Option<&UserProfile>, id: &str) -> Result<ProductDetails>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let product = repo.get_product(id)?;
    let place = repo.get_place(product.place_id.as_str())?;
    if !(product.is_active && place.is_active) && !is_privileged(repo, viewer, &place)? {
        return Err(RepoError::NotFound.into());
    }
    Ok(ProductDetails {
        images: repo.product_media(MediaKind::Image, id)?,
        videos: repo.product_media(MediaKind::Video, id)?,
        variants: repo.product_variants(id)?,
        product,
    })
}

/// Products of a place as visible to the viewer.
pub fn products_of_place<R>(
    repo: &R,
    viewer: Option<&UserProfile>,
    place_id: &str,
) -> Result<Vec<Product>>
where
    R: ProductRepo + PlaceRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    let privileged = is_privileged(repo, viewer, &place)?;
    if !place.is_active && !privileged {
        return Err(RepoError::NotFound.into());
    }
    Ok(repo
        .products_of_place(place_id)?
        .into_iter()
        .filter(|p| privileged || p.is_active)
        .collect())
}

pub fn search_products<R>(repo: &R, query: &ProductQuery) -> Result<Vec<Product>>
where
    R: ProductRepo,
{
    if query.limit == Some(0) {
        return Err(Error::InvalidLimit);
    }
    Ok(repo.search_products(query)?)
}
