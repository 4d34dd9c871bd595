use super::{authorize::authorize_admin, prelude::*, validate_name};

#[derive(Debug, Clone)]
pub struct NewPackage {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub duration_days: u32,
    pub max_places: u32,
    pub max_products_per_place: u32,
    pub max_images_per_product: u32,
    pub max_videos_per_product: u32,
}

fn apply_fields(package: &mut Package, fields: NewPackage) -> Result<()> {
    let NewPackage {
        name,
        description,
        price,
        duration_days,
        max_places,
        max_products_per_place,
        max_images_per_product,
        max_videos_per_product,
    } = fields;
    if duration_days == 0 {
        return Err(Error::InvalidDuration);
    }
    package.name = validate_name(name)?;
    package.description = description
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty());
    package.price = super::validate_price(price)?;
    package.duration_days = duration_days;
    package.max_places = max_places;
    package.max_products_per_place = max_products_per_place;
    package.max_images_per_product = max_images_per_product;
    package.max_videos_per_product = max_videos_per_product;
    Ok(())
}

pub fn create_package<R>(repo: &R, account: &UserProfile, new_package: NewPackage) -> Result<Package>
where
    R: PackageRepo,
{
    authorize_admin(account)?;
    let mut package = Package {
        id: Id::new(),
        name: String::new(),
        description: None,
        price: Price::default(),
        duration_days: 0,
        max_places: 0,
        max_products_per_place: 0,
        max_images_per_product: 0,
        max_videos_per_product: 0,
        is_active: true,
    };
    apply_fields(&mut package, new_package)?;
    repo.create_package(&package)?;
    Ok(package)
}

pub fn update_package<R>(
    repo: &R,
    account: &UserProfile,
    id: &str,
    fields: NewPackage,
) -> Result<Package>
where
    R: PackageRepo,
{
    authorize_admin(account)?;
    let mut package = repo.get_package(id)?;
    apply_fields(&mut package, fields)?;
    repo.update_package(&package)?;
    Ok(package)
}

pub fn set_package_active<R>(
    repo: &R,
    account: &UserProfile,
    id: &str,
    active: bool,
) -> Result<Package>
where
    R: PackageRepo,
{
    authorize_admin(account)?;
    let mut package = repo.get_package(id)?;
    package.is_active = active;
    repo.update_package(&package)?;
    Ok(package)
}

/// Packages that can be subscribed to, cheapest first.
pub fn active_packages<R>(repo: &R) -> Result<Vec<Package>>
where
    R: PackageRepo,
{
    let mut packages: Vec<_> = repo
        .all_packages()?
        .into_iter()
        .filter(|p| p.is_active)
        .collect();
    packages.sort_by_key(|p| p.price);
    Ok(packages)
}

pub fn all_packages<R>(repo: &R, account: &UserProfile) -> Result<Vec<Package>>
where
    R: PackageRepo,
{
    authorize_admin(account)?;
    Ok(repo.all_packages()?)
}
