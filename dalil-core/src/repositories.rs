// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Pagination {
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0) as usize;
        let iter = items.into_iter().skip(offset);
        match self.limit {
            Some(limit) => iter.take(limit as usize).collect(),
            None => iter.collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaceQuery {
    /// Case-insensitive substring of name or description
    pub text: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub include_inactive: bool,
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring of name or description
    pub text: Option<String>,
    pub place_id: Option<Id>,
    pub limit: Option<usize>,
}

pub trait UserRepo {
    fn create_user(&self, user: &UserProfile) -> Result<()>;
    fn update_user(&self, user: &UserProfile) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<UserProfile>;
    fn get_user_by_email(&self, email: &EmailAddress) -> Result<UserProfile>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<UserProfile>>;

    fn all_users(&self, pagination: &Pagination) -> Result<Vec<UserProfile>>;
    fn count_users(&self) -> Result<usize>;

    /// The admin profile that holds the shared video hosting tokens.
    fn find_admin_with_video_tokens(&self) -> Result<Option<UserProfile>>;
}

pub trait PlaceRepo {
    fn create_place(&self, place: &Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;
    fn all_places(&self) -> Result<Vec<Place>>;
    fn places_of_owner(&self, owner_id: &str) -> Result<Vec<Place>>;
    fn count_places_of_owner(&self, owner_id: &str) -> Result<usize>;
    fn count_places(&self, only_active: bool) -> Result<usize>;

    fn search_places(&self, query: &PlaceQuery) -> Result<Vec<Place>>;

    /// Count a single view and return the updated counters.
    fn record_place_view(&self, id: &str, now: Timestamp) -> Result<PlaceViews>;
    fn set_place_active(&self, id: &str, active: bool) -> Result<()>;
}

pub trait ProductRepo {
    fn create_product(&self, product: &Product) -> Result<()>;
    fn update_product(&self, product: &Product) -> Result<()>;
    // Also deletes all media and variants of the product
    fn delete_product(&self, id: &str) -> Result<()>;

    fn get_product(&self, id: &str) -> Result<Product>;
    fn products_of_place(&self, place_id: &str) -> Result<Vec<Product>>;
    fn count_products_of_place(&self, place_id: &str) -> Result<usize>;
    fn count_products(&self) -> Result<usize>;

    // Only active products of active places
    fn search_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;

    fn add_product_media(&self, kind: MediaKind, media: &ProductMedia) -> Result<()>;
    fn delete_product_media(&self, kind: MediaKind, id: &str) -> Result<()>;
    fn get_product_media(&self, kind: MediaKind, id: &str) -> Result<ProductMedia>;
    // Ordered by position
    fn product_media(&self, kind: MediaKind, product_id: &str) -> Result<Vec<ProductMedia>>;
    fn count_product_media(&self, kind: MediaKind, product_id: &str) -> Result<usize>;

    fn add_product_variant(&self, variant: &ProductVariant) -> Result<()>;
    fn delete_product_variant(&self, id: &str) -> Result<()>;
    fn get_product_variant(&self, id: &str) -> Result<ProductVariant>;
    fn product_variants(&self, product_id: &str) -> Result<Vec<ProductVariant>>;
}

pub trait MessageRepo {
    fn create_message(&self, message: &Message) -> Result<()>;
    fn get_message(&self, id: &str) -> Result<Message>;

    // Sent or received by the user
    fn messages_of_user(&self, user_id: &str) -> Result<Vec<Message>>;
    fn messages_of_place(&self, place_id: &str) -> Result<Vec<Message>>;

    /// Mark all unread messages from `sender_id` to `recipient_id`
    /// concerning the given place as read.
    fn mark_messages_read(&self, recipient_id: &str, sender_id: &str, place_id: &str)
        -> Result<usize>;
}

pub trait AffiliateRepo {
    fn create_affiliate(&self, affiliate: &Affiliate) -> Result<()>;
    fn update_affiliate(&self, affiliate: &Affiliate) -> Result<()>;
    fn get_affiliate(&self, id: &str) -> Result<Affiliate>;
    fn try_get_affiliate_by_code(&self, code: &str) -> Result<Option<Affiliate>>;
    fn all_affiliates(&self) -> Result<Vec<Affiliate>>;
}

pub trait DiscountCodeRepo {
    fn create_discount_code(&self, code: &DiscountCode) -> Result<()>;
    fn update_discount_code(&self, code: &DiscountCode) -> Result<()>;
    fn get_discount_code(&self, id: &str) -> Result<DiscountCode>;
    fn try_get_discount_code_by_code(&self, code: &str) -> Result<Option<DiscountCode>>;
    fn all_discount_codes(&self) -> Result<Vec<DiscountCode>>;
}

pub trait PackageRepo {
    fn create_package(&self, package: &Package) -> Result<()>;
    fn update_package(&self, package: &Package) -> Result<()>;
    fn get_package(&self, id: &str) -> Result<Package>;
    fn all_packages(&self) -> Result<Vec<Package>>;
}

pub trait SubscriptionRepo {
    fn create_subscription(&self, subscription: &Subscription) -> Result<()>;
    fn update_subscription(&self, subscription: &Subscription) -> Result<()>;
    fn get_subscription(&self, id: &str) -> Result<Subscription>;
    // Newest first
    fn subscriptions_of_user(&self, user_id: &str) -> Result<Vec<Subscription>>;
    fn count_active_subscriptions(&self, now: Timestamp) -> Result<usize>;

    /// Deactivate all active subscriptions that expired before `now`.
    fn expire_subscriptions(&self, now: Timestamp) -> Result<usize>;
}

pub trait EmployeeRepo {
    fn create_employee_request(&self, request: &EmployeeRequest) -> Result<()>;
    fn update_employee_request(&self, request: &EmployeeRequest) -> Result<()>;
    fn get_employee_request(&self, id: &str) -> Result<EmployeeRequest>;
    fn employee_requests_of_place(&self, place_id: &str) -> Result<Vec<EmployeeRequest>>;
    fn employee_requests_of_user(&self, user_id: &str) -> Result<Vec<EmployeeRequest>>;

    fn create_employee(&self, employee: &PlaceEmployee) -> Result<()>;
    fn update_employee(&self, employee: &PlaceEmployee) -> Result<()>;
    fn delete_employee(&self, id: &str) -> Result<()>;
    fn get_employee(&self, id: &str) -> Result<PlaceEmployee>;
    fn employees_of_place(&self, place_id: &str) -> Result<Vec<PlaceEmployee>>;
    fn employments_of_user(&self, user_id: &str) -> Result<Vec<PlaceEmployee>>;
    fn try_get_employee(&self, place_id: &str, user_id: &str) -> Result<Option<PlaceEmployee>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate() {
        let items = vec![1, 2, 3, 4, 5];
        let p = Pagination {
            offset: Some(1),
            limit: Some(2),
        };
        assert_eq!(vec![2, 3], p.apply(items.clone()));
        assert_eq!(items, Pagination::default().apply(items.clone()));
        let p = Pagination {
            offset: Some(10),
            limit: None,
        };
        assert!(p.apply(items).is_empty());
    }
}
