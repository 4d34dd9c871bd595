use crate::{id::Id, price::Price, time::Timestamp};

/// A pricing tier.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id                     : Id,
    pub name                   : String,
    pub description            : Option<String>,
    pub price                  : Price,
    pub duration_days          : u32,
    pub max_places             : u32,
    pub max_products_per_place : u32,
    pub max_images_per_product : u32,
    pub max_videos_per_product : u32,
    pub is_active              : bool,
}

/// The join between a user and a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: Id,
    pub user_id: Id,
    pub package_id: Id,
    pub started_at: Timestamp,
    pub expires_at: Timestamp,
    pub paid_price: Price,
    pub discount_code: Option<String>,
    pub affiliate_code: Option<String>,
    pub is_active: bool,
}

impl Subscription {
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        self.is_active && self.started_at <= now && now < self.expires_at
    }
}
