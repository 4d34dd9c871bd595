use crate::{id::Id, price::Price, time::Timestamp, url::Url};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Id,
    pub place_id: Id,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Media attached to a product, ordered by `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductMedia {
    pub id: Id,
    pub product_id: Id,
    pub url: Url,
    pub position: u32,
}

pub type ProductImage = ProductMedia;
pub type ProductVideo = ProductMedia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductVariant {
    pub id: Id,
    pub product_id: Id,
    pub name: String,
    pub price: Price,
}
