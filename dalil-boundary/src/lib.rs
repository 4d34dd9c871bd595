use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

// Timestamps are milliseconds since the unix epoch (UTC).

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_admin: bool,
    pub is_affiliate: bool,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ProfileUpdate {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct UserFlags {
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub is_affiliate: Option<bool>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct ActiveFlag {
    pub is_active: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPlace {
    pub name        : String,
    #[serde(default)]
    pub description : Option<String>,
    pub category    : String,
    #[serde(default)]
    pub city        : Option<String>,
    #[serde(default)]
    pub address     : Option<String>,
    #[serde(default)]
    pub lat         : Option<f64>,
    #[serde(default)]
    pub lng         : Option<f64>,
    #[serde(default)]
    pub phones      : Vec<String>,
    #[serde(default)]
    pub whatsapp    : Option<String>,
    #[serde(default)]
    pub logo_url    : Option<String>,
    #[serde(default)]
    pub cover_url   : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct PlaceViews {
    pub total: u64,
    pub today: u64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Place {
    pub id          : String,
    pub owner_id    : String,
    pub name        : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    pub category    : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address     : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat         : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng         : Option<f64>,
    pub phones      : Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url    : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url   : Option<String>,
    pub is_active   : bool,
    pub views       : PlaceViews,
    pub created_at  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct EmployeePlace {
    pub place: Place,
    pub permission: Permission,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Product {
    pub id: String,
    pub place_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ProductMedia {
    pub id: String,
    pub product_id: String,
    pub url: String,
    pub position: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewProductMedia {
    pub url: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewProductVariant {
    pub name: String,
    pub price: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ProductVariant {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ProductDetails {
    pub product: Product,
    pub images: Vec<ProductMedia>,
    pub videos: Vec<ProductMedia>,
    pub variants: Vec<ProductVariant>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewMessage {
    pub recipient_id: String,
    pub place_id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub reply_to: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub place_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Conversation {
    pub counterparty_id: String,
    pub place_id: String,
    pub last_message: Message,
    pub unread_count: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct ReadReceipt {
    pub marked_as_read: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewAffiliate {
    pub user_id: String,
    pub code: String,
    pub commission_percent: i64,
    pub discount_percent: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct AffiliateUpdate {
    pub commission_percent: i64,
    pub discount_percent: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Affiliate {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub commission_percent: u8,
    pub discount_percent: u8,
    pub usage_count: u32,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewDiscountCode {
    pub code: String,
    pub percent: i64,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct DiscountCodeUpdate {
    pub percent: i64,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct DiscountCode {
    pub id: String,
    pub code: String,
    pub percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    pub usage_count: u32,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewPackage {
    pub name                   : String,
    #[serde(default)]
    pub description            : Option<String>,
    pub price                  : u64,
    pub duration_days          : u32,
    pub max_places             : u32,
    pub max_products_per_place : u32,
    pub max_images_per_product : u32,
    pub max_videos_per_product : u32,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Package {
    pub id                     : String,
    pub name                   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description            : Option<String>,
    pub price                  : u64,
    pub duration_days          : u32,
    pub max_places             : u32,
    pub max_products_per_place : u32,
    pub max_images_per_product : u32,
    pub max_videos_per_product : u32,
    pub is_active              : bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewSubscription {
    pub package_id: String,
    #[serde(default)]
    pub promo_code: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub package_id: String,
    pub started_at: i64,
    pub expires_at: i64,
    pub paid_price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_code: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ActiveSubscription {
    pub subscription: Subscription,
    pub package: Package,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Basic,
    MessagesPosts,
    Full,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEmployeeRequest {
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct EmployeeRequest {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: RequestStatus,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct PermissionUpdate {
    pub permission: Permission,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PlaceEmployee {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub permission: Permission,
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct Stats {
    pub users: usize,
    pub places: usize,
    pub active_places: usize,
    pub products: usize,
    pub active_subscriptions: usize,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ResolvedAddress {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// The public URL of an uploaded file.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UploadedFile {
    pub url: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AuthorizationUrl {
    pub url: String,
}

/// The shape of every error response.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
    /// User-facing text in Arabic
    pub message_ar: String,
}
