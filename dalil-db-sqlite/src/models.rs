#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub display_name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub is_admin: bool,
    pub is_affiliate: bool,
    pub video_access_token: Option<&'a str>,
    pub video_refresh_token: Option<&'a str>,
    pub video_token_expires_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub is_admin: bool,
    pub is_affiliate: bool,
    pub video_access_token: Option<String>,
    pub video_refresh_token: Option<String>,
    pub video_token_expires_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = packages, treat_none_as_null = true)]
pub struct NewPackage<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: i64,
    pub duration_days: i32,
    pub max_places: i32,
    pub max_products_per_place: i32,
    pub max_images_per_product: i32,
    pub max_videos_per_product: i32,
    pub is_active: bool,
}

#[derive(Queryable)]
pub struct PackageEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub duration_days: i32,
    pub max_places: i32,
    pub max_products_per_place: i32,
    pub max_images_per_product: i32,
    pub max_videos_per_product: i32,
    pub is_active: bool,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = subscriptions, treat_none_as_null = true)]
pub struct NewSubscription<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub package_id: &'a str,
    pub started_at: i64,
    pub expires_at: i64,
    pub paid_price: i64,
    pub discount_code: Option<&'a str>,
    pub affiliate_code: Option<&'a str>,
    pub is_active: bool,
}

#[derive(Queryable)]
pub struct SubscriptionEntity {
    pub id: String,
    pub user_id: String,
    pub package_id: String,
    pub started_at: i64,
    pub expires_at: i64,
    pub paid_price: i64,
    pub discount_code: Option<String>,
    pub affiliate_code: Option<String>,
    pub is_active: bool,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places, treat_none_as_null = true)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub owner_id: &'a str,
    pub subscription_id: Option<&'a str>,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: &'a str,
    pub city: Option<&'a str>,
    pub address: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phones: String,
    pub whatsapp: Option<&'a str>,
    pub logo_url: Option<&'a str>,
    pub cover_url: Option<&'a str>,
    pub is_active: bool,
    pub views_total: i64,
    pub views_today: i64,
    pub views_day: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PlaceEntity {
    pub id: String,
    pub owner_id: String,
    pub subscription_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phones: String,
    pub whatsapp: Option<String>,
    pub logo_url: Option<String>,
    pub cover_url: Option<String>,
    pub is_active: bool,
    pub views_total: i64,
    pub views_today: i64,
    pub views_day: i64,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = products, treat_none_as_null = true)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub place_id: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct ProductEntity {
    pub id: String,
    pub place_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = product_images)]
pub struct NewProductImage<'a> {
    pub id: &'a str,
    pub product_id: &'a str,
    pub url: &'a str,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = product_videos)]
pub struct NewProductVideo<'a> {
    pub id: &'a str,
    pub product_id: &'a str,
    pub url: &'a str,
    pub position: i32,
}

// Images and videos share the same columns
#[derive(Queryable)]
pub struct ProductMediaEntity {
    pub id: String,
    pub product_id: String,
    pub url: String,
    pub position: i32,
}

#[derive(Insertable)]
#[diesel(table_name = product_variants)]
pub struct NewProductVariant<'a> {
    pub id: &'a str,
    pub product_id: &'a str,
    pub name: &'a str,
    pub price: i64,
}

#[derive(Queryable)]
pub struct ProductVariantEntity {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: i64,
}

#[derive(Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessage<'a> {
    pub id: &'a str,
    pub sender_id: &'a str,
    pub recipient_id: &'a str,
    pub place_id: &'a str,
    pub product_id: Option<&'a str>,
    pub reply_to: Option<&'a str>,
    pub text: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub audio_url: Option<&'a str>,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct MessageEntity {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub place_id: String,
    pub product_id: Option<String>,
    pub reply_to: Option<String>,
    pub text: Option<String>,
    pub image_url: Option<String>,
    pub audio_url: Option<String>,
    pub is_read: bool,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = affiliates)]
pub struct NewAffiliate<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub code: &'a str,
    pub commission_percent: i16,
    pub discount_percent: i16,
    pub usage_count: i32,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct AffiliateEntity {
    pub id: String,
    pub user_id: String,
    pub code: String,
    pub commission_percent: i16,
    pub discount_percent: i16,
    pub usage_count: i32,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = discount_codes, treat_none_as_null = true)]
pub struct NewDiscountCode<'a> {
    pub id: &'a str,
    pub code: &'a str,
    pub percent: i16,
    pub max_uses: Option<i32>,
    pub usage_count: i32,
    pub is_active: bool,
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct DiscountCodeEntity {
    pub id: String,
    pub code: String,
    pub percent: i16,
    pub max_uses: Option<i32>,
    pub usage_count: i32,
    pub is_active: bool,
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = employee_requests, treat_none_as_null = true)]
pub struct NewEmployeeRequest<'a> {
    pub id: &'a str,
    pub place_id: &'a str,
    pub user_id: &'a str,
    pub note: Option<&'a str>,
    pub status: i16,
    pub created_at: i64,
    pub decided_at: Option<i64>,
}

#[derive(Queryable)]
pub struct EmployeeRequestEntity {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub note: Option<String>,
    pub status: i16,
    pub created_at: i64,
    pub decided_at: Option<i64>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = place_employees)]
pub struct NewPlaceEmployee<'a> {
    pub id: &'a str,
    pub place_id: &'a str,
    pub user_id: &'a str,
    pub permission: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct PlaceEmployeeEntity {
    pub id: String,
    pub place_id: String,
    pub user_id: String,
    pub permission: i16,
    pub created_at: i64,
}
