///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        email -> Text,
        password -> Text,
        display_name -> Nullable<Text>,
        phone -> Nullable<Text>,
        is_admin -> Bool,
        is_affiliate -> Bool,
        video_access_token -> Nullable<Text>,
        video_refresh_token -> Nullable<Text>,
        video_token_expires_at -> Nullable<BigInt>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Packages & subscriptions
///////////////////////////////////////////////////////////////////////

table! {
    packages (id) {
        id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        price -> BigInt,
        duration_days -> Integer,
        max_places -> Integer,
        max_products_per_place -> Integer,
        max_images_per_product -> Integer,
        max_videos_per_product -> Integer,
        is_active -> Bool,
    }
}

table! {
    subscriptions (id) {
        id -> Text,
        user_id -> Text,
        package_id -> Text,
        started_at -> BigInt,
        expires_at -> BigInt,
        paid_price -> BigInt,
        discount_code -> Nullable<Text>,
        affiliate_code -> Nullable<Text>,
        is_active -> Bool,
    }
}

joinable!(subscriptions -> users (user_id));
joinable!(subscriptions -> packages (package_id));

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    places (id) {
        id -> Text,
        owner_id -> Text,
        subscription_id -> Nullable<Text>,
        name -> Text,
        description -> Nullable<Text>,
        category -> Text,
        city -> Nullable<Text>,
        address -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        phones -> Text,
        whatsapp -> Nullable<Text>,
        logo_url -> Nullable<Text>,
        cover_url -> Nullable<Text>,
        is_active -> Bool,
        views_total -> BigInt,
        views_today -> BigInt,
        views_day -> BigInt,
        created_at -> BigInt,
    }
}

joinable!(places -> users (owner_id));

///////////////////////////////////////////////////////////////////////
// Products
///////////////////////////////////////////////////////////////////////

table! {
    products (id) {
        id -> Text,
        place_id -> Text,
        name -> Text,
        description -> Nullable<Text>,
        price -> Nullable<BigInt>,
        is_active -> Bool,
        created_at -> BigInt,
    }
}

joinable!(products -> places (place_id));

table! {
    product_images (id) {
        id -> Text,
        product_id -> Text,
        url -> Text,
        position -> Integer,
    }
}

table! {
    product_videos (id) {
        id -> Text,
        product_id -> Text,
        url -> Text,
        position -> Integer,
    }
}

table! {
    product_variants (id) {
        id -> Text,
        product_id -> Text,
        name -> Text,
        price -> BigInt,
    }
}

joinable!(product_images -> products (product_id));
joinable!(product_videos -> products (product_id));
joinable!(product_variants -> products (product_id));

///////////////////////////////////////////////////////////////////////
// Messages
///////////////////////////////////////////////////////////////////////

table! {
    messages (id) {
        id -> Text,
        sender_id -> Text,
        recipient_id -> Text,
        place_id -> Text,
        product_id -> Nullable<Text>,
        reply_to -> Nullable<Text>,
        text -> Nullable<Text>,
        image_url -> Nullable<Text>,
        audio_url -> Nullable<Text>,
        is_read -> Bool,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Marketing
///////////////////////////////////////////////////////////////////////

table! {
    affiliates (id) {
        id -> Text,
        user_id -> Text,
        code -> Text,
        commission_percent -> SmallInt,
        discount_percent -> SmallInt,
        usage_count -> Integer,
        is_active -> Bool,
        created_at -> BigInt,
    }
}

joinable!(affiliates -> users (user_id));

table! {
    discount_codes (id) {
        id -> Text,
        code -> Text,
        percent -> SmallInt,
        max_uses -> Nullable<Integer>,
        usage_count -> Integer,
        is_active -> Bool,
        expires_at -> Nullable<BigInt>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Employees
///////////////////////////////////////////////////////////////////////

table! {
    employee_requests (id) {
        id -> Text,
        place_id -> Text,
        user_id -> Text,
        note -> Nullable<Text>,
        status -> SmallInt,
        created_at -> BigInt,
        decided_at -> Nullable<BigInt>,
    }
}

table! {
    place_employees (id) {
        id -> Text,
        place_id -> Text,
        user_id -> Text,
        permission -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(employee_requests -> places (place_id));
joinable!(place_employees -> places (place_id));

allow_tables_to_appear_in_same_query!(
    users,
    packages,
    subscriptions,
    places,
    products,
    product_images,
    product_videos,
    product_variants,
    messages,
    affiliates,
    discount_codes,
    employee_requests,
    place_employees,
);
