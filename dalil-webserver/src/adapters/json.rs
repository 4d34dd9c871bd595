pub use dalil_boundary::*;

use dalil_core::{
    entities as e,
    gateways::geocode,
    usecases::{self, Error as ParameterError},
};

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    fn non_empty(s: Option<String>) -> Option<String> {
        s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
    }

    fn try_url(url: Option<String>) -> Result<Option<e::Url>, ParameterError> {
        Ok(non_empty(url).map(|url| url.parse::<e::Url>()).transpose()?)
    }

    pub fn try_new_user(new_user: NewUser) -> Result<usecases::NewUser, ParameterError> {
        let NewUser {
            email,
            password,
            display_name,
        } = new_user;
        Ok(usecases::NewUser {
            email: email.parse()?,
            password,
            display_name: non_empty(display_name),
        })
    }

    pub fn profile_update(update: ProfileUpdate) -> usecases::ProfileUpdate {
        let ProfileUpdate {
            display_name,
            phone,
        } = update;
        usecases::ProfileUpdate {
            display_name,
            phone,
        }
    }

    pub fn user_flags(flags: UserFlags) -> usecases::UserFlags {
        let UserFlags {
            is_admin,
            is_affiliate,
        } = flags;
        usecases::UserFlags {
            is_admin,
            is_affiliate,
        }
    }

    pub fn new_place(place: NewPlace) -> usecases::NewPlace {
        let NewPlace {
            name,
            description,
            category,
            city,
            address,
            lat,
            lng,
            phones,
            whatsapp,
            logo_url,
            cover_url,
        } = place;
        usecases::NewPlace {
            name,
            description: non_empty(description),
            category,
            city: non_empty(city),
            address: non_empty(address),
            lat,
            lng,
            phones,
            whatsapp: non_empty(whatsapp),
            logo_url,
            cover_url,
        }
    }

    pub fn new_product(product: NewProduct) -> usecases::NewProduct {
        let NewProduct {
            name,
            description,
            price,
        } = product;
        usecases::NewProduct {
            name,
            description: non_empty(description),
            price,
        }
    }

    pub fn update_product(product: UpdateProduct) -> usecases::UpdateProduct {
        let UpdateProduct {
            name,
            description,
            price,
            is_active,
        } = product;
        usecases::UpdateProduct {
            name,
            description: non_empty(description),
            price,
            is_active,
        }
    }

    pub fn try_new_message(message: NewMessage) -> Result<usecases::NewMessage, ParameterError> {
        let NewMessage {
            recipient_id,
            place_id,
            product_id,
            reply_to,
            text,
            image_url,
            audio_url,
        } = message;
        Ok(usecases::NewMessage {
            recipient_id,
            place_id,
            product_id: non_empty(product_id),
            reply_to: non_empty(reply_to),
            text,
            image_url: try_url(image_url)?,
            audio_url: try_url(audio_url)?,
        })
    }

    pub fn new_affiliate(affiliate: NewAffiliate) -> usecases::NewAffiliate {
        let NewAffiliate {
            user_id,
            code,
            commission_percent,
            discount_percent,
        } = affiliate;
        usecases::NewAffiliate {
            user_id,
            code,
            commission_percent,
            discount_percent,
        }
    }

    pub fn affiliate_update(update: AffiliateUpdate) -> usecases::AffiliateUpdate {
        let AffiliateUpdate {
            commission_percent,
            discount_percent,
        } = update;
        usecases::AffiliateUpdate {
            commission_percent,
            discount_percent,
        }
    }

    pub fn new_discount_code(code: NewDiscountCode) -> usecases::NewDiscountCode {
        let NewDiscountCode {
            code,
            percent,
            max_uses,
            expires_at,
        } = code;
        usecases::NewDiscountCode {
            code,
            percent,
            max_uses,
            expires_at: expires_at.map(e::Timestamp::from_millis),
        }
    }

    pub fn discount_code_update(update: DiscountCodeUpdate) -> usecases::DiscountCodeUpdate {
        let DiscountCodeUpdate {
            percent,
            max_uses,
            expires_at,
        } = update;
        usecases::DiscountCodeUpdate {
            percent,
            max_uses,
            expires_at: expires_at.map(e::Timestamp::from_millis),
        }
    }

    pub fn new_package(package: NewPackage) -> usecases::NewPackage {
        let NewPackage {
            name,
            description,
            price,
            duration_days,
            max_places,
            max_products_per_place,
            max_images_per_product,
            max_videos_per_product,
        } = package;
        usecases::NewPackage {
            name,
            description,
            price,
            duration_days,
            max_places,
            max_products_per_place,
            max_images_per_product,
            max_videos_per_product,
        }
    }
}

pub mod to_json {
    //! Use case results -> JSON

    use super::*;

    pub fn conversation(from: usecases::Conversation) -> Conversation {
        let usecases::Conversation {
            counterparty_id,
            place_id,
            last_message,
            unread_count,
        } = from;
        Conversation {
            counterparty_id: counterparty_id.into(),
            place_id: place_id.into(),
            last_message: last_message.into(),
            unread_count,
        }
    }

    pub fn product_details(from: usecases::ProductDetails) -> ProductDetails {
        let usecases::ProductDetails {
            product,
            images,
            videos,
            variants,
        } = from;
        ProductDetails {
            product: product.into(),
            images: images.into_iter().map(Into::into).collect(),
            videos: videos.into_iter().map(Into::into).collect(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn stats(from: usecases::Stats) -> Stats {
        let usecases::Stats {
            users,
            places,
            active_places,
            products,
            active_subscriptions,
        } = from;
        Stats {
            users,
            places,
            active_places,
            products,
            active_subscriptions,
        }
    }

    pub fn resolved_address(from: geocode::ResolvedAddress) -> ResolvedAddress {
        let geocode::ResolvedAddress {
            display_name,
            street,
            house_number,
            zip,
            city,
            country,
        } = from;
        ResolvedAddress {
            display_name,
            street,
            house_number,
            zip,
            city,
            country,
        }
    }

    pub fn active_subscription(
        (subscription, package): (e::Subscription, e::Package),
    ) -> ActiveSubscription {
        ActiveSubscription {
            subscription: subscription.into(),
            package: package.into(),
        }
    }

    pub fn employee_place((place, permission): (e::Place, e::Permission)) -> EmployeePlace {
        EmployeePlace {
            place: place.into(),
            permission: permission.into(),
        }
    }

    /// Views of a place where the daily counter refers to the current day.
    pub fn place_views(views: e::PlaceViews, now: e::Timestamp) -> PlaceViews {
        PlaceViews {
            total: views.total,
            today: views.today_at(now),
        }
    }
}
