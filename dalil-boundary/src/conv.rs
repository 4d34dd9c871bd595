use super::*;
use dalil_entities as e;

impl From<e::user::UserProfile> for User {
    fn from(from: e::user::UserProfile) -> Self {
        let e::user::UserProfile {
            id,
            email,
            display_name,
            phone,
            is_admin,
            is_affiliate,
            created_at,
            password: _,
            video_tokens: _,
        } = from;
        Self {
            id: id.into(),
            email: email.into_string(),
            display_name,
            phone,
            is_admin,
            is_affiliate,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::place::PlaceViews> for PlaceViews {
    fn from(from: e::place::PlaceViews) -> Self {
        let e::place::PlaceViews { total, today, .. } = from;
        Self { total, today }
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            owner_id,
            subscription_id: _,
            name,
            description,
            category,
            city,
            address,
            pos,
            phones,
            whatsapp,
            logo_url,
            cover_url,
            is_active,
            views,
            created_at,
        } = from;
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            name,
            description,
            category,
            city,
            address,
            lat: pos.map(|p| p.lat()),
            lng: pos.map(|p| p.lng()),
            phones,
            whatsapp,
            logo_url: logo_url.map(|u| u.to_string()),
            cover_url: cover_url.map(|u| u.to_string()),
            is_active,
            views: views.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::product::Product> for Product {
    fn from(from: e::product::Product) -> Self {
        let e::product::Product {
            id,
            place_id,
            name,
            description,
            price,
            is_active,
            created_at,
        } = from;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            name,
            description,
            price: price.map(u64::from),
            is_active,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::product::ProductMedia> for ProductMedia {
    fn from(from: e::product::ProductMedia) -> Self {
        let e::product::ProductMedia {
            id,
            product_id,
            url,
            position,
        } = from;
        Self {
            id: id.into(),
            product_id: product_id.into(),
            url: url.into(),
            position,
        }
    }
}

impl From<e::product::ProductVariant> for ProductVariant {
    fn from(from: e::product::ProductVariant) -> Self {
        let e::product::ProductVariant {
            id,
            product_id,
            name,
            price,
        } = from;
        Self {
            id: id.into(),
            product_id: product_id.into(),
            name,
            price: price.into(),
        }
    }
}

impl From<e::message::Message> for Message {
    fn from(from: e::message::Message) -> Self {
        let e::message::Message {
            id,
            sender_id,
            recipient_id,
            place_id,
            product_id,
            reply_to,
            payload,
            is_read,
            created_at,
        } = from;
        let e::message::MessagePayload {
            text,
            image_url,
            audio_url,
        } = payload;
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            recipient_id: recipient_id.into(),
            place_id: place_id.into(),
            product_id: product_id.map(Into::into),
            reply_to: reply_to.map(Into::into),
            text,
            image_url: image_url.map(Into::into),
            audio_url: audio_url.map(Into::into),
            is_read,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::marketing::Affiliate> for Affiliate {
    fn from(from: e::marketing::Affiliate) -> Self {
        let e::marketing::Affiliate {
            id,
            user_id,
            code,
            commission_percent,
            discount_percent,
            usage_count,
            is_active,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            code,
            commission_percent: commission_percent.value(),
            discount_percent: discount_percent.value(),
            usage_count,
            is_active,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::marketing::DiscountCode> for DiscountCode {
    fn from(from: e::marketing::DiscountCode) -> Self {
        let e::marketing::DiscountCode {
            id,
            code,
            percent,
            max_uses,
            usage_count,
            is_active,
            expires_at,
            created_at,
        } = from;
        Self {
            id: id.into(),
            code,
            percent: percent.value(),
            max_uses,
            usage_count,
            is_active,
            expires_at: expires_at.map(e::time::Timestamp::as_millis),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::subscription::Package> for Package {
    fn from(from: e::subscription::Package) -> Self {
        let e::subscription::Package {
            id,
            name,
            description,
            price,
            duration_days,
            max_places,
            max_products_per_place,
            max_images_per_product,
            max_videos_per_product,
            is_active,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            price: price.into(),
            duration_days,
            max_places,
            max_products_per_place,
            max_images_per_product,
            max_videos_per_product,
            is_active,
        }
    }
}

impl From<e::subscription::Subscription> for Subscription {
    fn from(from: e::subscription::Subscription) -> Self {
        let e::subscription::Subscription {
            id,
            user_id,
            package_id,
            started_at,
            expires_at,
            paid_price,
            discount_code,
            affiliate_code,
            is_active,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            package_id: package_id.into(),
            started_at: started_at.as_millis(),
            expires_at: expires_at.as_millis(),
            paid_price: paid_price.into(),
            discount_code,
            affiliate_code,
            is_active,
        }
    }
}

impl From<e::employee::Permission> for Permission {
    fn from(from: e::employee::Permission) -> Self {
        use e::employee::Permission as E;
        match from {
            E::Basic => Self::Basic,
            E::MessagesPosts => Self::MessagesPosts,
            E::Full => Self::Full,
        }
    }
}

impl From<Permission> for e::employee::Permission {
    fn from(from: Permission) -> Self {
        match from {
            Permission::Basic => Self::Basic,
            Permission::MessagesPosts => Self::MessagesPosts,
            Permission::Full => Self::Full,
        }
    }
}

impl From<e::employee::RequestStatus> for RequestStatus {
    fn from(from: e::employee::RequestStatus) -> Self {
        use e::employee::RequestStatus as E;
        match from {
            E::Pending => Self::Pending,
            E::Accepted => Self::Accepted,
            E::Rejected => Self::Rejected,
        }
    }
}

impl From<e::employee::EmployeeRequest> for EmployeeRequest {
    fn from(from: e::employee::EmployeeRequest) -> Self {
        let e::employee::EmployeeRequest {
            id,
            place_id,
            user_id,
            note,
            status,
            created_at,
            decided_at,
        } = from;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            user_id: user_id.into(),
            note,
            status: status.into(),
            created_at: created_at.as_millis(),
            decided_at: decided_at.map(e::time::Timestamp::as_millis),
        }
    }
}

impl From<e::employee::PlaceEmployee> for PlaceEmployee {
    fn from(from: e::employee::PlaceEmployee) -> Self {
        let e::employee::PlaceEmployee {
            id,
            place_id,
            user_id,
            permission,
            created_at,
        } = from;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            user_id: user_id.into(),
            permission: permission.into(),
            created_at: created_at.as_millis(),
        }
    }
}
