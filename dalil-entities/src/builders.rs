pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    message_builder::*, package_builder::*, place_builder::*, product_builder::*,
    user_builder::*,
};

pub mod place_builder {

    use super::*;
    use crate::{geo::*, id::*, place::*, time::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn owner(mut self, owner_id: &str) -> Self {
            self.place.owner_id = owner_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = Some(desc.into());
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = category.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.place.city = Some(city.into());
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = Some(pos);
            self
        }
        pub fn active(mut self, is_active: bool) -> Self {
            self.place.is_active = is_active;
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            PlaceBuild {
                place: Place {
                    id: Id::new(),
                    owner_id: Id::new(),
                    subscription_id: None,
                    name: "".into(),
                    description: None,
                    category: "shop".into(),
                    city: None,
                    address: None,
                    pos: None,
                    phones: vec![],
                    whatsapp: None,
                    logo_url: None,
                    cover_url: None,
                    is_active: true,
                    views: PlaceViews::default(),
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: UserProfile,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn admin(mut self) -> Self {
            self.user.is_admin = true;
            self
        }
        pub fn affiliate(mut self) -> Self {
            self.user.is_affiliate = true;
            self
        }
        pub fn video_tokens(mut self, tokens: OAuthTokens) -> Self {
            self.user.video_tokens = Some(tokens);
            self
        }
        pub fn finish(self) -> UserProfile {
            self.user
        }
    }

    impl Builder for UserProfile {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: UserProfile {
                    id: Id::new(),
                    email: EmailAddress::new_unchecked("user@example.com".into()),
                    // Hashing is expensive, so builders use a fixed hash
                    password: Password::from_hash(String::new()),
                    display_name: None,
                    phone: None,
                    is_admin: false,
                    is_affiliate: false,
                    video_tokens: None,
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod message_builder {

    use super::*;
    use crate::{id::*, message::*, time::*};

    #[derive(Debug)]
    pub struct MessageBuild {
        message: Message,
    }

    impl MessageBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.message.id = id.into();
            self
        }
        pub fn from(mut self, sender_id: &str) -> Self {
            self.message.sender_id = sender_id.into();
            self
        }
        pub fn to(mut self, recipient_id: &str) -> Self {
            self.message.recipient_id = recipient_id.into();
            self
        }
        pub fn place(mut self, place_id: &str) -> Self {
            self.message.place_id = place_id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.message.payload.text = Some(text.into());
            self
        }
        pub fn read(mut self, is_read: bool) -> Self {
            self.message.is_read = is_read;
            self
        }
        pub fn created_at(mut self, seconds: i64) -> Self {
            self.message.created_at = Timestamp::from_secs(seconds);
            self
        }
        pub fn finish(self) -> Message {
            self.message
        }
    }

    impl Builder for Message {
        type Build = MessageBuild;
        fn build() -> Self::Build {
            MessageBuild {
                message: Message {
                    id: Id::new(),
                    sender_id: Id::new(),
                    recipient_id: Id::new(),
                    place_id: Id::new(),
                    product_id: None,
                    reply_to: None,
                    payload: MessagePayload::default(),
                    is_read: false,
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod product_builder {

    use super::*;
    use crate::{id::*, price::*, product::*, time::*};

    #[derive(Debug)]
    pub struct ProductBuild {
        product: Product,
    }

    impl ProductBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.product.id = id.into();
            self
        }
        pub fn place(mut self, place_id: &str) -> Self {
            self.product.place_id = place_id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.product.name = name.into();
            self
        }
        pub fn price(mut self, minor_units: u64) -> Self {
            self.product.price = Some(Price::from_minor_units(minor_units));
            self
        }
        pub fn finish(self) -> Product {
            self.product
        }
    }

    impl Builder for Product {
        type Build = ProductBuild;
        fn build() -> Self::Build {
            ProductBuild {
                product: Product {
                    id: Id::new(),
                    place_id: Id::new(),
                    name: "".into(),
                    description: None,
                    price: None,
                    is_active: true,
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}

pub mod package_builder {

    use super::*;
    use crate::{id::*, price::*, subscription::*};

    #[derive(Debug)]
    pub struct PackageBuild {
        package: Package,
    }

    impl PackageBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.package.id = id.into();
            self
        }
        pub fn price(mut self, minor_units: u64) -> Self {
            self.package.price = Price::from_minor_units(minor_units);
            self
        }
        pub fn max_places(mut self, max: u32) -> Self {
            self.package.max_places = max;
            self
        }
        pub fn max_products_per_place(mut self, max: u32) -> Self {
            self.package.max_products_per_place = max;
            self
        }
        pub fn max_images_per_product(mut self, max: u32) -> Self {
            self.package.max_images_per_product = max;
            self
        }
        pub fn max_videos_per_product(mut self, max: u32) -> Self {
            self.package.max_videos_per_product = max;
            self
        }
        pub fn active(mut self, is_active: bool) -> Self {
            self.package.is_active = is_active;
            self
        }
        pub fn finish(self) -> Package {
            self.package
        }
    }

    impl Builder for Package {
        type Build = PackageBuild;
        fn build() -> Self::Build {
            PackageBuild {
                package: Package {
                    id: Id::new(),
                    name: "Basic".into(),
                    description: None,
                    price: Price::default(),
                    duration_days: 30,
                    max_places: 1,
                    max_products_per_place: 10,
                    max_images_per_product: 3,
                    max_videos_per_product: 1,
                    is_active: true,
                },
            }
        }
    }
}
