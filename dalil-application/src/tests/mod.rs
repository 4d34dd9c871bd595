pub mod prelude {
    use std::cell::{Cell, RefCell};

    pub use dalil_core::{
        db::*,
        entities::*,
        gateways::{media::*, notify::*, video::*},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    #[derive(Default)]
    pub struct DummyNotifyGW {
        pub events: RefCell<Vec<String>>,
    }

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            let name = match event {
                NotificationEvent::MessageReceived { recipient, .. } => {
                    format!("message:{}", recipient.id)
                }
                NotificationEvent::EmploymentRequested { request, .. } => {
                    format!("requested:{}", request.user_id)
                }
                NotificationEvent::EmploymentDecided { request, .. } => {
                    format!("decided:{}:{}", request.user_id, request.status)
                }
                NotificationEvent::UserSubscribed { user, .. } => {
                    format!("subscribed:{}", user.id)
                }
            };
            self.events.borrow_mut().push(name);
        }
    }

    pub struct DummyMediaHosting;

    impl ImageHostingGateway for DummyMediaHosting {
        fn upload_image(&self, file_name: &str, _: Vec<u8>) -> anyhow::Result<Url> {
            Ok(format!("https://img.example.com/{file_name}").parse()?)
        }
    }

    impl AudioHostingGateway for DummyMediaHosting {
        fn upload_audio(&self, file_name: &str, _: Vec<u8>) -> anyhow::Result<Url> {
            Ok(format!("https://audio.example.com/{file_name}").parse()?)
        }
    }

    #[derive(Default)]
    pub struct DummyVideoHosting {
        pub uploads: Cell<usize>,
    }

    impl VideoHostingGateway for DummyVideoHosting {
        fn authorize_url(&self, state: &str) -> anyhow::Result<Url> {
            Ok(format!("https://auth.example.com/?state={state}").parse()?)
        }
        fn exchange_code(&self, code: &str, now: Timestamp) -> anyhow::Result<OAuthTokens> {
            if code != "valid" {
                anyhow::bail!("invalid code");
            }
            Ok(OAuthTokens {
                access_token: "access".into(),
                refresh_token: "refresh".into(),
                expires_at: Timestamp::from_millis(now.as_millis() + 3_600_000),
            })
        }
        fn refresh(&self, refresh_token: &str, now: Timestamp) -> anyhow::Result<OAuthTokens> {
            Ok(OAuthTokens {
                access_token: "refreshed".into(),
                refresh_token: refresh_token.into(),
                expires_at: Timestamp::from_millis(now.as_millis() + 3_600_000),
            })
        }
        fn upload_video(&self, access_token: &str, _: &str, _: Vec<u8>) -> anyhow::Result<Url> {
            assert!(!access_token.is_empty());
            self.uploads.set(self.uploads.get() + 1);
            Ok("https://video.example.com/watch?v=1".parse()?)
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub notify: DummyNotifyGW,
        pub media: DummyMediaHosting,
        pub video: DummyVideoHosting,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            dalil_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self {
                db_connections,
                notify: DummyNotifyGW::default(),
                media: DummyMediaHosting,
                video: DummyVideoHosting::default(),
            }
        }

        pub fn create_user(&self, email: &str) -> UserProfile {
            flows::register_user(
                &self.db_connections,
                usecases::NewUser {
                    email: email.parse().unwrap(),
                    password: "secret123".into(),
                    display_name: None,
                },
            )
            .unwrap()
        }

        pub fn create_package(&self, admin: &UserProfile, max_places: u32) -> Package {
            flows::create_package(
                &self.db_connections,
                admin,
                usecases::NewPackage {
                    name: "Basic".into(),
                    description: None,
                    price: 10_000,
                    duration_days: 30,
                    max_places,
                    max_products_per_place: 2,
                    max_images_per_product: 1,
                    max_videos_per_product: 1,
                },
            )
            .unwrap()
        }

        /// A user with an active subscription.
        ///
        /// The notification about the subscription is discarded so
        /// that tests only see the events they trigger themselves.
        pub fn create_owner(&self, email: &str, package: &Package) -> UserProfile {
            let owner = self.create_user(email);
            flows::subscribe(
                &self.db_connections,
                &self.notify,
                &owner,
                package.id.as_str(),
                None,
            )
            .unwrap();
            self.notify.events.borrow_mut().clear();
            owner
        }

        pub fn create_place(&self, owner: &UserProfile, name: &str) -> Place {
            flows::create_place(
                &self.db_connections,
                owner,
                usecases::NewPlace {
                    name: name.into(),
                    category: "food".into(),
                    ..Default::default()
                },
            )
            .unwrap()
        }

        pub fn get_user(&self, id: &str) -> UserProfile {
            usecases::get_user(&self.db_connections.shared().unwrap(), id).unwrap()
        }
    }
}
