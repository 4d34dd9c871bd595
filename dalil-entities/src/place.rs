use crate::{geo::MapPoint, id::Id, time::Timestamp, url::Url};

/// View counters of a place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceViews {
    pub total: u64,
    /// Views of the day referenced by `day`.
    pub today: u64,
    /// Days since the unix epoch.
    pub day: i64,
}

impl PlaceViews {
    /// Count a single view at the given time.
    ///
    /// The daily counter starts again from 1 as soon as the day changes.
    pub fn record(self, now: Timestamp) -> Self {
        let day = now.day_number();
        let today = if day == self.day { self.today + 1 } else { 1 };
        Self {
            total: self.total + 1,
            today,
            day,
        }
    }

    /// The daily counter as seen at the given time.
    pub fn today_at(&self, now: Timestamp) -> u64 {
        if now.day_number() == self.day {
            self.today
        } else {
            0
        }
    }
}

/// A business listing (shop, pharmacy, restaurant, service).
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: Id,
    pub owner_id: Id,
    pub subscription_id: Option<Id>,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub pos: Option<MapPoint>,
    pub phones: Vec<String>,
    pub whatsapp: Option<String>,
    pub logo_url: Option<Url>,
    pub cover_url: Option<Url>,
    pub is_active: bool,
    pub views: PlaceViews,
    pub created_at: Timestamp,
}

impl Place {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        &self.owner_id == user_id
    }

    pub fn toggled(self) -> Self {
        Self {
            is_active: !self.is_active,
            ..self
        }
    }
}
