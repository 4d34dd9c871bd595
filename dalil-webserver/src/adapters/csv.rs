use dalil_core::entities::Place;
use serde::Serialize;

/// A single row of the place export.
#[derive(Debug, Serialize)]
pub struct PlaceRecord {
    pub id: String,
    pub owner_id: String,
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
    pub is_active: bool,
    pub views_total: u64,
    pub created_at: i64,
}

impl From<Place> for PlaceRecord {
    fn from(place: Place) -> Self {
        let Place {
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
            cover_url: _,
            is_active,
            views,
            created_at,
        } = place;
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
            phones: phones.join(","),
            whatsapp,
            logo_url: logo_url.map(|url| url.to_string()),
            is_active,
            views_total: views.total,
            created_at: created_at.as_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dalil_entities::{builders::*, geo::MapPoint};

    #[test]
    fn join_phone_numbers() {
        let mut place = Place::build()
            .id("x")
            .name("Pharmacy")
            .pos(MapPoint::new_unchecked(33.51, 36.29))
            .finish();
        place.phones = vec!["+963111".into(), "0944".into()];
        let record = PlaceRecord::from(place);
        assert_eq!(record.id, "x");
        assert_eq!(record.phones, "+963111,0944");
        assert_eq!(record.lat, Some(33.51));
    }
}
