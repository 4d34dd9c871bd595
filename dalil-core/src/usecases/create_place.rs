use super::{prelude::*, subscriptions::active_subscription};
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewPlace {
    pub name        : String,
    pub description : Option<String>,
    pub category    : String,
    pub city        : Option<String>,
    pub address     : Option<String>,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
    pub phones      : Vec<String>,
    pub whatsapp    : Option<String>,
    pub logo_url    : Option<String>,
    pub cover_url   : Option<String>,
}

fn parse_url(url: Option<String>) -> Result<Option<Url>> {
    url.map(|u| u.trim().to_owned())
        .filter(|u| !u.is_empty())
        .map(|u| u.parse::<Url>())
        .transpose()
        .map_err(Error::from)
}

/// Copy the editable fields into a place and validate it.
pub(crate) fn apply_place_fields(mut place: Place, fields: NewPlace) -> Result<Place> {
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
    } = fields;
    place.pos = match (lat, lng) {
        (Some(lat), Some(lng)) => {
            Some(MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?)
        }
        (None, None) => None,
        _ => return Err(Error::InvalidPosition),
    };
    place.name = name;
    place.description = description;
    place.category = category;
    place.city = city;
    place.address = address;
    place.phones = phones;
    place.whatsapp = whatsapp;
    place.logo_url = parse_url(logo_url)?;
    place.cover_url = parse_url(cover_url)?;
    let place = place.auto_correct();
    place.validate()?;
    Ok(place)
}

pub fn create_place<R>(
    repo: &R,
    owner: &UserProfile,
    new_place: NewPlace,
    now: Timestamp,
) -> Result<Place>
where
    R: PlaceRepo + SubscriptionRepo + PackageRepo,
{
    let subscription = active_subscription(repo, owner.id.as_str(), now)?;
    let subscription_id = if owner.is_admin {
        subscription.map(|(s, _)| s.id)
    } else {
        let (subscription, package) = subscription.ok_or(Error::NoActiveSubscription)?;
        let count = repo.count_places_of_owner(owner.id.as_str())?;
        if count >= package.max_places as usize {
            log::debug!(
                "User {} already owns {count} of {} places",
                owner.id,
                package.max_places
            );
            return Err(Error::MaxPlacesReached);
        }
        Some(subscription.id)
    };
    let place = Place {
        id: Id::new(),
        owner_id: owner.id.clone(),
        subscription_id,
        name: String::new(),
        description: None,
        category: String::new(),
        city: None,
        address: None,
        pos: None,
        phones: vec![],
        whatsapp: None,
        logo_url: None,
        cover_url: None,
        is_active: true,
        views: PlaceViews::default(),
        created_at: now,
    };
    let place = apply_place_fields(place, new_place)?;
    log::debug!("Creating place {} ({})", place.id, place.name);
    repo.create_place(&place)?;
    Ok(place)
}
