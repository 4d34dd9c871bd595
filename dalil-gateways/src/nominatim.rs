use std::time::Duration;

use anyhow::Result;
use dalil_core::{
    entities::{MapPoint, Url},
    gateways::geocode::{ResolvedAddress, ReverseGeoCodingGateway},
};
use serde::Deserialize;

use crate::{check_response, retry::retry_with_backoff};

const SERVICE: &str = "Reverse geocoding";

const MAX_ATTEMPTS: u32 = 3;

/// Client of a Nominatim compatible reverse geocoding service.
#[derive(Debug, Clone)]
pub struct Nominatim {
    base_url: Url,
    user_agent: String,
    retry_delay: Duration,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    address: Option<Address>,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    road: Option<String>,
    house_number: Option<String>,
    postcode: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    country: Option<String>,
}

impl Nominatim {
    pub fn new(base_url: Url, user_agent: String, retry_delay: Duration) -> Self {
        Self {
            base_url,
            user_agent,
            retry_delay,
        }
    }

    fn reverse_url(&self, pos: MapPoint, lang: &str) -> Result<Url> {
        let mut url = self.base_url.join("reverse")?;
        url.query_pairs_mut()
            .append_pair("format", "jsonv2")
            .append_pair("lat", &pos.lat().to_string())
            .append_pair("lon", &pos.lng().to_string())
            .append_pair("accept-language", lang);
        Ok(url)
    }

    fn fetch(&self, url: &Url) -> Result<String> {
        let response = reqwest::blocking::Client::new()
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()?;
        Ok(check_response(SERVICE, response)?.text()?)
    }
}

fn parse_reverse_response(json: &str) -> Result<Option<ResolvedAddress>> {
    let ReverseResponse {
        display_name,
        address,
        error,
    } = serde_json::from_str(json)?;
    if let Some(error) = error {
        log::debug!("Unknown location: {error}");
        return Ok(None);
    }
    let Some(display_name) = display_name else {
        return Ok(None);
    };
    let Address {
        road,
        house_number,
        postcode,
        city,
        town,
        village,
        country,
    } = address.unwrap_or_default();
    Ok(Some(ResolvedAddress {
        display_name,
        street: road,
        house_number,
        zip: postcode,
        city: city.or(town).or(village),
        country,
    }))
}

impl ReverseGeoCodingGateway for Nominatim {
    fn reverse(&self, pos: MapPoint, lang: &str) -> Result<Option<ResolvedAddress>> {
        let url = self.reverse_url(pos, lang)?;
        let json = retry_with_backoff(MAX_ATTEMPTS, self.retry_delay, |_| self.fetch(&url))?;
        parse_reverse_response(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_reverse_url() {
        let gw = Nominatim::new(
            "https://nominatim.openstreetmap.org/".parse().unwrap(),
            "dalil-test".into(),
            Duration::ZERO,
        );
        let url = gw
            .reverse_url(MapPoint::new_unchecked(30.5, 31.25), "ar")
            .unwrap();
        assert_eq!(
            "https://nominatim.openstreetmap.org/reverse?format=jsonv2&lat=30.5&lon=31.25&accept-language=ar",
            url.as_str()
        );
    }

    #[test]
    fn parse_address() {
        let json = r#"{
            "place_id": 123,
            "display_name": "12, Tahrir Street, Cairo, Egypt",
            "address": {
                "house_number": "12",
                "road": "Tahrir Street",
                "town": "Cairo",
                "postcode": "11511",
                "country": "Egypt",
                "country_code": "eg"
            }
        }"#;
        let address = parse_reverse_response(json).unwrap().unwrap();
        assert_eq!("Tahrir Street", address.street.unwrap());
        assert_eq!("Cairo", address.city.unwrap());
        assert_eq!("11511", address.zip.unwrap());
    }

    #[test]
    fn unknown_location() {
        let json = r#"{"error":"Unable to geocode"}"#;
        assert!(parse_reverse_response(json).unwrap().is_none());
    }
}
