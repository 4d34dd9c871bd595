use crate::entities::MapPoint;

/// A human readable location as returned by a reverse geocoding service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub display_name: String,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

pub trait ReverseGeoCodingGateway {
    /// Resolve a position into an address in the requested language.
    ///
    /// Returns `None` if the service does not know the location.
    fn reverse(&self, pos: MapPoint, lang: &str) -> anyhow::Result<Option<ResolvedAddress>>;
}
