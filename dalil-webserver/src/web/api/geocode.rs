use std::sync::Arc;

use dalil_application::error::AppError;
use rocket::tokio::task::spawn_blocking;

use super::*;

const DEFAULT_LANG: &str = "ar";

#[get("/geocode/reverse?<lat>&<lng>&<lang>")]
pub async fn get_reverse(
    geocoding: &State<GeoCoding>,
    lat: f64,
    lng: f64,
    lang: Option<String>,
) -> Result<Option<json::ResolvedAddress>> {
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(ParameterError::InvalidPosition)?;
    let lang = lang.unwrap_or_else(|| DEFAULT_LANG.to_owned());
    let gateway = Arc::clone(&geocoding.0);
    let address = spawn_blocking(move || gateway.reverse(pos, &lang))
        .await?
        .map_err(AppError::gateway)?;
    Ok(Json(address.map(to_json::resolved_address)))
}
