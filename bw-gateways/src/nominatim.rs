use itertools::Itertools;
use serde::Deserialize;

use bw_core::{
    entities::{Address, MapPoint},
    gateways::geocode::{GeoCodingGateway, GeocodeError},
};

const PUBLIC_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const FORWARD_FAILED: &str = "Geocoding fehlgeschlagen";
const REVERSE_FAILED: &str = "Reverse-Geocoding fehlgeschlagen";

/// Geocoding against a Nominatim instance.
///
/// Lookups are answered in German, matching the language of the
/// user-facing forms.
#[derive(Debug, Clone)]
pub struct Nominatim {
    base_url: String,
}

impl Nominatim {
    pub fn new() -> Self {
        Self::with_base_url(PUBLIC_BASE_URL.into())
    }

    /// Points the gateway at another instance, e.g. a self-hosted one.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }
}

impl Default for Nominatim {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_coordinates(&self, addr: &Address) -> Result<MapPoint, GeocodeError> {
        let Some(query) = address_query(addr) else {
            return Err(GeocodeError::EmptyQuery);
        };
        let url = format!("{}/search", self.base_url);
        let hits: Vec<SearchHit> =
            get_json(&url, &[("format", "json"), ("q", &query)], FORWARD_FAILED)?;
        let Some(hit) = hits.first() else {
            return Err(GeocodeError::NotFound);
        };
        parse_hit(hit).ok_or_else(|| GeocodeError::Service(FORWARD_FAILED.to_owned()))
    }

    fn resolve_address(&self, pos: MapPoint) -> Result<Address, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let lat = pos.lat().to_string();
        let lon = pos.lng().to_string();
        let response: ReverseResponse = get_json(
            &url,
            &[("format", "json"), ("lat", &lat), ("lon", &lon)],
            REVERSE_FAILED,
        )?;
        let Some(raw) = response.address else {
            return Err(GeocodeError::NotFound);
        };
        Ok(raw.into())
    }
}

fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
    failure: &str,
) -> Result<T, GeocodeError> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .query(query)
        // The public Nominatim instance requires an identifying agent.
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::ACCEPT_LANGUAGE, "de")
        .send()
        .map_err(|err| {
            log::warn!("Geocoding request to {url} failed: {err}");
            GeocodeError::Service(failure.to_owned())
        })?;
    if !response.status().is_success() {
        log::warn!(
            "Geocoding request to {url} answered with status {}",
            response.status()
        );
        return Err(GeocodeError::Service(failure.to_owned()));
    }
    response.json().map_err(|err| {
        log::warn!("Unable to decode geocoding response from {url}: {err}");
        GeocodeError::Service(failure.to_owned())
    })
}

/// Joins the non-blank address parts into a single search query.
fn address_query(addr: &Address) -> Option<String> {
    let Address {
        street,
        zip,
        city,
        country,
    } = addr;
    let query = [street, zip, city, country]
        .into_iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .join(", ");
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

fn parse_hit(hit: &SearchHit) -> Option<MapPoint> {
    let lat = hit.lat.parse().ok()?;
    let lng = hit.lon.parse().ok()?;
    MapPoint::try_from_lat_lng_deg(lat, lng)
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    road: Option<String>,
    house_number: Option<String>,
    postcode: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    country: Option<String>,
}

impl From<ReverseAddress> for Address {
    fn from(from: ReverseAddress) -> Self {
        let ReverseAddress {
            road,
            house_number,
            postcode,
            city,
            town,
            village,
            country,
        } = from;
        let street = [road, house_number]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .join(" ");
        Self {
            street: (!street.is_empty()).then_some(street),
            zip: postcode,
            city: city.or(town).or(village),
            country,
        }
    }
}
