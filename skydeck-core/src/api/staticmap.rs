//! Static map URL derivation
//!
//! Purely presentational: the card renders this as a link, nothing is
//! fetched or parsed.

use crate::state::Coordinates;

const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";
const ZOOM: u8 = 10;
const SIZE: &str = "600x300";

/// Google static-map URL centered on `coords` with a red marker.
pub fn static_map_url(coords: Coordinates, api_key: &str) -> String {
    let Coordinates { lat, lon } = coords;
    format!(
        "{STATIC_MAP_URL}?center={lat},{lon}&zoom={ZOOM}&size={SIZE}&markers=color:red%7C{lat},{lon}&key={api_key}"
    )
}
