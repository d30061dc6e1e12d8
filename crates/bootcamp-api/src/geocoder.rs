//! The geocoding collaborator boundary.
//!
//! The bootcamp actor only sees the [`Geocoder`] trait, injected through its
//! context. The trait mirrors the provider interface: one free-text query
//! in, zero or more candidates out. Candidate order is the provider's
//! relevance order and the caller takes the first one.
//!
//! [`TableGeocoder`] is the deterministic in-memory provider used by the
//! demo binary and the test suite; a networked provider would implement the
//! same trait and slot in unchanged.

use async_trait::async_trait;

/// One geocoding candidate: coordinates plus normalized address parts.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub longitude: f64,
    pub latitude: f64,
    pub formatted_address: String,
    pub street: String,
    pub city: String,
    pub state_code: String,
    pub zipcode: String,
    pub country_code: String,
}

/// Provider-side failure (network, quota, malformed response). An empty
/// candidate list is not an error at this boundary; the caller decides.
#[derive(Debug, thiserror::Error)]
#[error("geocoding provider error: {0}")]
pub struct GeocodeError(pub String);

/// The external geocoding capability, injected into the bootcamp actor.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedAddress>, GeocodeError>;
}

/// Deterministic in-memory geocoder backed by a lookup table.
///
/// A query matches an entry when the entry's needle appears in the query,
/// case-insensitively. Matches are returned in insertion order, so the
/// first entry added acts as the provider's best candidate.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    entries: Vec<(String, GeocodedAddress)>,
}

impl TableGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate returned for any query containing `needle`.
    pub fn with_entry(mut self, needle: &str, address: GeocodedAddress) -> Self {
        self.entries.push((needle.to_lowercase(), address));
        self
    }

    /// A small table of real cities, enough to run the demo binary.
    pub fn seeded() -> Self {
        Self::new()
            .with_entry("boston", city("Boston", "MA", "02215", -71.0589, 42.3601))
            .with_entry("02215", city("Boston", "MA", "02215", -71.0589, 42.3601))
            .with_entry(
                "los angeles",
                city("Los Angeles", "CA", "90001", -118.2437, 34.0522),
            )
            .with_entry("90001", city("Los Angeles", "CA", "90001", -118.2437, 34.0522))
            .with_entry("new york", city("New York", "NY", "10001", -74.0060, 40.7128))
            .with_entry("10001", city("New York", "NY", "10001", -74.0060, 40.7128))
    }
}

fn city(name: &str, state: &str, zip: &str, longitude: f64, latitude: f64) -> GeocodedAddress {
    GeocodedAddress {
        longitude,
        latitude,
        formatted_address: format!("{name}, {state} {zip}, US"),
        street: String::new(),
        city: name.to_string(),
        state_code: state.to_string(),
        zipcode: zip.to_string(),
        country_code: "US".to_string(),
    }
}

#[async_trait]
impl Geocoder for TableGeocoder {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodedAddress>, GeocodeError> {
        let query = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|(needle, _)| query.contains(needle.as_str()))
            .map(|(_, address)| address.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matches_are_substring_based_and_ordered() {
        let geocoder = TableGeocoder::seeded();
        let results = geocoder
            .geocode("233 Bay State Rd, Boston, MA 02215")
            .await
            .unwrap();
        assert_eq!(results.len(), 2, "city and zip entries both match");
        assert_eq!(results[0].city, "Boston");
        assert_eq!(results[0].longitude, -71.0589);
        assert_eq!(results[0].latitude, 42.3601);
    }

    #[tokio::test]
    async fn unknown_address_yields_no_candidates() {
        let geocoder = TableGeocoder::seeded();
        let results = geocoder.geocode("Nowhere, ZZ").await.unwrap();
        assert!(results.is_empty());
    }
}
