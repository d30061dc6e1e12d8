//! The Bootcamp entity: a coding-education program listing.
//!
//! A bootcamp is created from a free-text address, but the address itself is
//! never stored: the create pipeline geocodes it into a structured
//! [`Location`] and clears the raw string before the entity reaches the
//! store. The `slug` field is likewise derived, never caller-supplied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Default photo filename used until an upload replaces it.
pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

const MAX_NAME_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 500;

/// Type-safe identifier for Bootcamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BootcampId(pub u32);

impl From<u32> for BootcampId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BootcampId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bootcamp_{}", self.0)
    }
}

/// Reference to the owning account. Accounts live behind the auth boundary;
/// this is an opaque foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// The closed set of career tracks a bootcamp can teach. Unknown strings
/// fail deserialization, which is the enum-mismatch validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Career {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Other")]
    Other,
}

/// GeoJSON geometry kind. Only points are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
}

/// Structured location derived from geocoding. `coordinates` follows GIS
/// convention: longitude first, latitude second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    pub coordinates: [f64; 2],
    pub formatted_address: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Bootcamp {
    pub id: BootcampId,
    pub name: String,
    /// Derived from `name` on every save; never caller-supplied.
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Input-only. Consumed by the geocode stage and cleared before the
    /// entity is stored; never serialized.
    #[serde(skip_serializing)]
    pub address: Option<String>,
    /// `None` only while the create pipeline is in flight. Every stored
    /// bootcamp has a location; a geocoding failure aborts the save.
    pub location: Option<Location>,
    pub careers: Vec<Career>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub created_at: DateTime<Utc>,
    pub user: UserId,
}

/// Payload for creating a bootcamp. The `user` field is filled in by the
/// auth boundary, not the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct BootcampCreate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub address: String,
    pub careers: Vec<Career>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub average_cost: Option<f64>,
    #[serde(default)]
    pub housing: bool,
    #[serde(default)]
    pub job_assistance: bool,
    #[serde(default)]
    pub job_guarantee: bool,
    #[serde(default)]
    pub accept_gi: bool,
    #[serde(default)]
    pub user: Option<UserId>,
}

impl BootcampCreate {
    /// Schema-level validation. Runs before any lifecycle hook.
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        if self.address.trim().is_empty() {
            return Err("please add an address".to_string());
        }
        if self.careers.is_empty() {
            return Err("please add at least one career".to_string());
        }
        if let Some(rating) = self.average_rating {
            validate_rating(rating)?;
        }
        if let Some(cost) = self.average_cost {
            validate_cost(cost)?;
        }
        if let Some(website) = &self.website {
            validate_website(website)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if self.user.is_none() {
            return Err("a bootcamp must have an owning user".to_string());
        }
        Ok(())
    }
}

/// Field-level update payload. Supplying `name` re-derives the slug;
/// supplying `address` re-runs geocoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BootcampUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub careers: Option<Vec<Career>>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub average_cost: Option<f64>,
    #[serde(default)]
    pub housing: Option<bool>,
    #[serde(default)]
    pub job_assistance: Option<bool>,
    #[serde(default)]
    pub job_guarantee: Option<bool>,
    #[serde(default)]
    pub accept_gi: Option<bool>,
}

impl BootcampUpdate {
    /// Validates only the fields present in the payload.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(address) = &self.address {
            if address.trim().is_empty() {
                return Err("address must not be empty".to_string());
            }
        }
        if let Some(careers) = &self.careers {
            if careers.is_empty() {
                return Err("please add at least one career".to_string());
            }
        }
        if let Some(rating) = self.average_rating {
            validate_rating(rating)?;
        }
        if let Some(cost) = self.average_cost {
            validate_cost(cost)?;
        }
        if let Some(website) = &self.website {
            validate_website(website)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        Ok(())
    }
}

/// Query filters understood by the bootcamp store.
#[derive(Debug, Clone)]
pub enum BootcampFilter {
    /// Bootcamps teaching the given career.
    Career(Career),
    /// Bootcamps whose location lies within `miles` of the given point
    /// (great-circle distance).
    WithinRadius {
        longitude: f64,
        latitude: f64,
        miles: f64,
    },
}

impl Bootcamp {
    /// Filter predicate used by `find` and `delete_many`.
    pub fn matches_filter(&self, filter: &BootcampFilter) -> bool {
        match filter {
            BootcampFilter::Career(career) => self.careers.contains(career),
            BootcampFilter::WithinRadius {
                longitude,
                latitude,
                miles,
            } => match &self.location {
                Some(location) => {
                    haversine_miles(location.coordinates, [*longitude, *latitude]) <= *miles
                }
                None => false,
            },
        }
    }
}

const EARTH_RADIUS_MILES: f64 = 3963.2;

/// Great-circle distance in miles between two `[longitude, latitude]` pairs.
fn haversine_miles(a: [f64; 2], b: [f64; 2]) -> f64 {
    let (lng1, lat1) = (a[0].to_radians(), a[1].to_radians());
    let (lng2, lat2) = (b[0].to_radians(), b[1].to_radians());
    let dlat = lat2 - lat1;
    let dlng = lng2 - lng1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("please add a name".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!("name cannot be more than {MAX_NAME_LEN} characters"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("please add a description".to_string());
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(format!(
            "description cannot be more than {MAX_DESCRIPTION_LEN} characters"
        ));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<(), String> {
    if !(1.0..=10.0).contains(&rating) {
        return Err("rating must be between 1 and 10".to_string());
    }
    Ok(())
}

fn validate_cost(cost: f64) -> Result<(), String> {
    if cost < 0.0 {
        return Err("cost must not be negative".to_string());
    }
    Ok(())
}

fn validate_website(website: &str) -> Result<(), String> {
    if website.starts_with("http://") || website.starts_with("https://") {
        Ok(())
    } else {
        Err("please enter a valid URL with HTTP or HTTPS".to_string())
    }
}

// The upstream schema shipped broken email/phone patterns (they rejected
// ordinary addresses), so these checks are written from scratch rather
// than ported.
fn validate_email(email: &str) -> Result<(), String> {
    let err = || "please enter a valid email".to_string();
    let (local, domain) = email.split_once('@').ok_or_else(err)?;
    if local.is_empty() || domain.contains('@') {
        return Err(err());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(err());
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), String> {
    let err = || "please enter a valid phone number".to_string();
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(7..=20).contains(&digits) {
        return Err(err());
    }
    if phone
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, '+' | '-' | '(' | ')' | '.' | ' '))
    {
        return Err(err());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> BootcampCreate {
        BootcampCreate {
            name: "Devworks".to_string(),
            description: "Full stack training".to_string(),
            website: Some("https://devworks.example".to_string()),
            email: Some("hello@devworks.example".to_string()),
            phone: Some("(555) 555-0100".to_string()),
            address: "233 Bay State Rd, Boston, MA".to_string(),
            careers: vec![Career::WebDevelopment],
            average_rating: None,
            average_cost: Some(10000.0),
            housing: false,
            job_assistance: true,
            job_guarantee: false,
            accept_gi: false,
            user: Some(UserId(1)),
        }
    }

    #[test]
    fn accepts_a_valid_payload() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn rejects_overlong_name() {
        let mut params = valid_create();
        params.name = "x".repeat(51);
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_empty_careers() {
        let mut params = valid_create();
        params.careers.clear();
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut params = valid_create();
        params.average_rating = Some(11.0);
        assert!(params.validate().is_err());
        params.average_rating = Some(0.5);
        assert!(params.validate().is_err());
        params.average_rating = Some(10.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn accepts_ordinary_email_addresses() {
        // The upstream pattern rejected these; the rewritten check must not.
        for email in ["name@domain.com", "a.b@sub.domain.io", "x-y@d.co"] {
            assert!(validate_email(email).is_ok(), "{email} should be valid");
        }
        for email in ["no-at-sign", "@domain.com", "user@nodot", "a@b..c"] {
            assert!(validate_email(email).is_err(), "{email} should be invalid");
        }
    }

    #[test]
    fn rejects_missing_owner() {
        let mut params = valid_create();
        params.user = None;
        assert!(params.validate().is_err());
    }

    #[test]
    fn career_wire_names_round_trip() {
        let careers: Vec<Career> =
            serde_json::from_str(r#"["Web Development", "UI/UX", "Data Science"]"#).unwrap();
        assert_eq!(
            careers,
            vec![Career::WebDevelopment, Career::UiUx, Career::DataScience]
        );
        assert!(serde_json::from_str::<Vec<Career>>(r#"["Quantum Computing"]"#).is_err());
    }

    #[test]
    fn haversine_boston_to_new_york() {
        // Boston (-71.06, 42.36) to New York (-74.01, 40.71) is ~190 miles.
        let d = haversine_miles([-71.06, 42.36], [-74.01, 40.71]);
        assert!((180.0..200.0).contains(&d), "got {d}");
    }

    #[test]
    fn haversine_zero_for_same_point() {
        assert!(haversine_miles([-71.06, 42.36], [-71.06, 42.36]) < 1e-9);
    }
}
