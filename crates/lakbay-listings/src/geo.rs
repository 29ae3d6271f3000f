//! Geographic point codec.
//!
//! The hosted backend stores a listing's location as a single geography
//! column whose textual form is `POINT(<lon> <lat>)`. The admin form edits
//! latitude and longitude as two separate numeric fields, so this module
//! owns the decode-on-load / re-encode-on-submit round trip.
//!
//! Encoding uses Rust's shortest-round-trip float formatting, so
//! `parse_wkt(&p.to_wkt())` recovers `p` exactly for any finite coordinates.

use serde::{Deserialize, Serialize};

use lakbay_core::error::Error;

/// Valid latitude range in decimal degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in decimal degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A geographic point as edited in the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// The documented platform default center, used when a record carries
    /// no usable location.
    pub const DEFAULT_CENTER: Self = Self {
        latitude: 13.6218,
        longitude: 123.1948,
    };

    /// Creates a point from latitude and longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both coordinates are within the valid geographic
    /// ranges.
    pub fn in_bounds(self) -> bool {
        self.latitude >= LATITUDE_RANGE.0
            && self.latitude <= LATITUDE_RANGE.1
            && self.longitude >= LONGITUDE_RANGE.0
            && self.longitude <= LONGITUDE_RANGE.1
    }

    /// Encodes this point as `POINT(<lon> <lat>)` text.
    ///
    /// Note the longitude-first ordering: the storage format follows the
    /// WKT convention (x y), not the latitude-first convention of the form.
    pub fn to_wkt(self) -> String {
        format!("POINT({} {})", self.longitude, self.latitude)
    }

    /// Parses `POINT(<lon> <lat>)` text back into a point.
    ///
    /// Accepts case-insensitive `POINT`, surrounding whitespace, and an
    /// optional `SRID=<n>;` prefix as emitted by some backends. Anything
    /// else is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] if the text is not a well-formed point.
    pub fn parse_wkt(text: &str) -> Result<Self, Error> {
        let malformed = || Error::Schema(format!("Malformed point text: {text}"));

        let mut body = text.trim();
        // Strip an optional extended-WKT SRID prefix.
        if let Some((prefix, rest)) = body.split_once(';') {
            if !prefix.trim().to_ascii_uppercase().starts_with("SRID=") {
                return Err(malformed());
            }
            body = rest.trim();
        }

        let upper = body.to_ascii_uppercase();
        if !upper.starts_with("POINT") {
            return Err(malformed());
        }
        let after_keyword = body["POINT".len()..].trim_start();
        let inner = after_keyword
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let mut parts = inner.split_whitespace();
        let lon = parts
            .next()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(malformed)?;
        let lat = parts
            .next()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }

    /// Decodes point text, falling back to [`Self::DEFAULT_CENTER`] when
    /// the text is absent or malformed.
    ///
    /// Malformed stored geography is a data-quality problem the admin form
    /// cannot ask the user to fix mid-load, so it degrades silently.
    pub fn parse_wkt_or_center(text: Option<&str>) -> Self {
        match text {
            Some(raw) => Self::parse_wkt(raw).unwrap_or_else(|_| {
                tracing::debug!(raw, "malformed location text, using default center");
                Self::DEFAULT_CENTER
            }),
            None => Self::DEFAULT_CENTER,
        }
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::DEFAULT_CENTER
    }
}
