//! Raw response shapes of the upstream services

use serde::Deserialize;

/// One element of a Nominatim `/search` response
///
/// Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Full display name
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Nominatim `/reverse` response
///
/// On failure Nominatim still answers 200 with `{"error": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimReverse {
    /// Full display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Error text when nothing was found
    #[serde(default)]
    pub error: Option<String>,
}

/// ip-api.com `/json/` response
#[derive(Debug, Clone, Deserialize)]
pub struct IpApiResponse {
    /// "success" or "fail"
    pub status: String,
    /// Failure reason when `status` is "fail"
    #[serde(default)]
    pub message: Option<String>,
    /// Latitude
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude
    #[serde(default)]
    pub lon: Option<f64>,
}

impl IpApiResponse {
    /// Whether the lookup succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_place_parsing() {
        let json = r#"[{"lat": "28.6138954", "lon": "77.2090057", "display_name": "New Delhi, Delhi, India", "place_id": 1}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, "28.6138954");
        assert_eq!(places[0].lon, "77.2090057");
        assert_eq!(
            places[0].display_name.as_deref(),
            Some("New Delhi, Delhi, India")
        );
    }

    #[test]
    fn test_nominatim_empty_result() {
        let places: Vec<NominatimPlace> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_nominatim_reverse_error_body() {
        let json = r#"{"error": "Unable to geocode"}"#;
        let reverse: NominatimReverse = serde_json::from_str(json).unwrap();
        assert!(reverse.display_name.is_none());
        assert_eq!(reverse.error.as_deref(), Some("Unable to geocode"));
    }

    #[test]
    fn test_ip_api_success() {
        let json = r#"{"status": "success", "lat": 19.076, "lon": 72.8777}"#;
        let response: IpApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert!((response.lat.unwrap_or_default() - 19.076).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ip_api_fail() {
        let json = r#"{"status": "fail", "message": "private range"}"#;
        let response: IpApiResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("private range"));
        assert!(response.lat.is_none());
    }
}
