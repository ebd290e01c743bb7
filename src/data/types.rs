//! Canonical record shapes for ITCC tracking data.
//!
//! Several generations of the archive spell the same concept differently
//! (`center_lat` vs `centroid_lat`, `mean_tb_k` vs `mean_bt_k`, ...). The
//! serde aliases below are the single adapter that unifies them; nothing
//! past this module ever sees the variant names.

use serde::Deserialize;

/// Ocean basin a track was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Basin {
    /// North Indian Ocean ("NIO").
    NorthIndian,

    /// South Indian Ocean ("SIO").
    SouthIndian,

    /// Any other basin label, kept verbatim.
    Other(String),
}

impl From<String> for Basin {
    fn from(code: String) -> Self {
        match code.to_uppercase().as_str() {
            "NIO" => Basin::NorthIndian,
            "SIO" => Basin::SouthIndian,
            _ => Basin::Other(code),
        }
    }
}

impl Basin {
    /// Short code for display and filtering.
    pub fn code(&self) -> &str {
        match self {
            Basin::NorthIndian => "NIO",
            Basin::SouthIndian => "SIO",
            Basin::Other(code) => code,
        }
    }
}

/// One tracked tropical cloud cluster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    /// Unique track identifier.
    #[serde(alias = "tcc_track_id")]
    pub track_id: String,

    pub basin: Basin,

    /// First observation time, raw string (see `browse::timefmt`).
    pub start_time: String,

    /// Last observation time, raw string.
    pub end_time: String,

    pub total_duration_hours: f64,

    /// Chronologically ordered observations; immutable after load.
    #[serde(default)]
    pub track_points: Vec<TrackPoint>,
}

/// One timestamped observation of a track.
///
/// Coordinates, pixel count, and the image reference are mandatory; every
/// derived statistic is optional because older archive versions omit some
/// of them. Optional fields are excluded from aggregations, not zeroed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackPoint {
    /// Observation time, raw string.
    pub timestamp: String,

    #[serde(alias = "center_lat")]
    pub centroid_lat: f64,

    #[serde(alias = "center_lon")]
    pub centroid_lon: f64,

    pub pixel_count: u64,

    // Shape descriptors
    #[serde(default, alias = "areakm2")]
    pub area_km2: Option<f64>,
    #[serde(default)]
    pub eccentricity: Option<f64>,
    #[serde(default)]
    pub perimeter_km: Option<f64>,
    #[serde(default)]
    pub major_axis_length_km: Option<f64>,
    #[serde(default)]
    pub minor_axis_length_km: Option<f64>,
    #[serde(default)]
    pub orientation_deg: Option<f64>,

    // Brightness temperature statistics, Kelvin
    #[serde(default, alias = "mean_tb_k")]
    pub mean_bt_k: Option<f64>,
    #[serde(default, alias = "min_tb_k")]
    pub min_bt_k: Option<f64>,
    #[serde(default, alias = "max_tb_k")]
    pub max_bt_k: Option<f64>,
    #[serde(default, alias = "median_tb_k")]
    pub median_bt_k: Option<f64>,
    #[serde(default, alias = "std_tb_k")]
    pub std_bt_k: Option<f64>,

    // Radius statistics, km
    #[serde(default)]
    pub min_radius_km: Option<f64>,
    #[serde(default)]
    pub mean_radius_km: Option<f64>,
    #[serde(default)]
    pub max_radius_km: Option<f64>,

    // Cloud-top height statistics, km
    #[serde(default)]
    pub mean_cth_km: Option<f64>,
    #[serde(default)]
    pub max_cth_km: Option<f64>,

    /// Source image reference; the identity key for selection and
    /// comparison. Two points are the same image iff the filenames match.
    pub image_filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basin_from_known_codes() {
        assert_eq!(Basin::from("NIO".to_string()), Basin::NorthIndian);
        assert_eq!(Basin::from("SIO".to_string()), Basin::SouthIndian);
        assert_eq!(Basin::from("nio".to_string()), Basin::NorthIndian);
    }

    #[test]
    fn test_basin_other_keeps_label() {
        let basin = Basin::from("BOB".to_string());
        assert_eq!(basin, Basin::Other("BOB".to_string()));
        assert_eq!(basin.code(), "BOB");
    }

    #[test]
    fn test_basin_codes() {
        assert_eq!(Basin::NorthIndian.code(), "NIO");
        assert_eq!(Basin::SouthIndian.code(), "SIO");
    }

    #[test]
    fn test_point_deserializes_canonical_names() {
        let json = r#"{
            "timestamp": "15-11-2015 06:30",
            "centroid_lat": 13.1,
            "centroid_lon": 82.0,
            "pixel_count": 24768,
            "mean_bt_k": 215.6,
            "min_bt_k": 187.4,
            "max_cth_km": 16.4,
            "image_filename": "3DIMG_15NOV2015_0630_L1B_STD_IR1.png"
        }"#;
        let point: TrackPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.centroid_lat, 13.1);
        assert_eq!(point.mean_bt_k, Some(215.6));
        assert_eq!(point.max_cth_km, Some(16.4));
        assert_eq!(point.median_bt_k, None);
    }

    #[test]
    fn test_point_deserializes_variant_names() {
        // Older archive spelling: center_* coordinates, *_tb_k temperatures.
        let json = r#"{
            "timestamp": "2016-05-17T06:00:00Z",
            "center_lat": 10.6,
            "center_lon": 87.9,
            "pixel_count": 16640,
            "mean_tb_k": 223.5,
            "min_tb_k": 195.1,
            "areakm2": 266240.0,
            "image_filename": "3DIMG_17MAY2016_0600_L1B_STD_IR1.png"
        }"#;
        let point: TrackPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.centroid_lat, 10.6);
        assert_eq!(point.centroid_lon, 87.9);
        assert_eq!(point.mean_bt_k, Some(223.5));
        assert_eq!(point.min_bt_k, Some(195.1));
        assert_eq!(point.area_km2, Some(266240.0));
    }

    #[test]
    fn test_track_deserializes_with_id_alias() {
        let json = r#"{
            "tcc_track_id": "TCC_2015_NIO_001",
            "basin": "NIO",
            "start_time": "15-11-2015 00:30",
            "end_time": "15-11-2015 21:30",
            "total_duration_hours": 21.0,
            "track_points": []
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.track_id, "TCC_2015_NIO_001");
        assert_eq!(track.basin, Basin::NorthIndian);
        assert!(track.track_points.is_empty());
    }

    #[test]
    fn test_missing_mandatory_field_is_an_error() {
        let json = r#"{
            "timestamp": "15-11-2015 06:30",
            "centroid_lat": 13.1,
            "centroid_lon": 82.0,
            "pixel_count": 100
        }"#;
        assert!(serde_json::from_str::<TrackPoint>(json).is_err());
    }
}
