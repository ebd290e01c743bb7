//! Per-track summary statistics, derived for display.
//!
//! Recomputed from the point sequence on every render; the data is small
//! enough that caching would only add state. Reductions skip missing
//! per-point fields rather than coercing them, and an empty reduction is
//! reported as absent, never as a sentinel value.

use crate::data::TrackPoint;

/// Bounding box over the centroid coordinates of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Display summary for one track. `None` means no point carried the field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackAggregates {
    /// Highest maximum cloud-top height over all points, km.
    pub max_cth_km: Option<f64>,

    /// Lowest minimum brightness temperature over all points, K.
    pub min_bt_k: Option<f64>,

    /// Lat/lon bounding box of the centroid path.
    pub bounds: Option<LatLonBounds>,
}

/// Reduce a track's point sequence to its display summary.
pub fn summarize(points: &[TrackPoint]) -> TrackAggregates {
    let max_cth_km = fold_max(points.iter().filter_map(|p| p.max_cth_km));
    let min_bt_k = fold_min(points.iter().filter_map(|p| p.min_bt_k));

    let bounds = points.split_first().map(|(first, rest)| {
        let mut b = LatLonBounds {
            min_lat: first.centroid_lat,
            max_lat: first.centroid_lat,
            min_lon: first.centroid_lon,
            max_lon: first.centroid_lon,
        };
        for p in rest {
            b.min_lat = b.min_lat.min(p.centroid_lat);
            b.max_lat = b.max_lat.max(p.centroid_lat);
            b.min_lon = b.min_lon.min(p.centroid_lon);
            b.max_lon = b.max_lon.max(p.centroid_lon);
        }
        b
    });

    TrackAggregates {
        max_cth_km,
        min_bt_k,
        bounds,
    }
}

fn fold_max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| match acc {
        Some(m) => Some(m.max(v)),
        None => Some(v),
    })
}

fn fold_min(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| match acc {
        Some(m) => Some(m.min(v)),
        None => Some(v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_point(lat: f64, lon: f64) -> TrackPoint {
        TrackPoint {
            timestamp: "15-11-2015 06:30".to_string(),
            centroid_lat: lat,
            centroid_lon: lon,
            pixel_count: 1000,
            area_km2: None,
            eccentricity: None,
            perimeter_km: None,
            major_axis_length_km: None,
            minor_axis_length_km: None,
            orientation_deg: None,
            mean_bt_k: Some(220.0),
            min_bt_k: Some(190.0),
            max_bt_k: Some(265.0),
            median_bt_k: Some(218.0),
            std_bt_k: Some(15.0),
            min_radius_km: Some(40.0),
            mean_radius_km: Some(100.0),
            max_radius_km: Some(190.0),
            mean_cth_km: Some(12.0),
            max_cth_km: Some(16.0),
            image_filename: "img.png".to_string(),
        }
    }

    #[test]
    fn test_empty_sequence_is_all_absent() {
        let agg = summarize(&[]);
        assert_eq!(agg.max_cth_km, None);
        assert_eq!(agg.min_bt_k, None);
        assert_eq!(agg.bounds, None);
    }

    #[test]
    fn test_single_point() {
        let agg = summarize(&[test_point(12.5, 83.0)]);
        assert_eq!(agg.max_cth_km, Some(16.0));
        assert_eq!(agg.min_bt_k, Some(190.0));
        let b = agg.bounds.unwrap();
        assert_eq!(b.min_lat, 12.5);
        assert_eq!(b.max_lat, 12.5);
        assert_eq!(b.min_lon, 83.0);
        assert_eq!(b.max_lon, 83.0);
    }

    #[test]
    fn test_reduction_over_several_points() {
        let mut a = test_point(12.0, 83.5);
        a.max_cth_km = Some(14.2);
        a.min_bt_k = Some(192.0);
        let mut b = test_point(13.4, 81.0);
        b.max_cth_km = Some(16.9);
        b.min_bt_k = Some(185.1);
        let mut c = test_point(12.8, 82.2);
        c.max_cth_km = Some(15.5);
        c.min_bt_k = Some(188.0);

        let agg = summarize(&[a, b, c]);
        assert_eq!(agg.max_cth_km, Some(16.9));
        assert_eq!(agg.min_bt_k, Some(185.1));
        let bounds = agg.bounds.unwrap();
        assert_eq!(bounds.min_lat, 12.0);
        assert_eq!(bounds.max_lat, 13.4);
        assert_eq!(bounds.min_lon, 81.0);
        assert_eq!(bounds.max_lon, 83.5);
    }

    #[test]
    fn test_missing_fields_are_excluded_not_coerced() {
        let mut a = test_point(12.0, 83.0);
        a.max_cth_km = None;
        a.min_bt_k = None;
        let mut b = test_point(13.0, 82.0);
        b.max_cth_km = Some(15.0);
        b.min_bt_k = Some(191.5);

        let agg = summarize(&[a, b]);
        // A missing field must not drag the max toward 0 or the min toward
        // a sentinel; only the present values participate.
        assert_eq!(agg.max_cth_km, Some(15.0));
        assert_eq!(agg.min_bt_k, Some(191.5));
    }

    #[test]
    fn test_all_missing_yields_absent() {
        let mut a = test_point(12.0, 83.0);
        a.max_cth_km = None;
        a.min_bt_k = None;
        let mut b = test_point(13.0, 82.0);
        b.max_cth_km = None;
        b.min_bt_k = None;

        let agg = summarize(&[a, b]);
        assert_eq!(agg.max_cth_km, None);
        assert_eq!(agg.min_bt_k, None);
        // The bounding box only needs coordinates, which are mandatory.
        assert!(agg.bounds.is_some());
    }

    #[test]
    fn test_no_non_finite_values_leak() {
        let agg = summarize(&[]);
        assert!(agg.max_cth_km.is_none());
        assert!(agg.min_bt_k.is_none());

        let agg = summarize(&[test_point(-15.0, 70.0), test_point(-16.2, 68.5)]);
        for v in [agg.max_cth_km, agg.min_bt_k] {
            assert!(v.unwrap().is_finite());
        }
        let b = agg.bounds.unwrap();
        for v in [b.min_lat, b.max_lat, b.min_lon, b.max_lon] {
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_southern_hemisphere_bounds() {
        let agg = summarize(&[test_point(-11.3, 92.8), test_point(-13.1, 90.4)]);
        let b = agg.bounds.unwrap();
        assert_eq!(b.min_lat, -13.1);
        assert_eq!(b.max_lat, -11.3);
    }
}
