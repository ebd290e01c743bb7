//! `tccview show` command implementation.

use crate::browse::{format_timestamp, paginate, summarize};
use crate::config::Config;
use crate::data::{TrackPoint, TrackRepository};

pub fn run(config: &Config, track_id: &str, json: bool, page: i64) -> anyhow::Result<()> {
    let repo = TrackRepository::load(config.data.file.as_deref())?;
    let track = repo.get(track_id)?;

    let agg = summarize(&track.track_points);
    let view = paginate(&track.track_points, config.ui.point_page_size, page);

    if json {
        let output = ShowOutput {
            track_id: track.track_id.clone(),
            basin: track.basin.code().to_string(),
            start_time: track.start_time.clone(),
            end_time: track.end_time.clone(),
            duration_hours: track.total_duration_hours,
            max_cth_km: agg.max_cth_km,
            min_bt_k: agg.min_bt_k,
            bounds: agg.bounds.map(|b| Bounds {
                min_lat: b.min_lat,
                max_lat: b.max_lat,
                min_lon: b.min_lon,
                max_lon: b.max_lon,
            }),
            total_points: track.track_points.len(),
            page: view.page,
            total_pages: view.total_pages,
            points: view.items.iter().map(PointRow::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Track: {}", track.track_id);
    println!("  Basin: {}", track.basin.code());
    println!("  Start: {}", format_timestamp(&track.start_time));
    println!("  End:   {}", format_timestamp(&track.end_time));
    println!("  Duration: {:.1} hours", track.total_duration_hours);
    println!("  Max CTH: {} km", fmt_opt(agg.max_cth_km));
    println!("  Min BT:  {} K", fmt_opt(agg.min_bt_k));
    match agg.bounds {
        Some(b) => println!(
            "  Lat: {:.2} to {:.2}   Lon: {:.2} to {:.2}",
            b.min_lat, b.max_lat, b.min_lon, b.max_lon
        ),
        None => println!("  Lat: --   Lon: --"),
    }
    println!();

    if view.items.is_empty() {
        println!("No track points recorded");
        return Ok(());
    }

    for (offset, point) in view.items.iter().enumerate() {
        println!(
            "  #{:<3} {}  ({:.2}, {:.2})  {} px  mean BT {} K  max CTH {} km  {}",
            view.start_index + offset + 1,
            format_timestamp(&point.timestamp),
            point.centroid_lat,
            point.centroid_lon,
            point.pixel_count,
            fmt_opt(point.mean_bt_k),
            fmt_opt(point.max_cth_km),
            point.image_filename,
        );
    }
    println!();
    println!(
        "Page {}/{} ({} points)",
        view.page,
        view.total_pages,
        track.track_points.len()
    );

    Ok(())
}

#[derive(serde::Serialize)]
struct ShowOutput {
    track_id: String,
    basin: String,
    start_time: String,
    end_time: String,
    duration_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_cth_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_bt_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<Bounds>,
    total_points: usize,
    page: usize,
    total_pages: usize,
    points: Vec<PointRow>,
}

#[derive(serde::Serialize)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

#[derive(serde::Serialize)]
struct PointRow {
    timestamp: String,
    centroid_lat: f64,
    centroid_lon: f64,
    pixel_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    mean_bt_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_bt_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mean_radius_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_cth_km: Option<f64>,
    image_filename: String,
}

impl From<&TrackPoint> for PointRow {
    fn from(point: &TrackPoint) -> Self {
        Self {
            timestamp: point.timestamp.clone(),
            centroid_lat: point.centroid_lat,
            centroid_lon: point.centroid_lon,
            pixel_count: point.pixel_count,
            mean_bt_k: point.mean_bt_k,
            min_bt_k: point.min_bt_k,
            mean_radius_km: point.mean_radius_km,
            max_cth_km: point.max_cth_km,
            image_filename: point.image_filename.clone(),
        }
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "--".to_string())
}
