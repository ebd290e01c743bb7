//! `tccview list` command implementation.

use crate::browse::{paginate, summarize, format_timestamp};
use crate::config::Config;
use crate::data::{Track, TrackRepository};

pub fn run(config: &Config, json: bool, basin: Option<String>, page: i64) -> anyhow::Result<()> {
    let repo = TrackRepository::load(config.data.file.as_deref())?;

    let filtered: Vec<&Track> = repo
        .tracks()
        .iter()
        .filter(|t| match &basin {
            Some(code) => t.basin.code().eq_ignore_ascii_case(code),
            None => true,
        })
        .collect();

    if filtered.is_empty() {
        if json {
            println!("[]");
        } else if let Some(code) = basin {
            println!("No tracks found for basin '{}'", code);
        } else {
            println!("No tracks found");
        }
        return Ok(());
    }

    let view = paginate(&filtered, config.ui.track_page_size, page);

    let rows: Vec<TrackRow> = view
        .items
        .iter()
        .map(|track| {
            let agg = summarize(&track.track_points);
            TrackRow {
                track_id: track.track_id.clone(),
                basin: track.basin.code().to_string(),
                start_time: track.start_time.clone(),
                end_time: track.end_time.clone(),
                duration_hours: track.total_duration_hours,
                max_cth_km: agg.max_cth_km,
                min_bt_k: agg.min_bt_k,
                points: track.track_points.len(),
            }
        })
        .collect();

    if json {
        let output = ListOutput {
            page: view.page,
            total_pages: view.total_pages,
            total_tracks: filtered.len(),
            tracks: rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for row in &rows {
            println!(
                "{}  [{}]  {} → {}  ({:.1} h, {} points)",
                row.track_id,
                row.basin,
                format_timestamp(&row.start_time),
                format_timestamp(&row.end_time),
                row.duration_hours,
                row.points,
            );
            println!(
                "  Max CTH: {} km   Min BT: {} K",
                fmt_opt(row.max_cth_km),
                fmt_opt(row.min_bt_k)
            );
        }
        println!();
        println!(
            "Page {}/{} ({} tracks)",
            view.page,
            view.total_pages,
            filtered.len()
        );
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct ListOutput {
    page: usize,
    total_pages: usize,
    total_tracks: usize,
    tracks: Vec<TrackRow>,
}

#[derive(serde::Serialize)]
struct TrackRow {
    track_id: String,
    basin: String,
    start_time: String,
    end_time: String,
    duration_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_cth_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_bt_k: Option<f64>,
    points: usize,
}

fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "--".to_string())
}
