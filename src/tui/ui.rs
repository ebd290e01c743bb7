//! UI rendering functions.

use super::app::{App, Overlay, Screen};
use super::theme::Theme;
use crate::browse::{page_window, summarize, format_timestamp, Page};
use crate::data::{Basin, Track, TrackPoint};
use crate::i18n::Lang;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let t = &app.theme;

    match &app.screen {
        Screen::TrackList => render_track_list(frame, app, area),
        Screen::TrackDetail { track_idx } => render_track_detail(frame, app, *track_idx, area),
        Screen::NotFound { requested } => render_not_found(frame, app, requested, area),
    }

    match &app.overlay {
        Overlay::Help => {
            if let Some(help_area) = centered_rect(55, 60, area) {
                render_help_overlay(frame, app, help_area);
            }
        }
        Overlay::PointDetail { point_idx } => {
            if let Some(detail_area) = centered_rect(55, 75, area) {
                render_point_detail_overlay(frame, app, *point_idx, detail_area);
            }
        }
        Overlay::Compare => {
            if let Some(compare_area) = centered_rect(80, 80, area) {
                render_compare_overlay(frame, app, compare_area);
            }
        }
        Overlay::ThemeSelector { selected } => {
            if let Some(theme_area) = centered_fixed_rect(28, 12, area) {
                render_theme_selector(frame, t, *selected, theme_area);
            }
        }
        Overlay::None => {}
    }
}

// --- Track list screen ---

fn render_track_list(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    let filtered = app.filtered_track_indices();
    let view = app.track_page.view(&filtered);
    render_track_table(frame, app, &view, chunks[1]);
    render_pagination_bar(
        frame,
        app,
        view.page,
        view.total_pages,
        filtered.len(),
        app.lang.text("tracks", "ट्रैक"),
        chunks[2],
    );
    render_list_footer(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;

    let title = Line::from(vec![
        Span::styled(" tccview ", Style::default().bold().fg(t.text_title)),
        Span::raw("│ "),
        Span::styled(
            lang.text(
                "Tropical Cyclone Data Dashboard",
                "उष्णकटिबंधीय चक्रवात डेटा डैशबोर्ड",
            ),
            Style::default().fg(t.text),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{}: {}", lang.text("Basin", "बेसिन"), app.filter.label()),
            Style::default().fg(t.warning),
        ),
        Span::raw(" │ "),
        Span::styled(format!("A {}", app.scale.label()), Style::default().fg(t.text_dim)),
        Span::raw(" │ "),
        Span::styled(lang.toggle_label(), Style::default().fg(t.key_hint)),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border)),
    );

    frame.render_widget(header, area);
}

struct TrackRowData {
    idx: usize,
    track_id: String,
    basin: String,
    basin_color: Color,
    start: String,
    end: String,
    hours: String,
    max_cth: String,
    min_bt: String,
    points: String,
}

fn render_track_table(frame: &mut Frame, app: &App, view: &Page<'_, usize>, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;

    let row_data: Vec<TrackRowData> = view
        .items
        .iter()
        .enumerate()
        .filter_map(|(row_idx, &track_idx)| {
            let track = app.repo().tracks().get(track_idx)?;
            let agg = summarize(&track.track_points);
            Some(TrackRowData {
                idx: row_idx,
                track_id: track.track_id.clone(),
                basin: track.basin.code().to_string(),
                basin_color: basin_color(t, &track.basin),
                start: format_timestamp(&track.start_time),
                end: format_timestamp(&track.end_time),
                hours: format!("{:.1}", track.total_duration_hours),
                max_cth: fmt_opt(agg.max_cth_km, 1),
                min_bt: fmt_opt(agg.min_bt_k, 1),
                points: track.track_points.len().to_string(),
            })
        })
        .collect();

    const PADDING: u16 = 2;
    let col_width = |header: &str, values: &[&str]| -> u16 {
        let max_content = values.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        max_content.max(header.len()) as u16 + PADDING
    };

    let headers = [
        lang.text("Track ID", "ट्रैक ID"),
        lang.text("Basin", "बेसिन"),
        lang.text("Start", "प्रारंभ"),
        lang.text("End", "समाप्ति"),
        lang.text("Hours", "घंटे"),
        "Max CTH",
        "Min BT",
        lang.text("Points", "बिंदु"),
    ];

    let widths: Vec<Constraint> = headers
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            let values: Vec<&str> = row_data
                .iter()
                .map(|r| match i {
                    0 => r.track_id.as_str(),
                    1 => r.basin.as_str(),
                    2 => r.start.as_str(),
                    3 => r.end.as_str(),
                    4 => r.hours.as_str(),
                    5 => r.max_cth.as_str(),
                    6 => r.min_bt.as_str(),
                    7 => r.points.as_str(),
                    _ => "",
                })
                .collect();
            Constraint::Length(col_width(h, &values))
        })
        .collect();

    let header = Row::new(headers.to_vec())
        .style(Style::default().bold())
        .bottom_margin(1);

    let row_height = app.scale.row_height();
    let body_style = if app.scale.emphasize() {
        Style::default().bold()
    } else {
        Style::default()
    };

    let rows: Vec<Row> = row_data
        .into_iter()
        .map(|r| {
            let style = if r.idx == app.track_cursor {
                Style::default().bg(t.selection_bg).fg(t.selection_fg)
            } else {
                body_style
            };

            Row::new(vec![
                Cell::from(r.track_id),
                Cell::from(Span::styled(r.basin, Style::default().fg(r.basin_color))),
                Cell::from(r.start),
                Cell::from(r.end),
                Cell::from(r.hours),
                Cell::from(r.max_cth),
                Cell::from(r.min_bt),
                Cell::from(r.points),
            ])
            .style(style)
            .height(row_height)
        })
        .collect();

    let title = format!(" {} ", lang.text("Cyclone Tracks", "चक्रवात ट्रैक"));
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border)),
    );

    frame.render_widget(table, area);
}

fn render_pagination_bar(
    frame: &mut Frame,
    app: &App,
    page: usize,
    total_pages: usize,
    total_items: usize,
    noun: &str,
    area: Rect,
) {
    let t = &app.theme;
    let window = page_window(page, total_pages, app.config.ui.page_window);

    let mut spans = vec![Span::styled(
        format!(" {}: ", app.lang.text("Page", "पृष्ठ")),
        Style::default().fg(t.text_dim),
    )];

    if let Some(&first) = window.first() {
        if first > 1 {
            spans.push(Span::styled("… ", Style::default().fg(t.text_dim)));
        }
    }
    for number in &window {
        if *number == page {
            spans.push(Span::styled(
                format!("[{}] ", number),
                Style::default().fg(t.accent).bold(),
            ));
        } else {
            spans.push(Span::styled(
                format!("{} ", number),
                Style::default().fg(t.text_dim),
            ));
        }
    }
    if let Some(&last) = window.last() {
        if last < total_pages {
            spans.push(Span::styled("… ", Style::default().fg(t.text_dim)));
        }
    }

    spans.push(Span::styled(
        format!("({}/{} · {} {})", page, total_pages, total_items, noun),
        Style::default().fg(t.text_dim),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.border_dim)),
        );

    frame.render_widget(bar, area);
}

fn render_list_footer(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let hints = app.lang.text(
        "[↑↓] Move  [←→] Page  [Enter] Details  [f] Basin  [L] Language  [+/-/0] Text  [T] Theme  [?] Help  [q] Quit",
        "[↑↓] चुनें  [←→] पृष्ठ  [Enter] विवरण  [f] बेसिन  [L] भाषा  [+/-/0] अक्षर  [T] थीम  [?] सहायता  [q] बाहर",
    );

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(t.text_dim))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

// --- Track detail screen ---

fn render_track_detail(frame: &mut Frame, app: &App, track_idx: usize, area: Rect) {
    let t = &app.theme;
    let track = match app.repo().tracks().get(track_idx) {
        Some(track) => track,
        None => {
            let msg = Paragraph::new(app.lang.text("Track not found", "ट्रैक नहीं मिला"))
                .style(Style::default().fg(t.error))
                .alignment(Alignment::Center);
            frame.render_widget(msg, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_detail_header(frame, app, track, chunks[0]);
    render_summary(frame, app, track, chunks[1]);
    render_selection_bar(frame, app, chunks[2]);

    let view = app.point_page.view(&track.track_points);
    render_point_table(frame, app, &view, chunks[3]);
    render_pagination_bar(
        frame,
        app,
        view.page,
        view.total_pages,
        track.track_points.len(),
        app.lang.text("points", "बिंदु"),
        chunks[4],
    );
    render_detail_footer(frame, app, chunks[5]);
}

fn render_detail_header(frame: &mut Frame, app: &App, track: &Track, area: Rect) {
    let t = &app.theme;
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", track.track_id),
            Style::default().bold().fg(t.text_title),
        ),
        Span::raw("── "),
        Span::styled(
            track.basin.code(),
            Style::default().fg(basin_color(t, &track.basin)).bold(),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("A {}", app.scale.label()),
            Style::default().fg(t.text_dim),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border)),
    );

    frame.render_widget(header, area);
}

fn render_summary(frame: &mut Frame, app: &App, track: &Track, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;
    let agg = summarize(&track.track_points);

    let label = |text: &'static str| Span::styled(text, Style::default().fg(t.text_dim));
    let value = |text: String| Span::styled(text, Style::default().fg(t.text));

    let coords = match agg.bounds {
        Some(b) => format!(
            "{:.2} → {:.2}   Lon: {:.2} → {:.2}",
            b.min_lat, b.max_lat, b.min_lon, b.max_lon
        ),
        None => "--".to_string(),
    };

    let content = vec![
        Line::from(vec![
            label("Start: "),
            value(format_timestamp(&track.start_time)),
            Span::raw("   "),
            label("End: "),
            value(format_timestamp(&track.end_time)),
            Span::raw("   "),
            label("Duration: "),
            value(format!(
                "{:.1} {}",
                track.total_duration_hours,
                lang.text("hours", "घंटे")
            )),
        ]),
        Line::from(vec![
            label("Max CTH: "),
            Span::styled(
                format!("{} km", fmt_opt(agg.max_cth_km, 1)),
                Style::default().bold().fg(t.info),
            ),
            Span::raw("   "),
            label("Min BT: "),
            Span::styled(
                format!("{} K", fmt_opt(agg.min_bt_k, 1)),
                Style::default().bold().fg(t.info),
            ),
        ]),
        Line::from(vec![label("Lat: "), value(coords)]),
        Line::from(vec![
            label("Observations: "),
            value(track.track_points.len().to_string()),
        ]),
    ];

    let title = format!(" {} ", lang.text("Track Summary", "ट्रैक सारांश"));
    let summary = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border)),
    );

    frame.render_widget(summary, area);
}

fn render_selection_bar(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;
    let selected = app.selection.len();
    let capacity = app.selection.capacity();

    let status_style = if app.selection.can_compare() {
        Style::default().fg(t.success).bold()
    } else if app.selection.is_full() {
        Style::default().fg(t.warning)
    } else {
        Style::default().fg(t.text_dim)
    };

    let mut spans = vec![
        Span::styled(
            format!(
                " {}: {}/{} ",
                lang.text("Selected images", "चयनित छवियां"),
                selected,
                capacity
            ),
            status_style,
        ),
        Span::raw("│ "),
        Span::styled("[Space] ", Style::default().fg(t.key_hint)),
        Span::styled(lang.text("Select", "चुनें"), Style::default().fg(t.text_dim)),
        Span::raw("  "),
    ];

    if app.selection.can_compare() {
        spans.push(Span::styled("[c] ", Style::default().fg(t.key_hint).bold()));
        spans.push(Span::styled(
            lang.text("Compare", "तुलना करें"),
            Style::default().fg(t.success).bold(),
        ));
    } else {
        spans.push(Span::styled("[c] ", Style::default().fg(t.border_dim)));
        spans.push(Span::styled(
            lang.text("Compare (pick 2)", "तुलना (2 चुनें)"),
            Style::default().fg(t.border_dim),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled("[x] ", Style::default().fg(t.key_hint)));
    spans.push(Span::styled(
        lang.text("Clear", "साफ़ करें"),
        Style::default().fg(t.text_dim),
    ));

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_dim)),
    );

    frame.render_widget(bar, area);
}

fn render_point_table(frame: &mut Frame, app: &App, view: &Page<'_, TrackPoint>, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;

    let headers = [
        "",
        lang.text("Timestamp", "समय"),
        lang.text("Lat", "अक्षांश"),
        lang.text("Lon", "देशांतर"),
        lang.text("Pixels", "पिक्सेल"),
        "Mean BT",
        "Min BT",
        "Mean R",
        "Max CTH",
        lang.text("Image", "छवि"),
    ];

    struct PointRowData {
        idx: usize,
        marker: String,
        marker_selected: bool,
        timestamp: String,
        lat: String,
        lon: String,
        pixels: String,
        mean_bt: String,
        min_bt: String,
        mean_radius: String,
        max_cth: String,
        image: String,
    }

    let rows_data: Vec<PointRowData> = view
        .items
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let selected = app.selection.contains(&point.image_filename);
            let marker = if selected {
                "[x]"
            } else if app.selection.is_selectable(&point.image_filename) {
                "[ ]"
            } else {
                // Selection is full; this row cannot be picked.
                " · "
            };
            PointRowData {
                idx,
                marker: marker.to_string(),
                marker_selected: selected,
                timestamp: format_timestamp(&point.timestamp),
                lat: format!("{:.2}", point.centroid_lat),
                lon: format!("{:.2}", point.centroid_lon),
                pixels: format_count(point.pixel_count),
                mean_bt: fmt_opt(point.mean_bt_k, 1),
                min_bt: fmt_opt(point.min_bt_k, 1),
                mean_radius: fmt_opt(point.mean_radius_km, 1),
                max_cth: fmt_opt(point.max_cth_km, 1),
                image: point.image_filename.clone(),
            }
        })
        .collect();

    const PADDING: u16 = 2;
    let col_width = |header: &str, values: &[&str]| -> u16 {
        let max_content = values.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        max_content.max(header.len()) as u16 + PADDING
    };

    let widths: Vec<Constraint> = headers
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            let values: Vec<&str> = rows_data
                .iter()
                .map(|r| match i {
                    0 => r.marker.as_str(),
                    1 => r.timestamp.as_str(),
                    2 => r.lat.as_str(),
                    3 => r.lon.as_str(),
                    4 => r.pixels.as_str(),
                    5 => r.mean_bt.as_str(),
                    6 => r.min_bt.as_str(),
                    7 => r.mean_radius.as_str(),
                    8 => r.max_cth.as_str(),
                    9 => r.image.as_str(),
                    _ => "",
                })
                .collect();
            Constraint::Length(col_width(h, &values))
        })
        .collect();

    let header = Row::new(headers.to_vec())
        .style(Style::default().bold())
        .bottom_margin(1);

    let row_height = app.scale.row_height();
    let rows: Vec<Row> = rows_data
        .into_iter()
        .map(|r| {
            let style = if r.idx == app.point_cursor {
                Style::default().bg(t.selection_bg).fg(t.selection_fg)
            } else {
                Style::default()
            };
            let marker_style = if r.marker_selected {
                Style::default().fg(t.accent).bold()
            } else {
                Style::default().fg(t.text_dim)
            };

            Row::new(vec![
                Cell::from(Span::styled(r.marker, marker_style)),
                Cell::from(r.timestamp),
                Cell::from(r.lat),
                Cell::from(r.lon),
                Cell::from(r.pixels),
                Cell::from(r.mean_bt),
                Cell::from(r.min_bt),
                Cell::from(r.mean_radius),
                Cell::from(r.max_cth),
                Cell::from(r.image),
            ])
            .style(style)
            .height(row_height)
        })
        .collect();

    let title = format!(" {} ", lang.text("Track Points", "ट्रैक बिंदु"));
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border)),
    );

    frame.render_widget(table, area);
}

fn render_detail_footer(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let hints = app.lang.text(
        "[↑↓] Move  [←→] Page  [Space] Select  [c] Compare  [Enter] Image data  [x] Clear  [Esc] Back  [?] Help",
        "[↑↓] चुनें  [←→] पृष्ठ  [Space] चयन  [c] तुलना  [Enter] छवि डेटा  [x] साफ़  [Esc] वापस  [?] सहायता",
    );

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(t.text_dim))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

// --- Not-found screen ---

fn render_not_found(frame: &mut Frame, app: &App, requested: &str, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            lang.text("Track Not Found", "ट्रैक नहीं मिला"),
            Style::default().bold().fg(t.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            requested.to_string(),
            Style::default().fg(t.text_title),
        )),
        Line::from(""),
        Line::from(Span::styled(
            lang.text(
                "No track with this identifier exists in the loaded dataset.",
                "लोड किए गए डेटासेट में इस पहचानकर्ता वाला कोई ट्रैक नहीं है।",
            ),
            Style::default().fg(t.text_dim),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc] ", Style::default().fg(t.key_hint).bold()),
            Span::styled(
                lang.text("Back to track list", "ट्रैक सूची पर वापस"),
                Style::default().fg(t.text),
            ),
        ]),
    ];

    let message = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.error)),
        );

    frame.render_widget(message, area);
}

// --- Overlays ---

/// Structured per-point lines shared by the image-data overlay and each
/// column of the comparison view.
fn point_lines<'a>(point: &'a TrackPoint, lang: Lang, t: &Theme) -> Vec<Line<'a>> {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(t.text_dim));
    let value = |text: String| Span::styled(text, Style::default().fg(t.text));

    let mut lines = vec![
        Line::from(Span::styled(
            point.image_filename.as_str(),
            Style::default().bold().fg(t.text_title),
        )),
        Line::from(""),
        Line::from(vec![
            label("Timestamp: "),
            value(format_timestamp(&point.timestamp)),
        ]),
        Line::from(vec![
            label("Location: "),
            value(format!(
                "{:.4}°, {:.4}°",
                point.centroid_lat, point.centroid_lon
            )),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            lang.text("Temperature", "तापमान"),
            Style::default().fg(t.info).bold(),
        )),
        Line::from(vec![
            label("  Mean BT: "),
            value(format!("{} K", fmt_opt(point.mean_bt_k, 2))),
            label("   Min BT: "),
            value(format!("{} K", fmt_opt(point.min_bt_k, 2))),
        ]),
        Line::from(vec![
            label("  Median BT: "),
            value(format!("{} K", fmt_opt(point.median_bt_k, 2))),
            label("   Std BT: "),
            value(format!("{} K", fmt_opt(point.std_bt_k, 2))),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            lang.text("Physical Properties", "भौतिक गुण"),
            Style::default().fg(t.info).bold(),
        )),
        Line::from(vec![
            label("  Pixel count: "),
            value(format_count(point.pixel_count)),
        ]),
        Line::from(vec![
            label("  Radius (min/mean/max): "),
            value(format!(
                "{} / {} / {} km",
                fmt_opt(point.min_radius_km, 1),
                fmt_opt(point.mean_radius_km, 1),
                fmt_opt(point.max_radius_km, 1)
            )),
        ]),
        Line::from(vec![
            label("  CTH (mean/max): "),
            value(format!(
                "{} / {} km",
                fmt_opt(point.mean_cth_km, 2),
                fmt_opt(point.max_cth_km, 2)
            )),
        ]),
    ];

    if point.area_km2.is_some() || point.eccentricity.is_some() {
        lines.push(Line::from(vec![
            label("  Area: "),
            value(format!("{} km²", fmt_opt(point.area_km2, 1))),
            label("   Eccentricity: "),
            value(fmt_opt(point.eccentricity, 2)),
        ]));
    }

    lines
}

fn render_point_detail_overlay(frame: &mut Frame, app: &App, point_idx: usize, area: Rect) {
    let t = &app.theme;
    let Some(track) = app.current_track() else {
        return;
    };
    let Some(point) = track.track_points.get(point_idx) else {
        return;
    };

    let mut lines = point_lines(point, app.lang, t);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.lang.text("[Esc] Close", "[Esc] बंद करें"),
        Style::default().fg(t.text_dim),
    )));

    let title = format!(" {} ", app.lang.text("Image Data", "छवि डेटा"));
    let dialog = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(t.text_title).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_highlight))
            .style(Style::default().bg(t.background)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn render_compare_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let points = app.selected_points();
    if points.len() != 2 {
        return;
    }

    frame.render_widget(Clear, area);

    let outer_title = format!(
        " {} ",
        app.lang
            .text("Image Comparison", "छवि तुलना")
    );
    let outer = Block::default()
        .title(outer_title)
        .title_style(Style::default().fg(t.text_title).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border_highlight))
        .style(Style::default().bg(t.background));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (idx, &point) in points.iter().enumerate() {
        let mut lines = point_lines(point, app.lang, t);
        lines.push(Line::from(""));
        if idx == 1 {
            lines.push(Line::from(Span::styled(
                app.lang.text("[Esc] Close", "[Esc] बंद करें"),
                Style::default().fg(t.text_dim),
            )));
        }

        let title = format!(" {} {} ", app.lang.text("Image", "छवि"), idx + 1);
        let column = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.border_dim)),
        );
        frame.render_widget(column, columns[idx]);
    }
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let t = &app.theme;
    let lang = app.lang;
    let key_style = Style::default().fg(t.key_hint).bold();
    let desc_style = Style::default().fg(t.text);
    let dim_style = Style::default().fg(t.text_dim);
    let section_style = Style::default().fg(t.text_title).bold();

    let help_text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("─── ", dim_style),
            Span::styled(lang.text("Navigation", "नेविगेशन"), section_style),
            Span::styled(" ───", dim_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑ ↓ ", key_style),
            Span::styled(lang.text("Move", "चलें"), desc_style),
            Span::styled("   ← → ", key_style),
            Span::styled(lang.text("Page", "पृष्ठ"), desc_style),
            Span::styled("   Enter ", key_style),
            Span::styled(lang.text("Open", "खोलें"), desc_style),
            Span::styled("   Esc ", key_style),
            Span::styled(lang.text("Back", "वापस"), desc_style),
        ]),
        Line::from(vec![
            Span::styled("  f ", key_style),
            Span::styled(lang.text("Cycle basin filter", "बेसिन फ़िल्टर"), desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("─── ", dim_style),
            Span::styled(lang.text("Comparison", "तुलना"), section_style),
            Span::styled(" ───", dim_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Space ", key_style),
            Span::styled(lang.text("Select image (max 2)", "छवि चुनें (अधिकतम 2)"), desc_style),
        ]),
        Line::from(vec![
            Span::styled("  c ", key_style),
            Span::styled(lang.text("Compare selected", "चयनित की तुलना"), desc_style),
            Span::styled("   x ", key_style),
            Span::styled(lang.text("Clear selection", "चयन साफ़ करें"), desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("─── ", dim_style),
            Span::styled(lang.text("Display", "प्रदर्शन"), section_style),
            Span::styled(" ───", dim_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  + - 0 ", key_style),
            Span::styled(lang.text("Text size", "अक्षर आकार"), desc_style),
            Span::styled("   L ", key_style),
            Span::styled(lang.text("Language", "भाषा"), desc_style),
            Span::styled("   T ", key_style),
            Span::styled(lang.text("Theme", "थीम"), desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("───────────────────────", dim_style)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ? ", key_style),
            Span::styled(lang.text("Help", "सहायता"), desc_style),
            Span::styled("   q ", key_style),
            Span::styled(lang.text("Quit", "बाहर"), desc_style),
        ]),
        Line::from(""),
    ];

    let title = format!(" {} ", lang.text("Keyboard Shortcuts", "कीबोर्ड शॉर्टकट"));
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(t.text_title).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.border_dim))
                .style(Style::default().bg(t.background)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

fn render_theme_selector(frame: &mut Frame, t: &Theme, selected: usize, area: Rect) {
    let themes = Theme::available_themes();
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Select Theme",
            Style::default().bold().fg(t.text_title),
        )),
        Line::from(""),
    ];

    for (idx, &name) in themes.iter().enumerate() {
        let display_name = Theme::by_name(name).map(|t| t.name).unwrap_or(name);
        let is_selected = idx == selected;
        let prefix = if is_selected { "► " } else { "  " };
        let style = if is_selected {
            Style::default().fg(t.text).bold()
        } else {
            Style::default().fg(t.text_dim)
        };

        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, display_name),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[↑↓] ", Style::default().fg(t.key_hint).bold()),
        Span::styled("Select", Style::default().fg(t.text_dim)),
        Span::raw("  "),
        Span::styled("[Enter] ", Style::default().fg(t.key_hint).bold()),
        Span::styled("Apply", Style::default().fg(t.text_dim)),
        Span::raw("  "),
        Span::styled("[Esc] ", Style::default().fg(t.text_dim).bold()),
        Span::styled("Cancel", Style::default().fg(t.text_dim)),
    ]));

    let dialog = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Theme ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border))
            .style(Style::default().bg(t.background)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

// --- Shared helpers ---

fn basin_color(t: &Theme, basin: &Basin) -> Color {
    match basin {
        Basin::NorthIndian => t.basin_nio,
        Basin::SouthIndian => t.basin_sio,
        Basin::Other(_) => t.basin_other,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Option<Rect> {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let popup_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    Some(popup_area[1])
}

fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Option<Rect> {
    if area.width < width || area.height < height {
        return None;
    }

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Some(Rect::new(x, y, width, height))
}

/// `--` for absent values; nothing non-finite ever reaches the screen.
fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.*}", precision, v),
        _ => "--".to_string(),
    }
}

fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_opt_present() {
        assert_eq!(fmt_opt(Some(16.42), 1), "16.4");
        assert_eq!(fmt_opt(Some(185.123), 2), "185.12");
    }

    #[test]
    fn test_fmt_opt_absent_is_dashes() {
        assert_eq!(fmt_opt(None, 1), "--");
    }

    #[test]
    fn test_fmt_opt_never_renders_non_finite() {
        assert_eq!(fmt_opt(Some(f64::INFINITY), 1), "--");
        assert_eq!(fmt_opt(Some(f64::NAN), 1), "--");
    }

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(24_768), "24,768");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_centered_fixed_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_fixed_rect(28, 12, area).unwrap();
        assert_eq!(rect.width, 28);
        assert_eq!(rect.height, 12);
        assert_eq!(rect.x, 36);
        assert_eq!(rect.y, 14);
    }

    #[test]
    fn test_centered_fixed_rect_too_small() {
        let area = Rect::new(0, 0, 20, 10);
        assert!(centered_fixed_rect(28, 12, area).is_none());
    }

    #[test]
    fn test_basin_colors_distinct() {
        let t = Theme::default();
        let nio = basin_color(&t, &Basin::NorthIndian);
        let sio = basin_color(&t, &Basin::SouthIndian);
        let other = basin_color(&t, &Basin::Other("BOB".into()));
        assert_ne!(nio, sio);
        assert_ne!(sio, other);
    }
}
