//! Application state and core logic.

use super::event::Action;
use super::theme::Theme;
use crate::browse::{PageState, Selection};
use crate::config::Config;
use crate::data::{Basin, Track, TrackPoint, TrackRepository};
use crate::i18n::Lang;

/// How many images can be compared at once.
const COMPARE_CAPACITY: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    TrackList,
    TrackDetail {
        /// Index into the repository's track slice.
        track_idx: usize,
    },
    NotFound {
        /// The identifier that failed to resolve.
        requested: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    PointDetail {
        /// Absolute index into the current track's points.
        point_idx: usize,
    },
    Compare,
    ThemeSelector {
        selected: usize,
    },
}

/// Discrete text-scale steps with clamping at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextScale {
    XSmall,
    Small,
    #[default]
    Normal,
    Large,
    XLarge,
}

impl TextScale {
    pub fn increase(self) -> Self {
        match self {
            TextScale::XSmall => TextScale::Small,
            TextScale::Small => TextScale::Normal,
            TextScale::Normal => TextScale::Large,
            TextScale::Large | TextScale::XLarge => TextScale::XLarge,
        }
    }

    pub fn decrease(self) -> Self {
        match self {
            TextScale::XLarge => TextScale::Large,
            TextScale::Large => TextScale::Normal,
            TextScale::Normal => TextScale::Small,
            TextScale::Small | TextScale::XSmall => TextScale::XSmall,
        }
    }

    pub fn reset() -> Self {
        TextScale::Normal
    }

    pub fn label(self) -> &'static str {
        match self {
            TextScale::XSmall => "70%",
            TextScale::Small => "85%",
            TextScale::Normal => "100%",
            TextScale::Large => "115%",
            TextScale::XLarge => "130%",
        }
    }

    /// Table row height for this scale; larger scales get breathing room.
    pub fn row_height(self) -> u16 {
        match self {
            TextScale::Large | TextScale::XLarge => 2,
            _ => 1,
        }
    }

    /// Whether body text should be bolded at this scale.
    pub fn emphasize(self) -> bool {
        self == TextScale::XLarge
    }
}

/// Basin filter applied to the track list, cycled with one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BasinFilter {
    #[default]
    All,
    NorthIndian,
    SouthIndian,
    Other,
}

impl BasinFilter {
    pub fn next(self) -> Self {
        match self {
            BasinFilter::All => BasinFilter::NorthIndian,
            BasinFilter::NorthIndian => BasinFilter::SouthIndian,
            BasinFilter::SouthIndian => BasinFilter::Other,
            BasinFilter::Other => BasinFilter::All,
        }
    }

    pub fn matches(self, basin: &Basin) -> bool {
        match self {
            BasinFilter::All => true,
            BasinFilter::NorthIndian => *basin == Basin::NorthIndian,
            BasinFilter::SouthIndian => *basin == Basin::SouthIndian,
            BasinFilter::Other => matches!(basin, Basin::Other(_)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BasinFilter::All => "All",
            BasinFilter::NorthIndian => "NIO",
            BasinFilter::SouthIndian => "SIO",
            BasinFilter::Other => "Other",
        }
    }
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub lang: Lang,
    pub scale: TextScale,
    repo: TrackRepository,
    pub screen: Screen,
    pub overlay: Overlay,
    pub filter: BasinFilter,
    pub track_page: PageState,
    /// Row within the visible track page.
    pub track_cursor: usize,
    pub point_page: PageState,
    /// Row within the visible point page.
    pub point_cursor: usize,
    /// Image filenames picked for comparison; lives and dies with the
    /// detail view session.
    pub selection: Selection<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, repo: TrackRepository) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_default();
        let lang = config.ui.language;
        let track_page = PageState::new(config.ui.track_page_size);
        let point_page = PageState::new(config.ui.point_page_size);

        Self {
            config,
            theme,
            lang,
            scale: TextScale::default(),
            repo,
            screen: Screen::TrackList,
            overlay: Overlay::None,
            filter: BasinFilter::All,
            track_page,
            track_cursor: 0,
            point_page,
            point_cursor: 0,
            selection: Selection::new(COMPARE_CAPACITY),
            should_quit: false,
        }
    }

    pub fn repo(&self) -> &TrackRepository {
        &self.repo
    }

    /// Deep-link into one track's detail view, or the not-found screen.
    pub fn open_track(&mut self, track_id: &str) {
        match self
            .repo
            .tracks()
            .iter()
            .position(|t| t.track_id == track_id)
        {
            Some(track_idx) => {
                self.screen = Screen::TrackDetail { track_idx };
                self.reset_detail_state();
            }
            None => {
                tracing::warn!(track_id, "Requested track not found");
                self.screen = Screen::NotFound {
                    requested: track_id.to_string(),
                };
            }
        }
    }

    /// Indices of tracks passing the basin filter, in archive order.
    pub fn filtered_track_indices(&self) -> Vec<usize> {
        self.repo
            .tracks()
            .iter()
            .enumerate()
            .filter(|(_, t)| self.filter.matches(&t.basin))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn current_track(&self) -> Option<&Track> {
        match self.screen {
            Screen::TrackDetail { track_idx } => self.repo.tracks().get(track_idx),
            _ => None,
        }
    }

    /// The points picked for comparison, in selection order.
    pub fn selected_points(&self) -> Vec<&TrackPoint> {
        let Some(track) = self.current_track() else {
            return Vec::new();
        };
        self.selection
            .keys()
            .iter()
            .filter_map(|key| {
                track
                    .track_points
                    .iter()
                    .find(|p| p.image_filename == *key)
            })
            .collect()
    }

    /// Route one input action through the overlay/screen state machine.
    pub fn apply(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        // An open overlay captures input before the screen does.
        match self.overlay {
            Overlay::ThemeSelector { selected } => {
                self.apply_in_theme_selector(action, selected);
                return;
            }
            Overlay::Help | Overlay::PointDetail { .. } | Overlay::Compare => {
                if matches!(action, Action::Back | Action::Enter | Action::Help) {
                    self.overlay = Overlay::None;
                }
                return;
            }
            Overlay::None => {}
        }

        match action {
            Action::Up => self.cursor_up(),
            Action::Down => self.cursor_down(),
            Action::PagePrev => self.page_prev(),
            Action::PageNext => self.page_next(),
            Action::Enter => self.enter(),
            Action::Back => self.back(),
            Action::Help => self.overlay = Overlay::Help,
            Action::ToggleSelect => self.toggle_select(),
            Action::Compare => self.compare(),
            Action::ClearSelection => self.selection.clear(),
            Action::CycleBasinFilter => self.cycle_filter(),
            Action::ScaleUp => self.scale = self.scale.increase(),
            Action::ScaleDown => self.scale = self.scale.decrease(),
            Action::ScaleReset => self.scale = TextScale::reset(),
            Action::ToggleLang => self.lang = self.lang.toggle(),
            Action::ThemeSelector => self.open_theme_selector(),
            Action::Quit | Action::None => {}
        }
    }

    fn apply_in_theme_selector(&mut self, action: Action, selected: usize) {
        let count = Theme::available_themes().len();
        match action {
            Action::Up => {
                let selected = selected.checked_sub(1).unwrap_or(count - 1);
                self.overlay = Overlay::ThemeSelector { selected };
            }
            Action::Down => {
                self.overlay = Overlay::ThemeSelector {
                    selected: (selected + 1) % count,
                };
            }
            Action::Enter => {
                let name = Theme::available_themes()[selected];
                if let Some(theme) = Theme::by_name(name) {
                    tracing::info!(theme = name, "Theme changed");
                    self.theme = theme;
                }
                self.overlay = Overlay::None;
            }
            Action::Back | Action::ThemeSelector => self.overlay = Overlay::None,
            _ => {}
        }
    }

    fn open_theme_selector(&mut self) {
        let selected = Theme::available_themes()
            .iter()
            .position(|name| {
                Theme::by_name(name)
                    .map(|t| t.name == self.theme.name)
                    .unwrap_or(false)
            })
            .unwrap_or(0);
        self.overlay = Overlay::ThemeSelector { selected };
    }

    fn cursor_up(&mut self) {
        let cursor = match self.screen {
            Screen::TrackList => &mut self.track_cursor,
            Screen::TrackDetail { .. } => &mut self.point_cursor,
            Screen::NotFound { .. } => return,
        };
        *cursor = cursor.saturating_sub(1);
    }

    fn cursor_down(&mut self) {
        match self.screen {
            Screen::TrackList => {
                let visible = self.visible_track_count();
                if self.track_cursor + 1 < visible {
                    self.track_cursor += 1;
                }
            }
            Screen::TrackDetail { .. } => {
                let visible = self.visible_point_count();
                if self.point_cursor + 1 < visible {
                    self.point_cursor += 1;
                }
            }
            Screen::NotFound { .. } => {}
        }
    }

    fn page_prev(&mut self) {
        match self.screen {
            Screen::TrackList => {
                let before = self.track_page.page;
                self.track_page.prev();
                if self.track_page.page != before {
                    self.track_cursor = 0;
                }
            }
            Screen::TrackDetail { .. } => {
                let before = self.point_page.page;
                self.point_page.prev();
                if self.point_page.page != before {
                    self.point_cursor = 0;
                }
            }
            Screen::NotFound { .. } => {}
        }
    }

    fn page_next(&mut self) {
        match self.screen {
            Screen::TrackList => {
                let total = self.filtered_track_indices().len();
                let before = self.track_page.page;
                self.track_page.next(total);
                if self.track_page.page != before {
                    self.track_cursor = 0;
                }
            }
            Screen::TrackDetail { .. } => {
                let total = self
                    .current_track()
                    .map(|t| t.track_points.len())
                    .unwrap_or(0);
                let before = self.point_page.page;
                self.point_page.next(total);
                if self.point_page.page != before {
                    self.point_cursor = 0;
                }
            }
            Screen::NotFound { .. } => {}
        }
    }

    fn enter(&mut self) {
        match self.screen {
            Screen::TrackList => {
                if let Some(track_idx) = self.track_under_cursor() {
                    self.screen = Screen::TrackDetail { track_idx };
                    self.reset_detail_state();
                }
            }
            Screen::TrackDetail { .. } => {
                if let Some(point_idx) = self.point_under_cursor() {
                    self.overlay = Overlay::PointDetail { point_idx };
                }
            }
            Screen::NotFound { .. } => self.back(),
        }
    }

    fn back(&mut self) {
        match self.screen {
            Screen::TrackDetail { .. } | Screen::NotFound { .. } => {
                self.screen = Screen::TrackList;
                // The selection is scoped to one detail session.
                self.reset_detail_state();
            }
            Screen::TrackList => {}
        }
    }

    fn toggle_select(&mut self) {
        if !matches!(self.screen, Screen::TrackDetail { .. }) {
            return;
        }
        let Some(point_idx) = self.point_under_cursor() else {
            return;
        };
        let Some(track) = self.current_track() else {
            return;
        };
        let key = track.track_points[point_idx].image_filename.clone();
        if !self.selection.toggle(key) {
            tracing::debug!("Selection full, ignoring toggle");
        }
    }

    fn compare(&mut self) {
        if matches!(self.screen, Screen::TrackDetail { .. }) && self.selection.can_compare() {
            self.overlay = Overlay::Compare;
        }
    }

    fn cycle_filter(&mut self) {
        if !matches!(self.screen, Screen::TrackList) {
            return;
        }
        self.filter = self.filter.next();
        self.track_page.reset();
        self.track_cursor = 0;
    }

    /// Absolute repository index of the track under the list cursor.
    pub fn track_under_cursor(&self) -> Option<usize> {
        let filtered = self.filtered_track_indices();
        let view = self.track_page.view(&filtered);
        view.items.get(self.track_cursor).copied()
    }

    /// Absolute point index under the detail cursor.
    pub fn point_under_cursor(&self) -> Option<usize> {
        let track = self.current_track()?;
        let view = self.point_page.view(&track.track_points);
        if self.point_cursor < view.items.len() {
            Some(view.start_index + self.point_cursor)
        } else {
            None
        }
    }

    fn visible_track_count(&self) -> usize {
        let filtered = self.filtered_track_indices();
        self.track_page.view(&filtered).items.len()
    }

    fn visible_point_count(&self) -> usize {
        self.current_track()
            .map(|t| self.point_page.view(&t.track_points).items.len())
            .unwrap_or(0)
    }

    fn reset_detail_state(&mut self) {
        self.point_page.reset();
        self.point_cursor = 0;
        self.selection.clear();
    }
}
