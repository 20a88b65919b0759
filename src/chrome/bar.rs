//! Custom title bar: logo, menu strip, and window controls
//!
//! The bar renders logo and minimize/maximize/close controls, hosts the
//! menu while the chrome is custom, and turns pointer input into window
//! requests. Empty-area presses begin an interactive move; presses over
//! a live menu entry never do. The maximize icon and tooltip are a pure
//! function of the mirrored maximized state.

use crate::chrome::menu::{MenuCommand, MenuEntry, MenuItem, MenuStructure};
use crate::chrome::ChromeMetrics;
use std::time::{Duration, Instant};

const LOGO_ICON: &str = "logo.svg";
const LOGO_MARGIN: f64 = 8.0;
const ENTRY_PADDING: f64 = 16.0;
const ENTRY_CHAR_WIDTH: f64 = 8.0;
const DOUBLE_CLICK_SLOP: f64 = 4.0;
const ITEM_HEIGHT: f64 = 24.0;
const SUBMENU_INDENT: f64 = 16.0;
const MIN_DROPDOWN_WIDTH: f64 = 160.0;

/// The three window-control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Minimize,
    MaximizeRestore,
    Close,
}

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHit {
    Control(ControlKind),
    MenuEntry(usize),
    /// Logo or empty chrome area; draggable.
    DragArea,
}

/// A dropdown item selected by a press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemActivation {
    SystemFrameToggle,
    Theme(String),
    About,
}

/// Outward request produced by a press on the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarRequest {
    Minimize,
    ToggleMaximize,
    Close,
    BeginMove,
    OpenMenu(usize),
    Activate(ItemActivation),
}

/// One visual row of an open dropdown.
struct DropdownRow {
    width: f64,
    activation: Option<ItemActivation>,
}

/// Flatten a top-level entry into dropdown rows. Submenus contribute a
/// header row followed by their indented children.
fn dropdown_rows(entry: &MenuEntry) -> Vec<DropdownRow> {
    fn push(items: &[MenuItem], indent: f64, rows: &mut Vec<DropdownRow>) {
        for item in items {
            let (title_len, activation) = match item {
                MenuItem::Action { title, command } => (
                    title.chars().count(),
                    Some(match command {
                        MenuCommand::UseSystemFrame(_) => ItemActivation::SystemFrameToggle,
                        MenuCommand::SelectTheme(name) => ItemActivation::Theme(name.clone()),
                        MenuCommand::ShowAbout => ItemActivation::About,
                    }),
                ),
                MenuItem::Toggle { title, .. } => {
                    (title.chars().count(), Some(ItemActivation::SystemFrameToggle))
                }
                MenuItem::Radio { title, theme, .. } => {
                    (title.chars().count(), Some(ItemActivation::Theme(theme.clone())))
                }
                MenuItem::Separator => (0, None),
                MenuItem::Submenu { title, items } => {
                    rows.push(DropdownRow {
                        width: indent + ENTRY_PADDING + ENTRY_CHAR_WIDTH * title.chars().count() as f64,
                        activation: None,
                    });
                    push(items, indent + SUBMENU_INDENT, rows);
                    continue;
                }
            };
            rows.push(DropdownRow {
                width: indent + ENTRY_PADDING + ENTRY_CHAR_WIDTH * title_len as f64,
                activation,
            });
        }
    }

    let mut rows = Vec::new();
    push(&entry.items, 0.0, &mut rows);
    rows
}

/// The custom-drawn title region.
pub struct ChromeBar {
    /// Mirrored maximized state; drives icon and tooltip
    maximized: bool,

    /// True while the OS native frame is active; the bar is hidden
    use_system_frame: bool,

    /// Whether the menu strip is currently hosted here
    menu_attached: bool,

    /// Top-level entry whose dropdown is open, if any
    open_entry: Option<usize>,

    /// Previous empty-area press, for double-click detection
    last_press: Option<(Instant, f64, f64)>,

    double_click_window: Duration,
}

impl ChromeBar {
    pub fn new() -> Self {
        Self {
            maximized: false,
            use_system_frame: false,
            menu_attached: false,
            open_entry: None,
            last_press: None,
            double_click_window: Duration::from_millis(400),
        }
    }

    pub fn set_double_click_window(&mut self, window: Duration) {
        self.double_click_window = window;
    }

    /// Mirror the platform-reported maximized state. No-op when the
    /// value is unchanged.
    pub fn set_maximized(&mut self, maximized: bool) {
        if self.maximized == maximized {
            return;
        }
        self.maximized = maximized;
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Icon for the maximize/restore control, derived from state.
    pub fn maximize_icon(&self) -> &'static str {
        if self.maximized {
            "btn_restore.svg"
        } else {
            "btn_maximize.svg"
        }
    }

    /// Tooltip for the maximize/restore control, derived from state.
    pub fn maximize_tooltip(&self) -> &'static str {
        if self.maximized {
            "Restore"
        } else {
            "Maximize"
        }
    }

    pub fn logo_icon(&self) -> &'static str {
        LOGO_ICON
    }

    /// Hide logo and controls while the native frame provides them.
    ///
    /// The menu host itself is not touched here; menu migration is the
    /// ownership manager's job.
    pub fn set_use_system_frame(&mut self, use_system_frame: bool) {
        self.use_system_frame = use_system_frame;
        if use_system_frame {
            self.open_entry = None;
            self.last_press = None;
        }
    }

    pub fn controls_visible(&self) -> bool {
        !self.use_system_frame
    }

    pub fn logo_visible(&self) -> bool {
        !self.use_system_frame
    }

    pub fn set_menu_attached(&mut self, attached: bool) {
        self.menu_attached = attached;
        if !attached {
            self.open_entry = None;
        }
    }

    pub fn menu_attached(&self) -> bool {
        self.menu_attached
    }

    pub fn open_entry(&self) -> Option<usize> {
        self.open_entry
    }

    /// Horizontal spans of the top-level menu entries, left to right,
    /// starting right after the logo.
    fn entry_spans(&self, metrics: &ChromeMetrics, menu: &MenuStructure) -> Vec<(f64, f64)> {
        let mut x = LOGO_MARGIN + metrics.logo_size as f64 + LOGO_MARGIN;
        let mut spans = Vec::with_capacity(menu.entries().len());
        for entry in menu.entries() {
            let width = ENTRY_PADDING + ENTRY_CHAR_WIDTH * entry.title.chars().count() as f64;
            spans.push((x, x + width));
            x += width;
        }
        spans
    }

    /// Hit test a point against the bar. Returns `None` when the bar is
    /// hidden (native frame active) or the point lies outside it.
    pub fn hit_test(
        &self,
        x: f64,
        y: f64,
        metrics: &ChromeMetrics,
        menu: &MenuStructure,
    ) -> Option<BarHit> {
        if self.use_system_frame {
            return None;
        }

        let width = metrics.width as f64;
        if x < 0.0 || x >= width || y < 0.0 || y > metrics.titlebar_height as f64 {
            return None;
        }

        // Controls sit flush right: minimize, maximize/restore, close.
        let control = metrics.control_size as f64;
        let close_x = width - control;
        let max_x = close_x - control;
        let min_x = max_x - control;
        if x >= close_x {
            return Some(BarHit::Control(ControlKind::Close));
        }
        if x >= max_x {
            return Some(BarHit::Control(ControlKind::MaximizeRestore));
        }
        if x >= min_x {
            return Some(BarHit::Control(ControlKind::Minimize));
        }

        if self.menu_attached {
            for (index, (start, end)) in self.entry_spans(metrics, menu).iter().enumerate() {
                if x >= *start && x < *end {
                    return Some(BarHit::MenuEntry(index));
                }
            }
        }

        Some(BarHit::DragArea)
    }

    /// Hit test an open dropdown. `None` when no dropdown is open or
    /// the point lies outside it; `Some(None)` for a separator or
    /// submenu header row.
    fn dropdown_hit(
        &self,
        x: f64,
        y: f64,
        metrics: &ChromeMetrics,
        menu: &MenuStructure,
    ) -> Option<Option<ItemActivation>> {
        let index = self.open_entry?;
        let entry = menu.entries().get(index)?;
        let rows = dropdown_rows(entry);
        if rows.is_empty() {
            return None;
        }

        let origin_x = self.entry_spans(metrics, menu).get(index)?.0;
        let width = rows
            .iter()
            .map(|row| row.width)
            .fold(MIN_DROPDOWN_WIDTH, f64::max);
        let top = metrics.titlebar_height as f64;

        if x < origin_x || x >= origin_x + width || y < top {
            return None;
        }
        let row = ((y - top) / ITEM_HEIGHT) as usize;
        if row >= rows.len() {
            return None;
        }
        Some(rows[row].activation.clone())
    }

    /// Handle a press while a dropdown is open. The dropdown captures
    /// every press: item rows activate, anything else dismisses, and
    /// the dismissing click is consumed unless it opens another entry.
    fn register_dropdown_press(
        &mut self,
        x: f64,
        y: f64,
        open: usize,
        metrics: &ChromeMetrics,
        menu: &MenuStructure,
    ) -> Option<BarRequest> {
        match self.dropdown_hit(x, y, metrics, menu) {
            Some(Some(activation)) => {
                self.open_entry = None;
                self.last_press = None;
                Some(BarRequest::Activate(activation))
            }
            // Separator or submenu header; the dropdown stays open
            Some(None) => None,
            None => {
                self.open_entry = None;
                self.last_press = None;
                if let Some(BarHit::MenuEntry(index)) = self.hit_test(x, y, metrics, menu) {
                    // Pressing the open entry again only closes it
                    if index != open {
                        self.open_entry = Some(index);
                        return Some(BarRequest::OpenMenu(index));
                    }
                }
                None
            }
        }
    }

    /// Handle a primary-button press at the given position.
    pub fn register_press(
        &mut self,
        x: f64,
        y: f64,
        now: Instant,
        metrics: &ChromeMetrics,
        menu: &MenuStructure,
    ) -> Option<BarRequest> {
        if let Some(open) = self.open_entry {
            return self.register_dropdown_press(x, y, open, metrics, menu);
        }

        match self.hit_test(x, y, metrics, menu)? {
            BarHit::Control(ControlKind::Minimize) => {
                self.last_press = None;
                Some(BarRequest::Minimize)
            }
            BarHit::Control(ControlKind::MaximizeRestore) => {
                self.last_press = None;
                Some(BarRequest::ToggleMaximize)
            }
            BarHit::Control(ControlKind::Close) => {
                self.last_press = None;
                Some(BarRequest::Close)
            }
            BarHit::MenuEntry(index) => {
                // A press over a live menu entry never starts a move.
                self.open_entry = Some(index);
                self.last_press = None;
                Some(BarRequest::OpenMenu(index))
            }
            BarHit::DragArea => {
                self.open_entry = None;
                if let Some((when, px, py)) = self.last_press.take() {
                    let close_in_time = now.duration_since(when) <= self.double_click_window;
                    let close_in_space =
                        (x - px).abs() <= DOUBLE_CLICK_SLOP && (y - py).abs() <= DOUBLE_CLICK_SLOP;
                    if close_in_time && close_in_space {
                        return Some(BarRequest::ToggleMaximize);
                    }
                }
                self.last_press = Some((now, x, y));
                Some(BarRequest::BeginMove)
            }
        }
    }
}

impl Default for ChromeBar {
    fn default() -> Self {
        Self::new()
    }
}
