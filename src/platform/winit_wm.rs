//! Winit-backed window manager for Kafka Viewer
//!
//! Maps the [`WindowManager`] capabilities onto winit 0.30. Interactive
//! move/resize delegate to `drag_window`/`drag_resize_window`, so the
//! platform drives the whole gesture after the initial request.

use crate::chrome::menu::MenuStructure;
use crate::chrome::WindowRunState;
use crate::platform::{CursorShape, DecorationFlags, EdgeSet, WindowManager};
use log::debug;
use std::sync::Arc;
use winit::window::{Cursor, CursorIcon, ResizeDirection, Window, WindowButtons};

/// Winit implementation of the platform window-manager seam.
pub struct WinitWindowManager {
    /// The underlying winit window
    window: Arc<Window>,

    /// Deferred close request; winit windows close by exiting the loop
    close_requested: bool,

    /// Whether a native menu is currently installed
    native_menu_installed: bool,
}

impl WinitWindowManager {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            close_requested: false,
            native_menu_installed: false,
        }
    }

    /// Take a pending close request, if any.
    ///
    /// The application checks this after dispatching pointer input and
    /// exits the event loop when set.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.close_requested)
    }

    /// Whether the native chrome currently hosts the menu.
    pub fn native_menu_installed(&self) -> bool {
        self.native_menu_installed
    }

    fn resize_direction(edges: EdgeSet) -> ResizeDirection {
        match edges {
            EdgeSet::Top => ResizeDirection::North,
            EdgeSet::Bottom => ResizeDirection::South,
            EdgeSet::Left => ResizeDirection::West,
            EdgeSet::Right => ResizeDirection::East,
            EdgeSet::TopLeft => ResizeDirection::NorthWest,
            EdgeSet::TopRight => ResizeDirection::NorthEast,
            EdgeSet::BottomLeft => ResizeDirection::SouthWest,
            EdgeSet::BottomRight => ResizeDirection::SouthEast,
        }
    }

    fn cursor_icon(shape: CursorShape) -> CursorIcon {
        match shape {
            CursorShape::Default => CursorIcon::Default,
            CursorShape::EwResize => CursorIcon::EwResize,
            CursorShape::NsResize => CursorIcon::NsResize,
            CursorShape::NwseResize => CursorIcon::NwseResize,
            CursorShape::NeswResize => CursorIcon::NeswResize,
        }
    }
}

impl WindowManager for WinitWindowManager {
    fn begin_interactive_move(&mut self) -> bool {
        self.window.drag_window().is_ok()
    }

    fn begin_interactive_resize(&mut self, edges: EdgeSet) -> bool {
        self.window
            .drag_resize_window(Self::resize_direction(edges))
            .is_ok()
    }

    fn set_decoration_flags(&mut self, flags: DecorationFlags) {
        self.window.set_decorations(!flags.frameless);

        let mut buttons = WindowButtons::empty();
        if flags.show_min_max_buttons {
            buttons |= WindowButtons::MINIMIZE | WindowButtons::MAXIMIZE;
        }
        if flags.show_close_button {
            buttons |= WindowButtons::CLOSE;
        }
        self.window.set_enabled_buttons(buttons);
    }

    fn set_native_menu(&mut self, menu: Option<&MenuStructure>) {
        // Winit has no native menu bar API; tracking the install state
        // keeps the ownership protocol observable, and the decoration
        // flags provide the rest of the native chrome.
        self.native_menu_installed = menu.is_some();
        debug!(
            "native menu {}",
            if self.native_menu_installed {
                "installed"
            } else {
                "removed"
            }
        );
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.window.set_cursor(Cursor::Icon(Self::cursor_icon(shape)));
    }

    fn request_minimize(&mut self) {
        self.window.set_minimized(true);
    }

    fn request_maximize(&mut self) {
        self.window.set_maximized(true);
    }

    fn request_restore(&mut self) {
        self.window.set_minimized(false);
        self.window.set_maximized(false);
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn force_represent(&mut self) {
        // Decoration flag changes require an explicit re-show before
        // they take visible effect on most platforms.
        self.window.set_visible(true);
        self.window.request_redraw();
    }

    fn run_state(&self) -> WindowRunState {
        if self.window.is_minimized().unwrap_or(false) {
            WindowRunState::Minimized
        } else if self.window.is_maximized() {
            WindowRunState::Maximized
        } else {
            WindowRunState::Normal
        }
    }
}
