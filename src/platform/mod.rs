//! Platform window-manager seam for Kafka Viewer
//!
//! The chrome components never talk to winit directly; they go through
//! the [`WindowManager`] trait so the transition protocol and gesture
//! handling can be tested without a live event loop. The winit-backed
//! implementation lives in [`winit_wm`].

use crate::chrome::menu::MenuStructure;
use crate::chrome::{FrameMode, WindowRunState};

pub mod winit_wm;
pub use winit_wm::WinitWindowManager;

/// One of the eight fixed resize regions around the window perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSet {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl EdgeSet {
    /// All eight edge sets, in layout order (top row, sides, bottom row).
    pub const ALL: [EdgeSet; 8] = [
        EdgeSet::TopLeft,
        EdgeSet::Top,
        EdgeSet::TopRight,
        EdgeSet::Left,
        EdgeSet::Right,
        EdgeSet::BottomLeft,
        EdgeSet::Bottom,
        EdgeSet::BottomRight,
    ];

    /// Static edge-set to cursor-shape mapping.
    pub fn cursor_shape(self) -> CursorShape {
        match self {
            EdgeSet::Top | EdgeSet::Bottom => CursorShape::NsResize,
            EdgeSet::Left | EdgeSet::Right => CursorShape::EwResize,
            EdgeSet::TopLeft | EdgeSet::BottomRight => CursorShape::NwseResize,
            EdgeSet::TopRight | EdgeSet::BottomLeft => CursorShape::NeswResize,
        }
    }
}

/// Pointer cursor shapes the chrome can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    EwResize,
    NsResize,
    NwseResize,
    NeswResize,
}

/// Native decoration flags, always applied as a fixed set.
///
/// The frameless flag and the native button flags are never changed
/// independently; partial application yields inconsistent native chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationFlags {
    /// Suppress the native frame entirely
    pub frameless: bool,

    /// Show native minimize/maximize buttons
    pub show_min_max_buttons: bool,

    /// Show the native close button
    pub show_close_button: bool,
}

impl DecorationFlags {
    /// The flag set realizing the given frame mode.
    pub fn for_mode(mode: FrameMode) -> Self {
        match mode {
            FrameMode::Custom => Self {
                frameless: true,
                show_min_max_buttons: false,
                show_close_button: false,
            },
            FrameMode::Native => Self {
                frameless: false,
                show_min_max_buttons: true,
                show_close_button: true,
            },
        }
    }
}

/// Window-manager capabilities consumed by the chrome components.
///
/// Move/resize are fire-and-forget requests; once accepted the platform
/// owns the rest of the gesture. A `false` return means the platform
/// declined and no state was mutated.
pub trait WindowManager {
    /// Begin an interactive window move driven by the platform.
    fn begin_interactive_move(&mut self) -> bool;

    /// Begin an interactive resize along the given edge set.
    fn begin_interactive_resize(&mut self, edges: EdgeSet) -> bool;

    /// Apply native decoration flags.
    fn set_decoration_flags(&mut self, flags: DecorationFlags);

    /// Install or remove the native window menu.
    fn set_native_menu(&mut self, menu: Option<&MenuStructure>);

    /// Update the pointer cursor shape.
    fn set_cursor(&mut self, shape: CursorShape);

    fn request_minimize(&mut self);
    fn request_maximize(&mut self);
    fn request_restore(&mut self);
    fn request_close(&mut self);

    /// Re-show the window; decoration flag changes need this to take
    /// visible effect on most platforms.
    fn force_represent(&mut self);

    /// Current realized window state; the platform is authoritative.
    fn run_state(&self) -> WindowRunState;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Everything a mock window manager records.
    #[derive(Debug, Clone, PartialEq)]
    pub enum PlatformCall {
        BeginMove,
        BeginResize(EdgeSet),
        SetDecorationFlags(DecorationFlags),
        SetNativeMenu(bool),
        SetCursor(CursorShape),
        Minimize,
        Maximize,
        Restore,
        Close,
        ForceRepresent,
    }

    /// Recording window manager for unit tests.
    pub struct RecordingWindowManager {
        pub calls: Vec<PlatformCall>,
        pub state: WindowRunState,
        /// When set, move/resize requests are declined.
        pub decline_gestures: bool,
    }

    impl RecordingWindowManager {
        pub fn new() -> Self {
            Self {
                calls: Vec::new(),
                state: WindowRunState::Normal,
                decline_gestures: false,
            }
        }

        pub fn calls_of<F: Fn(&PlatformCall) -> bool>(&self, pred: F) -> usize {
            self.calls.iter().filter(|c| pred(c)).count()
        }
    }

    impl WindowManager for RecordingWindowManager {
        fn begin_interactive_move(&mut self) -> bool {
            if self.decline_gestures {
                return false;
            }
            self.calls.push(PlatformCall::BeginMove);
            true
        }

        fn begin_interactive_resize(&mut self, edges: EdgeSet) -> bool {
            if self.decline_gestures {
                return false;
            }
            self.calls.push(PlatformCall::BeginResize(edges));
            true
        }

        fn set_decoration_flags(&mut self, flags: DecorationFlags) {
            self.calls.push(PlatformCall::SetDecorationFlags(flags));
        }

        fn set_native_menu(&mut self, menu: Option<&MenuStructure>) {
            self.calls.push(PlatformCall::SetNativeMenu(menu.is_some()));
        }

        fn set_cursor(&mut self, shape: CursorShape) {
            self.calls.push(PlatformCall::SetCursor(shape));
        }

        fn request_minimize(&mut self) {
            self.calls.push(PlatformCall::Minimize);
        }

        fn request_maximize(&mut self) {
            self.calls.push(PlatformCall::Maximize);
        }

        fn request_restore(&mut self) {
            self.calls.push(PlatformCall::Restore);
        }

        fn request_close(&mut self) {
            self.calls.push(PlatformCall::Close);
        }

        fn force_represent(&mut self) {
            self.calls.push(PlatformCall::ForceRepresent);
        }

        fn run_state(&self) -> WindowRunState {
            self.state
        }
    }
}
