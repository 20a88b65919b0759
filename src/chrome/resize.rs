//! Edge resize handling for the frameless window
//!
//! Eight thin hit regions around the window perimeter. A press (or a
//! drag entering a region with the primary button held) asks the
//! platform to begin an interactive resize for that edge set; the
//! platform then owns the gesture. A declined request consumes nothing
//! and mutates nothing.

use crate::chrome::{ChromeMetrics, FrameMode, WindowRunState};
use crate::platform::{CursorShape, EdgeSet, WindowManager};

/// Controller for the eight resize-affordance regions.
pub struct ResizeEdgeController {
    /// All handles share one visibility flag
    visible: bool,

    /// Set after the platform accepts a resize, cleared when the
    /// gesture ends
    resizing: bool,

    /// Edge under the cursor, for cursor-shape feedback
    hovered: Option<EdgeSet>,
}

impl ResizeEdgeController {
    pub fn new() -> Self {
        Self {
            visible: true,
            resizing: false,
            hovered: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    pub fn hovered(&self) -> Option<EdgeSet> {
        self.hovered
    }

    /// Handles are visible iff the chrome is custom and the window is
    /// not maximized.
    pub fn sync_visibility(&mut self, mode: FrameMode, state: WindowRunState) {
        self.visible = mode == FrameMode::Custom && state != WindowRunState::Maximized;
        if !self.visible {
            self.hovered = None;
            self.resizing = false;
        }
    }

    /// Map a point to the edge region containing it, corners first.
    pub fn hit_test(&self, x: f64, y: f64, metrics: &ChromeMetrics) -> Option<EdgeSet> {
        let width = metrics.width as f64;
        let height = metrics.height as f64;
        let border = metrics.resize_border as f64;

        if x < 0.0 || y < 0.0 || x >= width || y >= height {
            return None;
        }

        // Corners take priority over edges
        if x <= border && y <= border {
            return Some(EdgeSet::TopLeft);
        }
        if x >= width - border && y <= border {
            return Some(EdgeSet::TopRight);
        }
        if x <= border && y >= height - border {
            return Some(EdgeSet::BottomLeft);
        }
        if x >= width - border && y >= height - border {
            return Some(EdgeSet::BottomRight);
        }

        if x <= border {
            return Some(EdgeSet::Left);
        }
        if x >= width - border {
            return Some(EdgeSet::Right);
        }
        if y <= border {
            return Some(EdgeSet::Top);
        }
        if y >= height - border {
            return Some(EdgeSet::Bottom);
        }

        None
    }

    /// Handle a primary-button press. Returns true when the event was
    /// consumed (a resize actually started).
    pub fn on_pointer_press(
        &mut self,
        x: f64,
        y: f64,
        metrics: &ChromeMetrics,
        platform: &mut dyn WindowManager,
    ) -> bool {
        if !self.visible {
            return false;
        }
        let Some(edge) = self.hit_test(x, y, metrics) else {
            return false;
        };
        if platform.begin_interactive_resize(edge) {
            self.resizing = true;
            true
        } else {
            // Declined: leave the event for fallback processing
            false
        }
    }

    /// Handle pointer motion: update hover cursor, and start a resize
    /// when the primary button is already held over a region.
    pub fn on_pointer_move(
        &mut self,
        x: f64,
        y: f64,
        metrics: &ChromeMetrics,
        primary_held: bool,
        platform: &mut dyn WindowManager,
    ) {
        if !self.visible || self.resizing {
            return;
        }

        self.hovered = self.hit_test(x, y, metrics);

        if primary_held {
            if let Some(edge) = self.hovered {
                if platform.begin_interactive_resize(edge) {
                    self.resizing = true;
                    return;
                }
            }
        }

        let shape = self
            .hovered
            .map(EdgeSet::cursor_shape)
            .unwrap_or(CursorShape::Default);
        platform.set_cursor(shape);
    }

    /// The platform-driven gesture ended (button release or focus loss).
    pub fn end_gesture(&mut self) {
        self.resizing = false;
    }
}

impl Default for ResizeEdgeController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{PlatformCall, RecordingWindowManager};

    fn metrics() -> ChromeMetrics {
        ChromeMetrics {
            width: 800,
            height: 600,
            ..ChromeMetrics::default()
        }
    }

    fn representative_point(edge: EdgeSet, m: &ChromeMetrics) -> (f64, f64) {
        let w = m.width as f64;
        let h = m.height as f64;
        match edge {
            EdgeSet::TopLeft => (3.0, 3.0),
            EdgeSet::Top => (w / 2.0, 3.0),
            EdgeSet::TopRight => (w - 3.0, 3.0),
            EdgeSet::Left => (3.0, h / 2.0),
            EdgeSet::Right => (w - 3.0, h / 2.0),
            EdgeSet::BottomLeft => (3.0, h - 3.0),
            EdgeSet::Bottom => (w / 2.0, h - 3.0),
            EdgeSet::BottomRight => (w - 3.0, h - 3.0),
        }
    }

    #[test]
    fn test_hit_testing() {
        let controller = ResizeEdgeController::new();
        let m = metrics();

        for edge in EdgeSet::ALL {
            let (x, y) = representative_point(edge, &m);
            assert_eq!(controller.hit_test(x, y, &m), Some(edge), "{edge:?}");
        }

        // Center is not a handle
        assert_eq!(controller.hit_test(400.0, 300.0, &m), None);
    }

    #[test]
    fn test_every_edge_press_reaches_the_platform() {
        let m = metrics();
        for edge in EdgeSet::ALL {
            let mut controller = ResizeEdgeController::new();
            let mut platform = RecordingWindowManager::new();
            let (x, y) = representative_point(edge, &m);

            assert!(controller.on_pointer_press(x, y, &m, &mut platform));
            assert_eq!(platform.calls, [PlatformCall::BeginResize(edge)]);
        }
    }

    #[test]
    fn test_visibility_invariant_over_all_pairs() {
        let mut controller = ResizeEdgeController::new();
        let modes = [FrameMode::Custom, FrameMode::Native];
        let states = [
            WindowRunState::Normal,
            WindowRunState::Maximized,
            WindowRunState::Minimized,
        ];

        for mode in modes {
            for state in states {
                controller.sync_visibility(mode, state);
                let expected =
                    mode == FrameMode::Custom && state != WindowRunState::Maximized;
                assert_eq!(controller.visible(), expected, "{mode:?}/{state:?}");
            }
        }
    }

    #[test]
    fn test_press_starts_resize() {
        let mut controller = ResizeEdgeController::new();
        let mut platform = RecordingWindowManager::new();
        let m = metrics();

        assert!(controller.on_pointer_press(3.0, 3.0, &m, &mut platform));
        assert!(controller.is_resizing());
        assert_eq!(platform.calls, [PlatformCall::BeginResize(EdgeSet::TopLeft)]);

        controller.end_gesture();
        assert!(!controller.is_resizing());
    }

    #[test]
    fn test_declined_resize_leaves_state_unchanged() {
        let mut controller = ResizeEdgeController::new();
        let mut platform = RecordingWindowManager::new();
        platform.decline_gestures = true;
        let m = metrics();

        assert!(!controller.on_pointer_press(3.0, 3.0, &m, &mut platform));
        assert!(!controller.is_resizing());
        assert!(platform.calls.is_empty());
    }

    #[test]
    fn test_hidden_handles_are_inert() {
        let mut controller = ResizeEdgeController::new();
        controller.sync_visibility(FrameMode::Native, WindowRunState::Normal);
        let mut platform = RecordingWindowManager::new();
        let m = metrics();

        assert!(!controller.on_pointer_press(3.0, 3.0, &m, &mut platform));
        assert!(platform.calls.is_empty());
    }

    #[test]
    fn test_drag_with_button_held_starts_resize() {
        let mut controller = ResizeEdgeController::new();
        let mut platform = RecordingWindowManager::new();
        let m = metrics();

        controller.on_pointer_move(797.0, 300.0, &m, true, &mut platform);
        assert!(controller.is_resizing());
        assert_eq!(platform.calls, [PlatformCall::BeginResize(EdgeSet::Right)]);
    }

    #[test]
    fn test_hover_updates_cursor() {
        let mut controller = ResizeEdgeController::new();
        let mut platform = RecordingWindowManager::new();
        let m = metrics();

        controller.on_pointer_move(3.0, 300.0, &m, false, &mut platform);
        assert_eq!(controller.hovered(), Some(EdgeSet::Left));
        assert_eq!(
            platform.calls,
            [PlatformCall::SetCursor(CursorShape::EwResize)]
        );

        controller.on_pointer_move(400.0, 300.0, &m, false, &mut platform);
        assert_eq!(controller.hovered(), None);
        assert_eq!(
            platform.calls.last(),
            Some(&PlatformCall::SetCursor(CursorShape::Default))
        );
    }
}
