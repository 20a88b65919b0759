//! Frame-mode transition and chrome synchronization
//!
//! `WindowChromeController` owns the chrome bar, the resize handles,
//! and the menu ownership manager, and is the only writer of the frame
//! mode. `set_frame_mode` runs a strictly ordered protocol so no frame
//! is ever visible with a missing menu or duplicated controls:
//!
//! 1. same mode: return immediately
//! 2. store the new mode
//! 3. migrate the menu to its new host
//! 4. apply decoration flags as a fixed set
//! 5. update bar visibility, re-sync the maximize icon when leaving
//!    the native frame
//! 6. update resize-handle visibility
//! 7. force the window to re-present
//! 8. re-apply the active theme
//!
//! The menu moves before the flags flip; moving it afterwards leaves a
//! frame where neither host shows it.

use crate::chrome::bar::{BarRequest, ChromeBar, ItemActivation};
use crate::chrome::menu::{MenuCommand, MenuOwnershipManager, MenuStructure};
use crate::chrome::resize::ResizeEdgeController;
use crate::chrome::{ChromeMetrics, FrameMode, WindowRunState};
use crate::platform::{DecorationFlags, WindowManager};
use crate::theme::ThemeService;
use log::{debug, info, warn};
use std::time::Instant;

/// Handler invoked for Help -> About.
pub type AboutHandler = Box<dyn FnMut()>;

/// Top-level orchestrator for the window chrome.
pub struct WindowChromeController {
    mode: FrameMode,
    run_state: WindowRunState,
    metrics: ChromeMetrics,
    bar: ChromeBar,
    edges: ResizeEdgeController,
    menu: MenuOwnershipManager,
    theme: Box<dyn ThemeService>,
    about_handler: Option<AboutHandler>,
    pointer_down: bool,
}

impl WindowChromeController {
    /// Build the chrome in its default state: custom frame, menu hosted
    /// by the chrome bar, all handles visible.
    pub fn new(metrics: ChromeMetrics, theme: Box<dyn ThemeService>) -> Self {
        let mut bar = ChromeBar::new();
        bar.set_menu_attached(true);

        let mut menu = MenuOwnershipManager::new(MenuStructure::standard());
        menu.structure_mut().set_theme_checked(theme.current());

        Self {
            mode: FrameMode::Custom,
            run_state: WindowRunState::Normal,
            metrics,
            bar,
            edges: ResizeEdgeController::new(),
            menu,
            theme,
            about_handler: None,
            pointer_down: false,
        }
    }

    pub fn frame_mode(&self) -> FrameMode {
        self.mode
    }

    pub fn run_state(&self) -> WindowRunState {
        self.run_state
    }

    pub fn metrics(&self) -> &ChromeMetrics {
        &self.metrics
    }

    pub fn bar(&self) -> &ChromeBar {
        &self.bar
    }

    pub fn edges(&self) -> &ResizeEdgeController {
        &self.edges
    }

    pub fn menu(&self) -> &MenuOwnershipManager {
        &self.menu
    }

    pub fn theme(&self) -> &dyn ThemeService {
        self.theme.as_ref()
    }

    /// Register the handler that opens the About dialog.
    pub fn set_about_handler(&mut self, handler: AboutHandler) {
        self.about_handler = Some(handler);
    }

    /// Configure the bar's double-click detection interval.
    pub fn set_double_click_window(&mut self, window: std::time::Duration) {
        self.bar.set_double_click_window(window);
    }

    /// Switch between custom and native chrome.
    pub fn set_frame_mode(&mut self, target: FrameMode, platform: &mut dyn WindowManager) {
        if self.mode == target {
            return;
        }
        info!("switching frame mode to {:?}", target);

        self.mode = target;

        // Menu first, so it is never absent from both hosts
        match target {
            FrameMode::Native => self.menu.attach_to_native(&mut self.bar, platform),
            FrameMode::Custom => self.menu.attach_to_chrome_bar(&mut self.bar, platform),
        }

        platform.set_decoration_flags(DecorationFlags::for_mode(target));

        self.bar.set_use_system_frame(target == FrameMode::Native);
        if target == FrameMode::Custom {
            // The platform may have changed state while the chrome was
            // hidden; re-sync the maximize icon from live state.
            self.run_state = platform.run_state();
            self.bar
                .set_maximized(self.run_state == WindowRunState::Maximized);
        }

        self.edges.sync_visibility(self.mode, self.run_state);

        platform.force_represent();

        // Flag changes can reset window-level style state
        if let Err(err) = self.theme.reapply_current() {
            warn!("failed to re-apply theme after frame change: {}", err);
        }

        self.menu
            .structure_mut()
            .set_system_frame_checked(target == FrameMode::Native);
    }

    /// Mirror a platform-reported state change into the chrome.
    pub fn on_window_state_changed(&mut self, state: WindowRunState) {
        debug!("window state changed to {:?}", state);
        self.run_state = state;
        self.bar.set_maximized(state == WindowRunState::Maximized);
        self.edges.sync_visibility(self.mode, self.run_state);
    }

    /// Track live window size for hit testing.
    pub fn on_window_resized(&mut self, width: u32, height: u32) {
        self.metrics.width = width;
        self.metrics.height = height;
    }

    /// Route a primary-button press: resize handles first, then the
    /// bar. An open dropdown captures the press wherever it lands.
    pub fn on_pointer_pressed(&mut self, x: f64, y: f64, platform: &mut dyn WindowManager) {
        self.pointer_down = true;

        if self.bar.open_entry().is_none()
            && self.edges.on_pointer_press(x, y, &self.metrics, platform)
        {
            return;
        }

        let request = self
            .bar
            .register_press(x, y, Instant::now(), &self.metrics, self.menu.structure());
        if let Some(request) = request {
            self.dispatch_bar_request(request, platform);
        }
    }

    pub fn on_pointer_moved(&mut self, x: f64, y: f64, platform: &mut dyn WindowManager) {
        self.edges
            .on_pointer_move(x, y, &self.metrics, self.pointer_down, platform);
    }

    pub fn on_pointer_released(&mut self) {
        self.pointer_down = false;
        self.edges.end_gesture();
    }

    pub fn on_focus_lost(&mut self) {
        self.pointer_down = false;
        self.edges.end_gesture();
    }

    fn dispatch_bar_request(&mut self, request: BarRequest, platform: &mut dyn WindowManager) {
        match request {
            BarRequest::Minimize => platform.request_minimize(),
            BarRequest::ToggleMaximize => self.toggle_maximize(platform),
            BarRequest::Close => platform.request_close(),
            BarRequest::BeginMove => {
                // Declined moves are a silent no-op
                let _ = platform.begin_interactive_move();
            }
            BarRequest::OpenMenu(index) => {
                debug!("menu entry {} opened", index);
            }
            BarRequest::Activate(activation) => match activation {
                ItemActivation::SystemFrameToggle => self.activate_system_frame_toggle(platform),
                ItemActivation::Theme(name) => self.activate_theme(&name, platform),
                ItemActivation::About => self.activate_about(platform),
            },
        }
    }

    /// Request maximize or restore depending on mirrored state. The
    /// mirror itself only updates when the platform reports back.
    pub fn toggle_maximize(&mut self, platform: &mut dyn WindowManager) {
        if self.run_state == WindowRunState::Maximized {
            platform.request_restore();
        } else {
            platform.request_maximize();
        }
    }

    /// Activate the Settings toggle, as if clicked in the menu.
    pub fn activate_system_frame_toggle(&mut self, platform: &mut dyn WindowManager) {
        let command = self.menu.structure_mut().toggle_system_frame();
        self.handle_menu_command(command, platform);
    }

    /// Activate a Settings -> Theme radio item.
    pub fn activate_theme(&mut self, name: &str, platform: &mut dyn WindowManager) {
        let command = self.menu.structure_mut().select_theme(name);
        self.handle_menu_command(command, platform);
    }

    /// Activate Help -> About.
    pub fn activate_about(&mut self, platform: &mut dyn WindowManager) {
        self.handle_menu_command(MenuCommand::ShowAbout, platform);
    }

    /// Execute a menu command.
    pub fn handle_menu_command(&mut self, command: MenuCommand, platform: &mut dyn WindowManager) {
        match command {
            MenuCommand::UseSystemFrame(native) => {
                let target = if native {
                    FrameMode::Native
                } else {
                    FrameMode::Custom
                };
                self.set_frame_mode(target, platform);
            }
            MenuCommand::SelectTheme(name) => {
                if let Err(err) = self.theme.set_current(&name) {
                    warn!("failed to apply theme '{}': {}", name, err);
                    return;
                }
                self.menu.structure_mut().set_theme_checked(&name);
            }
            MenuCommand::ShowAbout => {
                // Modal: blocks until dismissed
                if let Some(handler) = self.about_handler.as_mut() {
                    handler();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::menu::MenuHost;
    use crate::platform::mock::{PlatformCall, RecordingWindowManager};
    use crate::utils::error::Result;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingTheme {
        name: String,
        reapplies: Rc<Cell<usize>>,
    }

    impl CountingTheme {
        fn new() -> (Self, Rc<Cell<usize>>) {
            let count = Rc::new(Cell::new(0));
            (
                Self {
                    name: "light".to_string(),
                    reapplies: count.clone(),
                },
                count,
            )
        }
    }

    impl ThemeService for CountingTheme {
        fn current(&self) -> &str {
            &self.name
        }

        fn set_current(&mut self, name: &str) -> Result<()> {
            self.name = name.to_string();
            Ok(())
        }

        fn reapply_current(&mut self) -> Result<()> {
            self.reapplies.set(self.reapplies.get() + 1);
            Ok(())
        }
    }

    fn controller() -> (WindowChromeController, Rc<Cell<usize>>) {
        let (theme, count) = CountingTheme::new();
        (
            WindowChromeController::new(ChromeMetrics::default(), Box::new(theme)),
            count,
        )
    }

    #[test]
    fn test_initial_state() {
        let (controller, _) = controller();
        assert_eq!(controller.frame_mode(), FrameMode::Custom);
        assert_eq!(controller.run_state(), WindowRunState::Normal);
        assert_eq!(controller.menu().host(), MenuHost::ChromeBar);
        assert!(controller.bar().menu_attached());
        assert!(controller.edges().visible());
    }

    #[test]
    fn test_set_frame_mode_is_idempotent() {
        let (mut controller, reapplies) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.set_frame_mode(FrameMode::Native, &mut platform);
        let calls_after_first = platform.calls.len();
        let reapplies_after_first = reapplies.get();

        controller.set_frame_mode(FrameMode::Native, &mut platform);
        assert_eq!(platform.calls.len(), calls_after_first);
        assert_eq!(reapplies.get(), reapplies_after_first);
    }

    #[test]
    fn test_transition_ordering_menu_before_flags() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.set_frame_mode(FrameMode::Native, &mut platform);

        assert_eq!(
            platform.calls,
            [
                PlatformCall::SetNativeMenu(true),
                PlatformCall::SetDecorationFlags(DecorationFlags::for_mode(FrameMode::Native)),
                PlatformCall::ForceRepresent,
            ]
        );
    }

    #[test]
    fn test_scenario_b_switch_to_native() {
        let (mut controller, reapplies) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.set_frame_mode(FrameMode::Native, &mut platform);

        assert_eq!(controller.menu().host(), MenuHost::Native);
        assert!(!controller.bar().menu_attached());
        assert!(!controller.bar().controls_visible());
        assert!(!controller.bar().logo_visible());
        assert!(!controller.edges().visible());
        assert!(controller.menu().structure().system_frame_checked());
        assert_eq!(reapplies.get(), 1);

        let flags = DecorationFlags::for_mode(FrameMode::Native);
        assert!(platform
            .calls
            .contains(&PlatformCall::SetDecorationFlags(flags)));
    }

    #[test]
    fn test_scenario_c_switch_back_to_custom() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.set_frame_mode(FrameMode::Native, &mut platform);
        controller.set_frame_mode(FrameMode::Custom, &mut platform);

        assert_eq!(controller.menu().host(), MenuHost::ChromeBar);
        assert!(controller.bar().menu_attached());
        assert!(controller.bar().controls_visible());
        assert!(controller.edges().visible());
        assert!(!controller.menu().structure().system_frame_checked());

        // Exactly one native install and one removal: no duplicates
        assert_eq!(
            platform.calls_of(|c| matches!(c, PlatformCall::SetNativeMenu(true))),
            1
        );
        assert_eq!(
            platform.calls_of(|c| matches!(c, PlatformCall::SetNativeMenu(false))),
            1
        );
    }

    #[test]
    fn test_leaving_native_resyncs_maximize_icon() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.set_frame_mode(FrameMode::Native, &mut platform);

        // The window was maximized while the custom chrome was hidden
        platform.state = WindowRunState::Maximized;
        controller.set_frame_mode(FrameMode::Custom, &mut platform);

        assert_eq!(controller.run_state(), WindowRunState::Maximized);
        assert!(controller.bar().is_maximized());
        assert_eq!(controller.bar().maximize_icon(), "btn_restore.svg");
        // Custom mode but maximized: handles stay hidden
        assert!(!controller.edges().visible());
    }

    #[test]
    fn test_state_mirror_drives_bar_and_handles() {
        let (mut controller, _) = controller();

        controller.on_window_state_changed(WindowRunState::Maximized);
        assert!(controller.bar().is_maximized());
        assert!(!controller.edges().visible());

        controller.on_window_state_changed(WindowRunState::Normal);
        assert!(!controller.bar().is_maximized());
        assert!(controller.edges().visible());

        controller.on_window_state_changed(WindowRunState::Minimized);
        assert!(!controller.bar().is_maximized());
        assert!(controller.edges().visible());
    }

    #[test]
    fn test_toggle_maximize_requests() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.toggle_maximize(&mut platform);
        assert_eq!(platform.calls, [PlatformCall::Maximize]);

        controller.on_window_state_changed(WindowRunState::Maximized);
        controller.toggle_maximize(&mut platform);
        assert_eq!(
            platform.calls,
            [PlatformCall::Maximize, PlatformCall::Restore]
        );
    }

    #[test]
    fn test_menu_toggle_drives_frame_mode() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.activate_system_frame_toggle(&mut platform);
        assert_eq!(controller.frame_mode(), FrameMode::Native);

        controller.activate_system_frame_toggle(&mut platform);
        assert_eq!(controller.frame_mode(), FrameMode::Custom);
    }

    #[test]
    fn test_theme_command_updates_radio_group() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.activate_theme("dark", &mut platform);
        assert_eq!(controller.theme().current(), "dark");
        assert_eq!(
            controller.menu().structure().selected_theme().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_about_handler_invoked() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();
        let opened = Rc::new(Cell::new(0));
        let opened_in_handler = opened.clone();
        controller.set_about_handler(Box::new(move || {
            opened_in_handler.set(opened_in_handler.get() + 1);
        }));

        controller.activate_about(&mut platform);
        assert_eq!(opened.get(), 1);
    }

    #[test]
    fn test_press_in_chrome_area_begins_move() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        // Middle of the title bar, clear of menu entries and controls
        let x = ChromeMetrics::default().width as f64 / 2.0 + 100.0;
        controller.on_pointer_pressed(x, 16.0, &mut platform);
        assert_eq!(platform.calls, [PlatformCall::BeginMove]);
    }

    // Settings is entry 3: left edge after logo plus the File, Edit
    // and View entry widths.
    fn settings_entry_x() -> f64 {
        8.0 + 24.0 + 8.0 + 3.0 * (16.0 + 8.0 * 4.0) + 2.0
    }

    #[test]
    fn test_pointer_presses_toggle_system_frame() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();
        let x = settings_entry_x();

        // Open Settings, then press its first dropdown row
        controller.on_pointer_pressed(x, 10.0, &mut platform);
        controller.on_pointer_released();
        controller.on_pointer_pressed(x, 44.0, &mut platform);
        controller.on_pointer_released();

        assert_eq!(controller.frame_mode(), FrameMode::Native);
        assert_eq!(controller.menu().host(), MenuHost::Native);
        assert!(platform.calls.contains(&PlatformCall::SetNativeMenu(true)));
    }

    #[test]
    fn test_pointer_presses_select_theme() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();
        let x = settings_entry_x();

        // Row 4 is the Dark theme radio
        controller.on_pointer_pressed(x, 10.0, &mut platform);
        controller.on_pointer_released();
        controller.on_pointer_pressed(x, 32.0 + 4.0 * 24.0 + 12.0, &mut platform);
        controller.on_pointer_released();

        assert_eq!(controller.theme().current(), "dark");
        assert_eq!(
            controller.menu().structure().selected_theme().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_open_dropdown_captures_edge_press() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.on_pointer_pressed(settings_entry_x(), 10.0, &mut platform);
        controller.on_pointer_released();

        // A press in the resize border dismisses the dropdown instead
        // of starting a resize
        controller.on_pointer_pressed(3.0, 300.0, &mut platform);
        assert_eq!(
            platform.calls_of(|c| matches!(c, PlatformCall::BeginResize(_))),
            0
        );
        assert_eq!(controller.bar().open_entry(), None);
    }

    #[test]
    fn test_scenario_d_native_corner_press_is_inert() {
        let (mut controller, _) = controller();
        let mut platform = RecordingWindowManager::new();

        controller.set_frame_mode(FrameMode::Native, &mut platform);
        platform.calls.clear();

        controller.on_pointer_pressed(3.0, 3.0, &mut platform);
        assert_eq!(
            platform.calls_of(|c| matches!(c, PlatformCall::BeginResize(_))),
            0
        );
    }
}
