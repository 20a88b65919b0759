//! Application wiring for Kafka Viewer
//!
//! Owns the winit event loop and routes window events into the chrome
//! controller. Everything runs on the event thread; the controller and
//! its components hold no locks and spawn no work.

use crate::chrome::{ChromeMetrics, FrameMode, WindowChromeController};
use crate::dialogs::AboutDialog;
use crate::platform::{WindowManager, WinitWindowManager};
use crate::theme::ThemeManager;
use crate::utils::config::Config;
use crate::utils::error::{IntoViewerError, Result};
use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// The Kafka Viewer application.
pub struct Application {
    config: Config,
    controller: WindowChromeController,
    window: Option<Arc<Window>>,
    platform: Option<WinitWindowManager>,
    pointer: (f64, f64),
}

impl Application {
    pub fn new(config: Config) -> Result<Self> {
        let theme = ThemeManager::new(&config.theme)?;
        let metrics =
            ChromeMetrics::from_config(&config.chrome, config.window.width, config.window.height);

        let mut controller = WindowChromeController::new(metrics, Box::new(theme));
        controller.set_about_handler(Box::new(|| AboutDialog::default().exec()));

        Ok(Self {
            config,
            controller,
            window: None,
            platform: None,
            pointer: (0.0, 0.0),
        })
    }

    /// Run the event loop until the window closes.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new().window_err("Failed to create event loop")?;
        event_loop
            .run_app(&mut self)
            .window_err("Event loop error")?;
        Ok(())
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.config.window;
        let attributes = Window::default_attributes()
            .with_title(&window_config.title)
            .with_decorations(false) // Chrome starts custom
            .with_resizable(true)
            .with_inner_size(LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .window_err("Failed to create window")?,
        );

        let mut platform = WinitWindowManager::new(window.clone());
        self.controller.set_double_click_window(Duration::from_millis(
            self.config.chrome.double_click_ms,
        ));

        // A configured native-frame start goes through the normal
        // transition protocol so the menu host stays consistent.
        if window_config.use_system_frame {
            self.controller
                .set_frame_mode(FrameMode::Native, &mut platform);
        }

        self.window = Some(window);
        self.platform = Some(platform);
        info!(
            "window created ({}x{})",
            window_config.width, window_config.height
        );
        Ok(())
    }

    /// Persist the frame-mode choice so the next launch starts the same
    /// way. Only writes when the value actually changed.
    fn persist_frame_mode(config: &mut Config, controller: &WindowChromeController) {
        let native = controller.frame_mode() == FrameMode::Native;
        if config.window.use_system_frame != native {
            config.window.use_system_frame = native;
            if let Err(err) = config.save() {
                warn!("failed to save configuration: {}", err);
            }
        }
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            error!("{}", err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(platform) = self.platform.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.controller.on_window_resized(size.width, size.height);
                self.controller.on_window_state_changed(platform.run_state());
            }

            WindowEvent::Occluded(_) => {
                self.controller.on_window_state_changed(platform.run_state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer = (position.x, position.y);
                self.controller
                    .on_pointer_moved(position.x, position.y, platform);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            let (x, y) = self.pointer;
                            self.controller.on_pointer_pressed(x, y, platform);
                            Self::persist_frame_mode(&mut self.config, &self.controller);
                        }
                        ElementState::Released => {
                            self.controller.on_pointer_released();
                        }
                    }
                }
            }

            WindowEvent::Focused(false) => {
                self.controller.on_focus_lost();
            }

            _ => {}
        }

        if platform.take_close_request() {
            event_loop.exit();
        }
    }
}
