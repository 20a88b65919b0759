//! Menu structure and ownership management
//!
//! A single menu exists for the lifetime of the window. It is hosted
//! either by the custom chrome bar or by the native chrome, never both
//! and never neither while the window is visible. The ownership manager
//! enforces that exclusivity by sequencing every migration as
//! detach-then-attach.

use crate::chrome::bar::ChromeBar;
use crate::platform::WindowManager;
use log::debug;

/// Commands produced by activating menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// Settings -> "Use system window frame" toggle
    UseSystemFrame(bool),

    /// Settings -> Theme -> <name>
    SelectTheme(String),

    /// Help -> About
    ShowAbout,
}

/// A single item inside a menu entry.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Plain triggerable action
    Action { title: String, command: MenuCommand },

    /// Checkable toggle (the system-frame switch)
    Toggle { title: String, checked: bool },

    /// Exclusive theme choice
    Radio {
        title: String,
        theme: String,
        selected: bool,
    },

    Separator,

    /// Nested menu
    Submenu { title: String, items: Vec<MenuItem> },
}

/// A top-level menu entry (File, Edit, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// The single, process-lifetime menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStructure {
    entries: Vec<MenuEntry>,
}

impl MenuStructure {
    /// The standard Kafka Viewer menu: File, Edit, View, Settings, Help.
    pub fn standard() -> Self {
        let entry = |title: &str, items: Vec<MenuItem>| MenuEntry {
            title: title.to_string(),
            items,
        };

        let settings = vec![
            MenuItem::Toggle {
                title: "Use system window frame".to_string(),
                checked: false,
            },
            MenuItem::Separator,
            MenuItem::Submenu {
                title: "Theme".to_string(),
                items: vec![
                    MenuItem::Radio {
                        title: "Light".to_string(),
                        theme: "light".to_string(),
                        selected: true,
                    },
                    MenuItem::Radio {
                        title: "Dark".to_string(),
                        theme: "dark".to_string(),
                        selected: false,
                    },
                ],
            },
        ];

        let help = vec![MenuItem::Action {
            title: "About".to_string(),
            command: MenuCommand::ShowAbout,
        }];

        Self {
            entries: vec![
                entry("File", Vec::new()),
                entry("Edit", Vec::new()),
                entry("View", Vec::new()),
                entry("Settings", settings),
                entry("Help", help),
            ],
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Flip the system-frame toggle and return the resulting command.
    pub fn toggle_system_frame(&mut self) -> MenuCommand {
        let mut target = true;
        Self::visit_items_mut(&mut self.entries, &mut |item| {
            if let MenuItem::Toggle { checked, .. } = item {
                *checked = !*checked;
                target = *checked;
            }
        });
        MenuCommand::UseSystemFrame(target)
    }

    /// Sync the system-frame check mark with controller state.
    pub fn set_system_frame_checked(&mut self, value: bool) {
        Self::visit_items_mut(&mut self.entries, &mut |item| {
            if let MenuItem::Toggle { checked, .. } = item {
                *checked = value;
            }
        });
    }

    pub fn system_frame_checked(&self) -> bool {
        let mut result = false;
        Self::visit_items(&self.entries, &mut |item| {
            if let MenuItem::Toggle { checked, .. } = item {
                result = *checked;
            }
        });
        result
    }

    /// Select a theme radio item and return the resulting command.
    pub fn select_theme(&mut self, name: &str) -> MenuCommand {
        self.set_theme_checked(name);
        MenuCommand::SelectTheme(name.to_string())
    }

    /// Sync the theme radio group with the active theme.
    pub fn set_theme_checked(&mut self, name: &str) {
        Self::visit_items_mut(&mut self.entries, &mut |item| {
            if let MenuItem::Radio {
                theme, selected, ..
            } = item
            {
                *selected = theme == name;
            }
        });
    }

    pub fn selected_theme(&self) -> Option<String> {
        let mut result = None;
        Self::visit_items(&self.entries, &mut |item| {
            if let MenuItem::Radio {
                theme,
                selected: true,
                ..
            } = item
            {
                result = Some(theme.clone());
            }
        });
        result
    }

    fn visit_items(entries: &[MenuEntry], f: &mut impl FnMut(&MenuItem)) {
        fn walk(items: &[MenuItem], f: &mut impl FnMut(&MenuItem)) {
            for item in items {
                f(item);
                if let MenuItem::Submenu { items, .. } = item {
                    walk(items, f);
                }
            }
        }
        for entry in entries {
            walk(&entry.items, f);
        }
    }

    fn visit_items_mut(entries: &mut [MenuEntry], f: &mut impl FnMut(&mut MenuItem)) {
        fn walk(items: &mut [MenuItem], f: &mut impl FnMut(&mut MenuItem)) {
            for item in items {
                f(item);
                if let MenuItem::Submenu { items, .. } = item {
                    walk(items, f);
                }
            }
        }
        for entry in entries {
            walk(&mut entry.items, f);
        }
    }
}

/// Which chrome currently hosts the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHost {
    ChromeBar,
    Native,
}

/// Owns the menu and migrates it between the two hosts.
///
/// Both attach operations are idempotent; calling the currently-active
/// one is a no-op that touches neither host.
pub struct MenuOwnershipManager {
    menu: MenuStructure,
    host: MenuHost,
}

impl MenuOwnershipManager {
    /// The menu starts attached to the chrome bar; the caller marks the
    /// bar accordingly during construction.
    pub fn new(menu: MenuStructure) -> Self {
        Self {
            menu,
            host: MenuHost::ChromeBar,
        }
    }

    pub fn host(&self) -> MenuHost {
        self.host
    }

    pub fn structure(&self) -> &MenuStructure {
        &self.menu
    }

    pub fn structure_mut(&mut self) -> &mut MenuStructure {
        &mut self.menu
    }

    /// Move the menu into the chrome bar, right after the logo.
    ///
    /// Detach from the native chrome happens first so the menu is
    /// off-screen for at most one layout pass.
    pub fn attach_to_chrome_bar(&mut self, bar: &mut ChromeBar, platform: &mut dyn WindowManager) {
        if self.host == MenuHost::ChromeBar {
            return;
        }
        platform.set_native_menu(None);
        bar.set_menu_attached(true);
        self.host = MenuHost::ChromeBar;
        debug!("menu attached to chrome bar");
    }

    /// Move the menu into the native chrome.
    pub fn attach_to_native(&mut self, bar: &mut ChromeBar, platform: &mut dyn WindowManager) {
        if self.host == MenuHost::Native {
            return;
        }
        bar.set_menu_attached(false);
        platform.set_native_menu(Some(&self.menu));
        self.host = MenuHost::Native;
        debug!("menu attached to native chrome");
    }
}
