//! About dialog
//!
//! Static content, shown modally from Help -> About. The dialog blocks
//! until dismissed; the chrome does not track it further.

/// The About dialog content.
#[derive(Debug, Clone)]
pub struct AboutDialog {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for AboutDialog {
    fn default() -> Self {
        Self {
            title: "About Kafka Viewer".to_string(),
            description: "Kafka Viewer is a modern GUI tool for exploring Kafka clusters,\n\
                          inspecting topics, and debugging payloads faster."
                .to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AboutDialog {
    /// Body text combining description and version.
    pub fn body(&self) -> String {
        format!("{}\n\nVersion {}", self.description, self.version)
    }

    /// Open the dialog modally and block until it is dismissed.
    pub fn exec(&self) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(&self.title)
            .set_description(self.body())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
