//! Messages exchanged with the page over the session socket.

use serde::{Deserialize, Serialize};
use sitegen_ui::PreviewTab;

/// Messages sent from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Submit control pressed
    Submit {
        /// Current contents of the prompt input
        prompt: String,
    },

    /// Preview tab clicked
    SelectTab {
        /// Tab to show
        tab: PreviewTab,
    },
}

/// Messages sent to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session established
    Connected,

    /// Replace the app region
    Render {
        /// Rendered generator page
        html: String,
    },

    /// Show a blocking alert
    Alert {
        /// Text of the alert
        message: String,
    },
}
