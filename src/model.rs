use serde::{Deserialize, Serialize};

use crate::types::{SsidOption, OTHER_SSID_VALUE};

/// Application Model - the complete state of the setup page
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Network selector state
    pub ssid_options: Vec<SsidOption>,
    /// Current value of the network selector
    pub selected_ssid: String,

    // Manual-entry field state (shown and required only while the
    // `Other...` sentinel is selected)
    pub manual_ssid_visible: bool,
    pub manual_ssid_required: bool,

    // UI state
    pub is_loading: bool,
    /// Status line under the form; device messages are shown verbatim
    pub status: String,
}

impl Model {
    /// Whether the manual-entry sentinel is the current selection
    pub fn manual_entry_selected(&self) -> bool {
        self.selected_ssid == OTHER_SSID_VALUE
    }

    /// Resolve the effective SSID for submission: the manual field wins when
    /// the sentinel is selected, otherwise the selector value is used
    /// verbatim.
    pub fn resolve_ssid(&self, manual_ssid: &str) -> String {
        if self.manual_entry_selected() {
            manual_ssid.to_string()
        } else {
            self.selected_ssid.clone()
        }
    }

    /// Replace the selector contents and select the first option.
    ///
    /// This mirrors a programmatic selection on the page: no change event
    /// fires, so the manual-entry flags are left untouched.
    pub fn replace_options(&mut self, options: Vec<SsidOption>) {
        self.selected_ssid = options
            .first()
            .map(|o| o.value.clone())
            .unwrap_or_default();
        self.ssid_options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ssid_options;

    #[test]
    fn resolve_ssid_uses_selector_value_for_known_network() {
        let model = Model {
            selected_ssid: "Home".to_string(),
            ..Default::default()
        };

        assert_eq!(model.resolve_ssid("ignored"), "Home");
    }

    #[test]
    fn resolve_ssid_uses_manual_field_for_sentinel() {
        let model = Model {
            selected_ssid: OTHER_SSID_VALUE.to_string(),
            ..Default::default()
        };

        assert_eq!(model.resolve_ssid("Guest Net"), "Guest Net");
    }

    #[test]
    fn replace_options_selects_first_entry() {
        let mut model = Model::default();

        model.replace_options(ssid_options(&["Home".to_string(), "Office".to_string()]));

        assert_eq!(model.selected_ssid, "Home");
        assert_eq!(model.ssid_options.len(), 3);
    }

    #[test]
    fn replace_options_does_not_toggle_manual_entry_flags() {
        let mut model = Model::default();

        // An empty scan leaves only the sentinel, which becomes selected,
        // but the manual field stays hidden until a real change event.
        model.replace_options(ssid_options(&[]));

        assert_eq!(model.selected_ssid, OTHER_SSID_VALUE);
        assert!(!model.manual_ssid_visible);
        assert!(!model.manual_ssid_required);
    }
}
