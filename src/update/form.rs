use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::types::OTHER_SSID_VALUE;
use crate::update_field;
use crate::Effect;

/// Handle selector changes: record the selection and derive the
/// manual-entry field state from it. No network activity.
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::SsidSelected { value } => {
            let manual = value == OTHER_SSID_VALUE;
            update_field!(
                model.selected_ssid, value;
                model.manual_ssid_visible, manual;
                model.manual_ssid_required, manual
            )
        }

        _ => unreachable!("Non-selection event passed to form handler"),
    }
}
