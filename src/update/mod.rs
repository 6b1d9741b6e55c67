mod form;
mod scan;
mod submit;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to flow-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Scan flow
        Event::Initialize | Event::ScanResponse(_) => scan::handle(event, model),

        // Network selection
        Event::SsidSelected { .. } => form::handle(event, model),

        // Credential submission
        Event::SubmitCredentials { .. } | Event::SetupResponse(_) => submit::handle(event, model),

        // UI actions
        Event::ClearStatus => ui::handle(event, model),
    }
}
