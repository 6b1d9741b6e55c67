use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-only events
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::ClearStatus => update_field!(model.status, String::new()),
        _ => unreachable!("Non-UI event passed to UI handler"),
    }
}
