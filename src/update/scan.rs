use crux_core::{render::render, Command};

use crate::events::Event;
use crate::http_get_json;
use crate::model::Model;
use crate::types::{ssid_options, SsidOption};
use crate::Effect;

/// Label of the placeholder option shown when the scan request failed
const SCAN_FAILED_LABEL: &str = "Scan failed";

const SCAN_ENDPOINT: &str = "/api/scan";

/// Handle the scan flow: request the network list on page ready and
/// populate the selector from the response.
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Sent by the shell once per page load; the scan request goes out
        // immediately, not gated on any user action.
        Event::Initialize => {
            model.is_loading = true;
            Command::all([
                render(),
                http_get_json!(SCAN_ENDPOINT, ScanResponse, Vec<String>, "Scan networks"),
            ])
        }

        Event::ScanResponse(result) => {
            model.is_loading = false;
            match result {
                Ok(ssids) => model.replace_options(ssid_options(&ssids)),
                Err(e) => {
                    log::error!("Network scan failed: {e}");
                    model.replace_options(vec![SsidOption::placeholder(SCAN_FAILED_LABEL)]);
                }
            }
            render()
        }

        _ => unreachable!("Non-scan event passed to scan handler"),
    }
}
