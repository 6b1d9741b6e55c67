use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::types::Credentials;
use crate::{build_url, take_text_body, Effect, HttpCmd};

/// In-progress status shown while the request is in flight
const SENDING_STATUS: &str = "Sending...";

/// Fixed status shown when the request never completed
const SUBMIT_FAILED_STATUS: &str = "Failed to send credentials.";

const SETUP_ENDPOINT: &str = "/api/setupWiFi";

/// Handle credential submission and its response.
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::SubmitCredentials {
            manual_ssid,
            password,
        } => {
            // The payload is recomputed from current field values on every
            // submit; nothing is retained afterwards.
            let credentials = Credentials {
                ssid: model.resolve_ssid(&manual_ssid),
                password,
            };
            model.status = SENDING_STATUS.to_string();

            // In-flight submits are not de-duplicated; concurrent responses
            // race and the last one to arrive wins.
            Command::all([
                render(),
                HttpCmd::post(build_url(SETUP_ENDPOINT))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body_string(credentials.to_form_body())
                    .build()
                    .then_send(|result| {
                        Event::SetupResponse(match result {
                            Ok(mut response) => Ok(take_text_body(&mut response)),
                            Err(e) => Err(e.to_string()),
                        })
                    }),
            ])
        }

        Event::SetupResponse(result) => {
            match result {
                // Device-defined message, shown verbatim
                Ok(message) => model.status = message,
                Err(e) => {
                    log::error!("Sending credentials failed: {e}");
                    model.status = SUBMIT_FAILED_STATUS.to_string();
                }
            }
            render()
        }

        _ => unreachable!("Non-submission event passed to submit handler"),
    }
}
