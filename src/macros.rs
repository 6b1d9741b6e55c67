/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates; a render command is
/// only emitted when at least one field actually changed.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.status, String::new())
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.selected_ssid, value;
///     model.manual_ssid_visible, manual
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for HTTP GET requests expecting a JSON response body.
///
/// The result is wrapped into the named response event as
/// `Result<$response_type, String>`; transport errors are stringified, the
/// body is decoded regardless of the HTTP status code.
///
/// # Example
/// ```ignore
/// http_get_json!("/api/scan", ScanResponse, Vec<String>, "Scan networks")
/// ```
#[macro_export]
macro_rules! http_get_json {
    ($endpoint:expr, $response_event:ident, $response_type:ty, $action:expr) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result: Result<$response_type, String> = match result {
                    Ok(mut response) => $crate::decode_json_body($action, &mut response),
                    Err(e) => Err(e.to_string()),
                };
                $crate::events::Event::$response_event(event_result)
            })
    };
}
