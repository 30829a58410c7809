/// HTMX utils
use axum::http::{HeaderMap, HeaderValue};

pub fn redirect(to: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Hx-Redirect",
        HeaderValue::from_str(to)
            .unwrap_or(HeaderValue::from_str("/").unwrap()),
    );
    headers
}

/// Full client-side page refresh; used where a mutation invalidates more of
/// the page than a fragment swap could patch up (e.g. a new sidebar folder).
pub fn refresh() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Hx-Refresh", HeaderValue::from_static("true"));
    headers
}

/// Append an event to the `Hx-Trigger` response header, which fires
/// client-side listening fragments (see the `from:body` triggers in the
/// components).
pub fn trigger_event(
    mut headers: HeaderMap,
    event_name: &'static str,
) -> HeaderMap {
    if let Some(val) = headers.get("Hx-Trigger") {
        let as_str = val.to_str().expect("existing trigger is ascii");
        let new_header = format!("{as_str}, {event_name}");
        headers.insert(
            "Hx-Trigger",
            HeaderValue::from_str(&new_header)
                .expect("event name is a valid string"),
        );
    } else {
        headers.insert(
            "Hx-Trigger",
            HeaderValue::from_str(event_name)
                .expect("event name is a valid string"),
        );
    }

    headers
}
