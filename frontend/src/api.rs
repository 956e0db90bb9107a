use gloo_net::http::Request;
use log::{info, warn};
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config;
use crate::forms::booking::BookingPayload;
use crate::forms::submission::{SubmitError, SubmitOutcome};
use crate::forms::worker::WorkerApplication;

pub const BOOKINGS_PATH: &str = "/api/bookings";
pub const WORKERS_PATH: &str = "/api/workers";

const DEFAULT_WORKER_SUCCESS: &str = "Application submitted";

#[derive(Default, Debug)]
struct ServerReply {
    message: Option<String>,
    error: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads a response body. `message` and `error` are picked up independently;
/// a key holding anything other than a string is ignored. The flag reports
/// whether the body was JSON at all.
fn parse_reply(body: &str) -> (ServerReply, bool) {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            let reply = ServerReply {
                message: string_field(&value, "message"),
                error: string_field(&value, "error"),
            };
            (reply, true)
        }
        Err(_) => (ServerReply::default(), false),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn failure(status: u16, reply: ServerReply, raw_text: Option<&str>) -> SubmitError {
    let message = non_empty(reply.message)
        .or_else(|| non_empty(reply.error))
        .or_else(|| non_empty(raw_text.map(|text| text.trim().to_string())))
        .unwrap_or_else(|| format!("Request failed ({})", status));
    SubmitError::Server { status, message }
}

pub fn interpret_booking_reply(status: u16, body: &str) -> SubmitOutcome {
    let (reply, _) = parse_reply(body);
    if !is_success(status) {
        return Err(failure(status, reply, None));
    }
    Ok(non_empty(reply.message))
}

/// Like bookings, but a non-JSON error body is shown as-is and success
/// always carries a message.
pub fn interpret_worker_reply(status: u16, body: &str) -> SubmitOutcome {
    let (reply, parsed) = parse_reply(body);
    if !is_success(status) {
        let raw_text = (!parsed).then_some(body);
        return Err(failure(status, reply, raw_text));
    }
    Ok(Some(
        non_empty(reply.message).unwrap_or_else(|| DEFAULT_WORKER_SUCCESS.to_string()),
    ))
}

pub async fn submit_booking(payload: &BookingPayload) -> SubmitOutcome {
    let url = config::api_url(BOOKINGS_PATH);
    let request = Request::post(&url)
        .json(payload)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        warn!("Booking request to {} failed: {}", url, e);
        SubmitError::Transport(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    info!("Booking request answered with status {}", status);
    interpret_booking_reply(status, &body)
}

fn build_form_data(application: &WorkerApplication<File>) -> Result<FormData, SubmitError> {
    let encode = |e: wasm_bindgen::JsValue| SubmitError::Encode(format!("{:?}", e));

    let form = FormData::new().map_err(encode)?;
    for (name, value) in &application.fields {
        form.append_with_str(name, value).map_err(encode)?;
    }
    for (name, file) in &application.documents {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(encode)?;
    }
    Ok(form)
}

pub async fn submit_worker_application(application: &WorkerApplication<File>) -> SubmitOutcome {
    let url = config::api_url(WORKERS_PATH);
    let form = build_form_data(application)?;

    // No explicit Content-Type: the browser adds the multipart boundary.
    let response = Request::post(&url).body(form).send().await.map_err(|e| {
        warn!("Worker application request to {} failed: {}", url, e);
        SubmitError::Transport(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    info!("Worker application answered with status {}", status);
    interpret_worker_reply(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_message(outcome: SubmitOutcome) -> (u16, String) {
        match outcome {
            Err(SubmitError::Server { status, message }) => (status, message),
            other => panic!("expected a server error, got {:?}", other),
        }
    }

    #[test]
    fn booking_success_surfaces_server_message() {
        let outcome = interpret_booking_reply(201, r#"{"message":"Booking received"}"#);
        assert_eq!(outcome, Ok(Some("Booking received".to_string())));
    }

    #[test]
    fn booking_success_without_json_has_no_message() {
        assert_eq!(interpret_booking_reply(200, "OK"), Ok(None));
        assert_eq!(interpret_booking_reply(204, ""), Ok(None));
    }

    #[test]
    fn booking_failure_prefers_message_then_error() {
        let (_, message) = server_message(interpret_booking_reply(
            400,
            r#"{"message":"Date is in the past","error":"bad_request"}"#,
        ));
        assert_eq!(message, "Date is in the past");

        let (_, message) = server_message(interpret_booking_reply(409, r#"{"error":"Slot taken"}"#));
        assert_eq!(message, "Slot taken");
    }

    #[test]
    fn booking_failure_without_body_uses_status() {
        let (status, message) = server_message(interpret_booking_reply(502, "<html>Bad gateway</html>"));
        assert_eq!(status, 502);
        assert_eq!(message, "Request failed (502)");
    }

    #[test]
    fn empty_message_falls_through_to_error() {
        let (_, message) = server_message(interpret_booking_reply(
            422,
            r#"{"message":"","error":"Invalid phone"}"#,
        ));
        assert_eq!(message, "Invalid phone");
    }

    #[test]
    fn worker_failure_falls_back_to_raw_text() {
        let (_, message) = server_message(interpret_worker_reply(413, "Payload too large\n"));
        assert_eq!(message, "Payload too large");
    }

    #[test]
    fn worker_failure_with_json_but_no_fields_uses_status() {
        let (_, message) = server_message(interpret_worker_reply(500, "{}"));
        assert_eq!(message, "Request failed (500)");
        let (_, message) = server_message(interpret_worker_reply(500, ""));
        assert_eq!(message, "Request failed (500)");
    }

    #[test]
    fn worker_success_has_default_message() {
        assert_eq!(
            interpret_worker_reply(200, "not json"),
            Ok(Some("Application submitted".to_string()))
        );
        assert_eq!(
            interpret_worker_reply(201, r#"{"message":"Welcome aboard"}"#),
            Ok(Some("Welcome aboard".to_string()))
        );
    }

    #[test]
    fn structured_error_does_not_hide_the_message() {
        let (_, message) = server_message(interpret_booking_reply(
            400,
            r#"{"message":"Date is in the past","error":{"code":"E_DATE"}}"#,
        ));
        assert_eq!(message, "Date is in the past");

        let (_, message) = server_message(interpret_worker_reply(
            409,
            r#"{"message":"Phone already registered","error":{"field":"phone"}}"#,
        ));
        assert_eq!(message, "Phone already registered");
    }

    #[test]
    fn structured_message_falls_through_to_error() {
        let (_, message) = server_message(interpret_booking_reply(
            422,
            r#"{"message":{"text":"nope"},"error":"Invalid email"}"#,
        ));
        assert_eq!(message, "Invalid email");
    }

    #[test]
    fn non_string_fields_are_ignored() {
        assert_eq!(interpret_booking_reply(200, r#"{"message": 42}"#), Ok(None));
        let (_, message) = server_message(interpret_booking_reply(400, r#"[1,2,3]"#));
        assert_eq!(message, "Request failed (400)");
    }
}
