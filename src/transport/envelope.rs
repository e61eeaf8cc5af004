use serde_json::Value;

use crate::domain::{ApiResult, ResponseBody};

/// Build the uniform result envelope from a raw HTTP response.
///
/// The body is parsed as JSON; a falsy parse result (or a body that is not
/// JSON at all) falls back to the raw body text. The status code is carried
/// through unmodified and never turned into an error here.
pub fn decode_api_result(status: u16, body: String) -> ApiResult {
    let response = match serde_json::from_str::<Value>(&body) {
        Ok(value) if !is_falsy(&value) => ResponseBody::Json(value),
        _ => ResponseBody::Raw(body),
    };
    ApiResult { response, status }
}

// Falsy per the upstream envelope contract: null, false, 0, "", "0", [].
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty() || text == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}
