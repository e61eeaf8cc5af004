use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
/// Uniform result envelope returned by every terminal operation.
///
/// HTTP-level failures (4xx/5xx) are not errors: the envelope carries the
/// status code unmodified and the caller inspects it.
pub struct ApiResult {
    /// Parsed JSON body, or the raw body when parsing yields nothing useful.
    pub response: ResponseBody,
    /// HTTP status code exactly as reported by the transport.
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body parsed as JSON with a non-falsy value.
    Json(serde_json::Value),
    /// Raw body text, kept when the body is not JSON or parses to a falsy
    /// value (null, `false`, `0`, `""`, `"0"`, `[]`).
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Typed view of the gateway's standard `{"success": …, "result": …}` body.
///
/// Every SMSGateway.me endpoint wraps its payload in this shape; `result`
/// stays a [`serde_json::Value`] because its layout differs per endpoint.
pub struct GatewayResponse {
    pub success: bool,
    #[serde(default)]
    pub result: serde_json::Value,
}

impl ApiResult {
    /// Whether the HTTP status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Decode the JSON body as the gateway's `{success, result}` envelope.
    ///
    /// Returns `None` when the body is raw text or does not match that shape.
    pub fn gateway(&self) -> Option<GatewayResponse> {
        match &self.response {
            ResponseBody::Json(value) => serde_json::from_value(value.clone()).ok(),
            ResponseBody::Raw(_) => None,
        }
    }

    /// The parsed JSON body, if any.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match &self.response {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }

    /// The raw body text, if parsing was not useful.
    pub fn raw(&self) -> Option<&str> {
        match &self.response {
            ResponseBody::Json(_) => None,
            ResponseBody::Raw(body) => Some(body),
        }
    }
}
