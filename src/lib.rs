//! Typed Rust client for the SMSGateway.me v3 HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating requests.
//! A fluent [`RequestBuilder`] assembles one immutable request per chain and
//! validates it once at the terminal call, before any I/O; HTTP-level failures
//! are never errors and come back inside the uniform [`ApiResult`] envelope.
//!
//! ```rust,no_run
//! use smsgatewayme::{Credentials, GatewayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsgatewayme::GatewayError> {
//!     let client = GatewayClient::new(Credentials::new("me@example.com", "secret")?);
//!     let result = client
//!         .request()
//!         .device(5)
//!         .to("+44771232343")
//!         .message("Hello World!")
//!         .send()
//!         .await?;
//!     println!("status: {}", result.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, GatewayClient, GatewayClientBuilder, GatewayError, RequestBuilder};
pub use domain::{
    ApiResult, BulkMessage, BulkSend, BulkTarget, ContactId, ContactName, CreateContact, DeviceId,
    Email, GatewayResponse, MessageId, MessageText, Page, Password, PhoneNumber, Query,
    RawPhoneNumber, Recipient, ResponseBody, Schedule, SendMessage, SingleMessage, UnixTimestamp,
    ValidationError,
};
