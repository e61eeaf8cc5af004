//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    BulkMessage, BulkSend, BulkTarget, CreateContact, DATA_FIELD, Query, Recipient, Schedule,
    SendMessage, SingleMessage,
};
pub use response::{ApiResult, GatewayResponse, ResponseBody};
pub use validation::ValidationError;
pub use value::{
    ContactId, ContactName, DeviceId, Email, MessageId, MessageText, Page, Password, PhoneNumber,
    RawPhoneNumber, UnixTimestamp,
};
