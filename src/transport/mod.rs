//! Transport layer: wire-format details (form/query encoding, envelope decoding).

mod contact;
mod envelope;
mod message;
mod query;

pub use contact::encode_create_contact_form;
pub use envelope::decode_api_result;
pub use message::encode_send_form;
pub use query::{encode_query_params, query_path};
