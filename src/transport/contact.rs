use crate::domain::{ContactName, CreateContact, RawPhoneNumber};

/// Encode the `contacts/create` form body (credentials excluded; the client
/// pushes those first).
pub fn encode_create_contact_form(request: &CreateContact) -> Vec<(String, String)> {
    vec![
        (
            ContactName::FIELD.to_owned(),
            request.name().as_str().to_owned(),
        ),
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.number().raw().to_owned(),
        ),
    ]
}
