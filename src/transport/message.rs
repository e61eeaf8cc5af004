use crate::domain::{
    BulkMessage, BulkTarget, ContactId, DATA_FIELD, DeviceId, MessageText, RawPhoneNumber,
    Recipient, Schedule, SendMessage,
};

/// Encode the `messages/send` form body (credentials excluded; the client
/// pushes those first).
///
/// `default_device` is the client-level device id. It applies to single-target
/// sends without an explicit override and is suppressed entirely in bulk mode,
/// where each entry carries its own device.
pub fn encode_send_form(
    request: &SendMessage,
    default_device: Option<DeviceId>,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    match request {
        SendMessage::Single(single) => {
            push_schedule(&mut params, "", single.schedule());
            push_recipient(&mut params, single.recipient());
            params.push((
                MessageText::FIELD.to_owned(),
                single.message().as_str().to_owned(),
            ));
            if let Some(device) = single.device().or(default_device) {
                params.push((DeviceId::FIELD.to_owned(), device.value().to_string()));
            }
        }
        SendMessage::Bulk(bulk) => {
            for (index, entry) in bulk.messages().iter().enumerate() {
                push_bulk_entry(&mut params, index, entry);
            }
        }
    }

    params
}

fn push_recipient(params: &mut Vec<(String, String)>, recipient: &Recipient) {
    match recipient {
        Recipient::Numbers(numbers) => push_multi(
            params,
            RawPhoneNumber::FIELD,
            numbers.iter().map(|number| number.raw().to_owned()),
        ),
        Recipient::Contacts(ids) => push_multi(
            params,
            ContactId::FIELD,
            ids.iter().map(|id| id.value().to_string()),
        ),
    }
}

// A one-element list is sent as a scalar field, matching the upstream API's
// accepted shape for single recipients.
fn push_multi(
    params: &mut Vec<(String, String)>,
    field: &str,
    values: impl ExactSizeIterator<Item = String>,
) {
    if values.len() == 1 {
        for value in values {
            params.push((field.to_owned(), value));
        }
    } else {
        for (index, value) in values.enumerate() {
            params.push((format!("{field}[{index}]"), value));
        }
    }
}

fn push_bulk_entry(params: &mut Vec<(String, String)>, index: usize, entry: &BulkMessage) {
    let prefix = format!("{DATA_FIELD}[{index}]");
    match &entry.target {
        BulkTarget::Number(number) => {
            params.push((
                format!("{prefix}[{}]", RawPhoneNumber::FIELD),
                number.raw().to_owned(),
            ));
        }
        BulkTarget::Contact(id) => {
            params.push((
                format!("{prefix}[{}]", ContactId::FIELD),
                id.value().to_string(),
            ));
        }
    }
    params.push((
        format!("{prefix}[{}]", MessageText::FIELD),
        entry.message.as_str().to_owned(),
    ));
    if let Some(device) = entry.device {
        params.push((
            format!("{prefix}[{}]", DeviceId::FIELD),
            device.value().to_string(),
        ));
    }
    push_schedule(params, &prefix, &entry.schedule);
}

fn push_schedule(params: &mut Vec<(String, String)>, prefix: &str, schedule: &Schedule) {
    let key = |field: &str| {
        if prefix.is_empty() {
            field.to_owned()
        } else {
            format!("{prefix}[{field}]")
        }
    };
    if let Some(send_at) = schedule.send_at {
        params.push((key("send_at"), send_at.value().to_string()));
    }
    if let Some(expires_at) = schedule.expires_at {
        params.push((key("expires_at"), expires_at.value().to_string()));
    }
}
