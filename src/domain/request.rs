use crate::domain::validation::ValidationError;
use crate::domain::value::{
    ContactId, ContactName, DeviceId, MessageId, MessageText, Page, RawPhoneNumber, UnixTimestamp,
};

/// Wire field name for bulk message payloads (`data`).
pub const DATA_FIELD: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Addressing for a single-target send: either phone numbers or stored contact ids.
///
/// The two variants are picked explicitly by the caller; there is no runtime
/// discrimination on element types.
pub enum Recipient {
    Numbers(Vec<RawPhoneNumber>),
    Contacts(Vec<ContactId>),
}

impl Recipient {
    /// Address a send by phone numbers. Rejects an empty list.
    pub fn numbers(numbers: Vec<RawPhoneNumber>) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self::Numbers(numbers))
    }

    /// Address a send by stored contact ids. Rejects an empty list.
    pub fn contacts(ids: Vec<ContactId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty {
                field: ContactId::FIELD,
            });
        }
        Ok(Self::Contacts(ids))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Optional delivery scheduling carried alongside a send.
pub struct Schedule {
    /// Unix time at which the gateway should dispatch the message (`send_at`).
    pub send_at: Option<UnixTimestamp>,
    /// Unix time after which delivery is abandoned (`expires_at`).
    pub expires_at: Option<UnixTimestamp>,
}

impl Schedule {
    /// Whether neither timestamp is set.
    pub fn is_empty(&self) -> bool {
        self.send_at.is_none() && self.expires_at.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Target of one bulk entry: exactly one of a number or a contact id.
pub enum BulkTarget {
    Number(RawPhoneNumber),
    Contact(ContactId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of a bulk send (`data[i]`), carrying its own target, text, and
/// optionally its own device and schedule.
pub struct BulkMessage {
    pub target: BulkTarget,
    pub message: MessageText,
    pub device: Option<DeviceId>,
    pub schedule: Schedule,
}

impl BulkMessage {
    /// Entry addressed to a phone number.
    pub fn to_number(number: RawPhoneNumber, message: MessageText) -> Self {
        Self {
            target: BulkTarget::Number(number),
            message,
            device: None,
            schedule: Schedule::default(),
        }
    }

    /// Entry addressed to a stored contact.
    pub fn to_contact(contact: ContactId, message: MessageText) -> Self {
        Self {
            target: BulkTarget::Contact(contact),
            message,
            device: None,
            schedule: Schedule::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessage {
    Single(SingleMessage),
    Bulk(BulkSend),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleMessage {
    recipient: Recipient,
    message: MessageText,
    device: Option<DeviceId>,
    schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSend {
    messages: Vec<BulkMessage>,
}

impl SendMessage {
    /// One message to one or more numbers/contacts.
    pub fn single(
        recipient: Recipient,
        message: MessageText,
        device: Option<DeviceId>,
        schedule: Schedule,
    ) -> Self {
        Self::Single(SingleMessage {
            recipient,
            message,
            device,
            schedule,
        })
    }

    /// Distinct per-entry messages sent in one request (`data` payload).
    ///
    /// The client-level device id does not apply here; each entry carries its own.
    pub fn bulk(messages: Vec<BulkMessage>) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty { field: DATA_FIELD });
        }
        Ok(Self::Bulk(BulkSend { messages }))
    }
}

impl SingleMessage {
    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn device(&self) -> Option<DeviceId> {
        self.device
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

impl BulkSend {
    pub fn messages(&self) -> &[BulkMessage] {
        &self.messages
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A new contact to store at the gateway (`contacts/create`).
pub struct CreateContact {
    name: ContactName,
    number: RawPhoneNumber,
}

impl CreateContact {
    pub fn new(name: ContactName, number: RawPhoneNumber) -> Self {
        Self { name, number }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn number(&self) -> &RawPhoneNumber {
        &self.number
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One of the six GET lookups: a paged list or a single-record view.
pub enum Query {
    Devices { page: Page },
    Contacts { page: Page },
    Messages { page: Page },
    Device(DeviceId),
    Contact(ContactId),
    Message(MessageId),
}

impl Query {
    /// Whether this query addresses a paged list endpoint.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            Self::Devices { .. } | Self::Contacts { .. } | Self::Messages { .. }
        )
    }
}
