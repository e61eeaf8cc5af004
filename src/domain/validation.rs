use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    PageOutOfRange { actual: u32 },
    MissingRecipient,
    TargetConflict { field: &'static str, conflicts_with: &'static str },
    UnknownOperation { terminal: &'static str },
    NothingToQuery,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::PageOutOfRange { actual } => {
                write!(f, "page out of range: {actual} (expected >= 1)")
            }
            Self::MissingRecipient => {
                write!(f, "send requires a recipient: set a number or a contact id")
            }
            Self::TargetConflict {
                field,
                conflicts_with,
            } => write!(f, "{field} conflicts with already-set {conflicts_with}"),
            Self::UnknownOperation { terminal } => {
                write!(f, "{terminal} called without the state it operates on")
            }
            Self::NothingToQuery => {
                write!(f, "get requires a list kind or a device/contact/message id")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
