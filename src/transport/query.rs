use crate::domain::{Page, Query};

/// Relative endpoint path for a GET lookup, joined onto the API base URL.
pub fn query_path(query: &Query) -> String {
    match query {
        Query::Devices { .. } => "devices".to_owned(),
        Query::Contacts { .. } => "contacts".to_owned(),
        Query::Messages { .. } => "messages".to_owned(),
        Query::Device(id) => format!("devices/view/{}", id.value()),
        Query::Contact(id) => format!("contacts/view/{}", id.value()),
        Query::Message(id) => format!("messages/view/{}", id.value()),
    }
}

/// Encode the query-string parameters for a GET lookup (credentials excluded;
/// the client pushes those first). Only list endpoints are paged.
pub fn encode_query_params(query: &Query) -> Vec<(String, String)> {
    match query {
        Query::Devices { page } | Query::Contacts { page } | Query::Messages { page } => {
            vec![(Page::FIELD.to_owned(), page.value().to_string())]
        }
        Query::Device(_) | Query::Contact(_) | Query::Message(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{ContactId, DeviceId, MessageId};

    use super::*;

    #[test]
    fn list_paths_and_page_params() {
        let query = Query::Devices {
            page: Page::new(5).unwrap(),
        };
        assert_eq!(query_path(&query), "devices");
        assert_eq!(
            encode_query_params(&query),
            vec![("page".to_owned(), "5".to_owned())]
        );

        let query = Query::Contacts { page: Page::DEFAULT };
        assert_eq!(query_path(&query), "contacts");
        assert_eq!(
            encode_query_params(&query),
            vec![("page".to_owned(), "1".to_owned())]
        );

        let query = Query::Messages { page: Page::DEFAULT };
        assert_eq!(query_path(&query), "messages");
    }

    #[test]
    fn view_paths_carry_id_and_no_page() {
        let query = Query::Device(DeviceId::new(5));
        assert_eq!(query_path(&query), "devices/view/5");
        assert!(encode_query_params(&query).is_empty());

        let query = Query::Contact(ContactId::new(4));
        assert_eq!(query_path(&query), "contacts/view/4");

        let query = Query::Message(MessageId::new(7));
        assert_eq!(query_path(&query), "messages/view/7");
        assert!(encode_query_params(&query).is_empty());
    }
}
