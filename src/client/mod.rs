//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiResult, BulkMessage, ContactId, ContactName, CreateContact, DATA_FIELD, DeviceId, Email,
    MessageId, MessageText, Page, Password, Query, RawPhoneNumber, Recipient, Schedule,
    SendMessage, UnixTimestamp, ValidationError,
};

const DEFAULT_BASE_URL: &str = "https://smsgateway.me/api/v3";

const SEND_ENDPOINT: &str = "messages/send";
const CREATE_CONTACT_ENDPOINT: &str = "contacts/create";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&query).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// SMSGateway.me account credentials, echoed into every request.
pub struct Credentials {
    email: Email,
    password: Password,
}

impl Credentials {
    /// Create validated credentials (both parts must be non-empty).
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            password: Password::new(password)?,
        })
    }

    fn push_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Email::FIELD.to_owned(), self.email.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// HTTP-level failures (non-2xx status codes) are NOT errors: they flow
/// through as a normal [`ApiResult`] carrying the status code. This error
/// preserves:
/// - transport failures (DNS, TLS, timeouts, etc),
/// - caller-input validation failures, raised before any I/O.
pub enum GatewayError {
    /// HTTP client / transport failure.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL could not form a valid endpoint URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// One of the domain constructors or the request builder rejected the input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need a default device id or to customize the base URL,
/// timeout, or user-agent.
pub struct GatewayClientBuilder {
    credentials: Credentials,
    device: Option<DeviceId>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl GatewayClientBuilder {
    /// Create a builder with the default base URL and no device/timeout/user-agent.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            device: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the default device id applied to single-target sends and used for
    /// device-detail inference by [`RequestBuilder::get`].
    pub fn device(mut self, device: DeviceId) -> Self {
        self.device = Some(device);
        self
    }

    /// Override the API base URL (`https://smsgateway.me/api/v3` by default).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        // Catch a malformed base URL at construction time rather than on the
        // first request.
        Url::parse(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            credentials: self.credentials,
            device: self.device,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMSGateway.me client.
///
/// This type holds the account credentials, an optional default device id,
/// and the HTTP transport. Requests are described either directly with the
/// typed intents ([`SendMessage`], [`CreateContact`], [`Query`]) or assembled
/// with the fluent [`RequestBuilder`] returned by [`GatewayClient::request`].
///
/// The client itself is immutable and safe to share; every fluent chain works
/// on its own builder, so overlapping chains never observe each other.
pub struct GatewayClient {
    credentials: Credentials,
    device: Option<DeviceId>,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("credentials", &self.credentials)
            .field("device", &self.device)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GatewayClient {
    /// Create a client with the default base URL and no default device.
    ///
    /// For more customization, use [`GatewayClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            device: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> GatewayClientBuilder {
        GatewayClientBuilder::new(credentials)
    }

    /// Start a fluent request chain.
    pub fn request(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(self)
    }

    /// Send one or more messages through the gateway.
    ///
    /// `POST {base}/messages/send`. For single-target sends the default device
    /// id is attached unless the request carries its own; bulk sends suppress
    /// it since every entry addresses its own device.
    ///
    /// Errors only on transport failure; HTTP-level failures come back as a
    /// normal [`ApiResult`].
    pub async fn send_message(&self, request: SendMessage) -> Result<ApiResult, GatewayError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(crate::transport::encode_send_form(&request, self.device));

        let url = self.endpoint(SEND_ENDPOINT)?;
        let response = self
            .http
            .post_form(url.as_str(), params)
            .await
            .map_err(GatewayError::Transport)?;

        Ok(crate::transport::decode_api_result(
            response.status,
            response.body,
        ))
    }

    /// Store a new contact at the gateway.
    ///
    /// `POST {base}/contacts/create` with form fields
    /// `email, password, name, number`.
    pub async fn create_contact(&self, request: CreateContact) -> Result<ApiResult, GatewayError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(crate::transport::encode_create_contact_form(&request));

        let url = self.endpoint(CREATE_CONTACT_ENDPOINT)?;
        let response = self
            .http
            .post_form(url.as_str(), params)
            .await
            .map_err(GatewayError::Transport)?;

        Ok(crate::transport::decode_api_result(
            response.status,
            response.body,
        ))
    }

    /// Fetch a paged list or a single record.
    ///
    /// `GET {base}/devices|/contacts|/messages` (with `page`) or
    /// `GET {base}/{devices|contacts|messages}/view/{id}` (no `page`);
    /// credentials always travel in the query string.
    pub async fn query(&self, query: Query) -> Result<ApiResult, GatewayError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_params(&mut params);
        params.extend(crate::transport::encode_query_params(&query));

        let url = self.endpoint(&crate::transport::query_path(&query))?;
        let response = self
            .http
            .get(url.as_str(), params)
            .await
            .map_err(GatewayError::Transport)?;

        Ok(crate::transport::decode_api_result(
            response.status,
            response.body,
        ))
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        let base = self.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

#[derive(Debug, Clone)]
enum RecipientInput {
    Number(String),
    Numbers(Vec<String>),
    Contact(ContactId),
    Contacts(Vec<ContactId>),
}

impl RecipientInput {
    fn field(&self) -> &'static str {
        match self {
            Self::Number(_) | Self::Numbers(_) => RawPhoneNumber::FIELD,
            Self::Contact(_) | Self::Contacts(_) => ContactId::FIELD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Devices,
    Contacts,
    Messages,
}

#[derive(Clone)]
/// Fluent request assembly: one chain, one builder, one immutable request.
///
/// Setters are infallible and only record input; everything is validated once
/// by the terminal call ([`send`](Self::send), [`create`](Self::create),
/// [`get`](Self::get)) before any I/O happens. A later target setter replaces
/// an earlier one, so a chain never holds both a number and a contact target.
pub struct RequestBuilder<'a> {
    client: &'a GatewayClient,
    device: Option<DeviceId>,
    recipient: Option<RecipientInput>,
    contact_pair: Option<(String, String)>,
    message: Option<String>,
    message_id: Option<MessageId>,
    page: Option<u32>,
    list: Option<ListKind>,
    bulk: Vec<BulkMessage>,
    send_at: Option<UnixTimestamp>,
    expires_at: Option<UnixTimestamp>,
}

impl<'a> RequestBuilder<'a> {
    fn new(client: &'a GatewayClient) -> Self {
        Self {
            client,
            device: None,
            recipient: None,
            contact_pair: None,
            message: None,
            message_id: None,
            page: None,
            list: None,
            bulk: Vec::new(),
            send_at: None,
            expires_at: None,
        }
    }

    /// Send from (or look up) this device instead of the client default.
    pub fn device(mut self, id: u64) -> Self {
        self.device = Some(DeviceId::new(id));
        self
    }

    /// Address the send to a single phone number.
    pub fn to(mut self, number: impl Into<String>) -> Self {
        self.recipient = Some(RecipientInput::Number(number.into()));
        self
    }

    /// Address the send to several phone numbers.
    ///
    /// A one-element list behaves exactly like [`to`](Self::to) with that element.
    pub fn to_numbers<I>(mut self, numbers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut numbers: Vec<String> = numbers.into_iter().map(Into::into).collect();
        self.recipient = Some(if numbers.len() == 1 {
            RecipientInput::Number(numbers.remove(0))
        } else {
            RecipientInput::Numbers(numbers)
        });
        self
    }

    /// Address the send to a single stored contact.
    pub fn to_contact(mut self, id: u64) -> Self {
        self.recipient = Some(RecipientInput::Contact(ContactId::new(id)));
        self
    }

    /// Address the send to several stored contacts.
    ///
    /// A contact id list addresses a send only; it never satisfies the
    /// detail-lookup inference of [`get`](Self::get).
    pub fn to_contacts(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.recipient = Some(RecipientInput::Contacts(
            ids.into_iter().map(ContactId::new).collect(),
        ));
        self
    }

    /// Record a name/number pair for [`create`](Self::create).
    pub fn contact(mut self, name: impl Into<String>, number: impl Into<String>) -> Self {
        self.contact_pair = Some((name.into(), number.into()));
        self
    }

    /// Set the message text for a single-target send.
    pub fn message(mut self, text: impl Into<String>) -> Self {
        self.message = Some(text.into());
        self
    }

    /// Record a message id for a detail lookup via [`get`](Self::get).
    pub fn message_id(mut self, id: u64) -> Self {
        self.message_id = Some(MessageId::new(id));
        self
    }

    /// Set the page for list queries (default 1).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Make [`get`](Self::get) list registered devices.
    pub fn devices(mut self) -> Self {
        self.list = Some(ListKind::Devices);
        self
    }

    /// Make [`get`](Self::get) list stored contacts.
    pub fn contacts(mut self) -> Self {
        self.list = Some(ListKind::Contacts);
        self
    }

    /// Make [`get`](Self::get) list sent/queued messages.
    pub fn messages(mut self) -> Self {
        self.list = Some(ListKind::Messages);
        self
    }

    /// Queue distinct per-entry messages for a bulk send (`data` payload).
    ///
    /// Mutually exclusive with every single-target setter.
    pub fn bulk_messages(mut self, entries: impl IntoIterator<Item = BulkMessage>) -> Self {
        self.bulk.extend(entries);
        self
    }

    /// Schedule the send for a later unix time.
    pub fn send_at(mut self, timestamp: u64) -> Self {
        self.send_at = Some(UnixTimestamp::new(timestamp));
        self
    }

    /// Abandon delivery after this unix time.
    pub fn expires_at(mut self, timestamp: u64) -> Self {
        self.expires_at = Some(UnixTimestamp::new(timestamp));
        self
    }

    /// Terminal: send the assembled message(s).
    pub async fn send(self) -> Result<ApiResult, GatewayError> {
        let client = self.client;
        let request = self.into_send_request()?;
        client.send_message(request).await
    }

    /// Terminal: create the contact recorded by [`contact`](Self::contact).
    pub async fn create(self) -> Result<ApiResult, GatewayError> {
        let client = self.client;
        let Some((name, number)) = self.contact_pair else {
            return Err(ValidationError::UnknownOperation { terminal: "create" }.into());
        };
        let request = CreateContact::new(ContactName::new(name)?, RawPhoneNumber::new(number)?);
        client.create_contact(request).await
    }

    /// Terminal: fetch a list or a single record.
    ///
    /// A list kind set by [`devices`](Self::devices)/[`contacts`](Self::contacts)/
    /// [`messages`](Self::messages) wins; otherwise a detail lookup is inferred
    /// from whichever scalar id is present, in priority order: device (builder
    /// override or client default), contact, message.
    pub async fn get(self) -> Result<ApiResult, GatewayError> {
        let client = self.client;
        let query = self.into_query()?;
        client.query(query).await
    }

    fn into_send_request(self) -> Result<SendMessage, ValidationError> {
        if !self.bulk.is_empty() {
            if let Some(recipient) = &self.recipient {
                return Err(ValidationError::TargetConflict {
                    field: DATA_FIELD,
                    conflicts_with: recipient.field(),
                });
            }
            if self.message.is_some() {
                return Err(ValidationError::TargetConflict {
                    field: DATA_FIELD,
                    conflicts_with: MessageText::FIELD,
                });
            }
            if self.send_at.is_some() || self.expires_at.is_some() {
                // Bulk entries carry their own schedules.
                return Err(ValidationError::TargetConflict {
                    field: DATA_FIELD,
                    conflicts_with: "send_at",
                });
            }
            return SendMessage::bulk(self.bulk);
        }

        let recipient = match self.recipient {
            Some(RecipientInput::Number(number)) => {
                Recipient::numbers(vec![RawPhoneNumber::new(number)?])?
            }
            Some(RecipientInput::Numbers(numbers)) => Recipient::numbers(
                numbers
                    .into_iter()
                    .map(RawPhoneNumber::new)
                    .collect::<Result<Vec<_>, _>>()?,
            )?,
            Some(RecipientInput::Contact(id)) => Recipient::contacts(vec![id])?,
            Some(RecipientInput::Contacts(ids)) => Recipient::contacts(ids)?,
            None => return Err(ValidationError::MissingRecipient),
        };

        let message = match self.message {
            Some(text) => MessageText::new(text)?,
            None => {
                return Err(ValidationError::Empty {
                    field: MessageText::FIELD,
                });
            }
        };

        Ok(SendMessage::single(
            recipient,
            message,
            self.device,
            Schedule {
                send_at: self.send_at,
                expires_at: self.expires_at,
            },
        ))
    }

    fn into_query(self) -> Result<Query, ValidationError> {
        if let Some(kind) = self.list {
            let page = match self.page {
                Some(page) => Page::new(page)?,
                None => Page::DEFAULT,
            };
            return Ok(match kind {
                ListKind::Devices => Query::Devices { page },
                ListKind::Contacts => Query::Contacts { page },
                ListKind::Messages => Query::Messages { page },
            });
        }

        if let Some(device) = self.device.or(self.client.device) {
            return Ok(Query::Device(device));
        }
        if let Some(RecipientInput::Contact(id)) = self.recipient {
            return Ok(Query::Contact(id));
        }
        if let Some(id) = self.message_id {
            return Ok(Query::Message(id));
        }

        Err(ValidationError::NothingToQuery)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::domain::{MessageText, RawPhoneNumber, ResponseBody};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: Vec<RecordedCall>,
        response_status: u16,
        response_body: String,
    }

    #[derive(Debug, Clone)]
    struct RecordedCall {
        method: &'static str,
        url: String,
        params: Vec<(String, String)>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                })),
            }
        }

        fn call_count(&self) -> usize {
            self.state.lock().unwrap().calls.len()
        }

        fn last_call(&self) -> RecordedCall {
            self.state
                .lock()
                .unwrap()
                .calls
                .last()
                .expect("no request was recorded")
                .clone()
        }

        fn record(
            &self,
            method: &'static str,
            url: &str,
            params: Vec<(String, String)>,
        ) -> HttpResponse {
            let mut state = self.state.lock().unwrap();
            state.calls.push(RecordedCall {
                method,
                url: url.to_owned(),
                params,
            });
            HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            }
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move { Ok(self.record("POST", url, params)) })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
            query: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move { Ok(self.record("GET", url, query)) })
        }
    }

    fn make_client(device: Option<DeviceId>, transport: FakeTransport) -> GatewayClient {
        GatewayClient {
            credentials: Credentials::new("me@example.com", "secret").unwrap(),
            device,
            base_url: "https://example.invalid/api/v3".to_owned(),
            http: Arc::new(transport),
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn assert_no_param(params: &[(String, String)], key: &str) {
        assert!(
            !params.iter().any(|(k, _)| k == key),
            "unexpected param {key}; got: {params:?}"
        );
    }

    fn assert_validation(err: GatewayError, expected: ValidationError) {
        match err {
            GatewayError::Validation(actual) => assert_eq!(actual, expected),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    const OK_BODY: &str = r#"{"success":true,"result":{}}"#;

    #[tokio::test]
    async fn send_single_number_posts_form_with_credentials_first() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(Some(DeviceId::new(5)), transport.clone());

        let result = client
            .request()
            .to("+44771232343")
            .message("Hello World!")
            .send()
            .await
            .unwrap();
        assert_eq!(result.status, 200);
        assert!(result.gateway().is_some_and(|envelope| envelope.success));

        let call = transport.last_call();
        assert_eq!(call.method, "POST");
        assert_eq!(call.url, "https://example.invalid/api/v3/messages/send");
        assert_eq!(
            call.params[..2],
            [
                ("email".to_owned(), "me@example.com".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ]
        );
        assert_param(&call.params, "number", "+44771232343");
        assert_param(&call.params, "message", "Hello World!");
        assert_param(&call.params, "device", "5");
        assert_no_param(&call.params, "contact");
        assert_no_param(&call.params, "data[0][number]");
    }

    #[tokio::test]
    async fn one_element_number_list_is_equivalent_to_scalar() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client
            .request()
            .to_numbers(["+44771232343"])
            .message("hi")
            .send()
            .await
            .unwrap();
        let from_list = transport.last_call();

        client
            .request()
            .to("+44771232343")
            .message("hi")
            .send()
            .await
            .unwrap();
        let from_scalar = transport.last_call();

        assert_eq!(from_list.params, from_scalar.params);
    }

    #[tokio::test]
    async fn multiple_numbers_expand_to_indexed_params() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client
            .request()
            .to_numbers(["+44771232343", "+44771232344"])
            .message("hi")
            .send()
            .await
            .unwrap();

        let call = transport.last_call();
        assert_param(&call.params, "number[0]", "+44771232343");
        assert_param(&call.params, "number[1]", "+44771232344");
    }

    #[tokio::test]
    async fn contact_target_uses_contact_field() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client
            .request()
            .to_contact(4)
            .message("hi")
            .send()
            .await
            .unwrap();

        let call = transport.last_call();
        assert_param(&call.params, "contact", "4");
        assert_no_param(&call.params, "number");
    }

    #[tokio::test]
    async fn bulk_send_builds_data_payload_and_suppresses_device() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(Some(DeviceId::new(5)), transport.clone());

        client
            .request()
            .bulk_messages([
                BulkMessage::to_number(
                    RawPhoneNumber::new("+44771232343").unwrap(),
                    MessageText::new("hi").unwrap(),
                ),
                BulkMessage::to_contact(ContactId::new(2), MessageText::new("hey").unwrap()),
            ])
            .send()
            .await
            .unwrap();

        let call = transport.last_call();
        assert_param(&call.params, "data[0][number]", "+44771232343");
        assert_param(&call.params, "data[0][message]", "hi");
        assert_param(&call.params, "data[1][contact]", "2");
        assert_param(&call.params, "data[1][message]", "hey");
        assert_no_param(&call.params, "device");
    }

    #[tokio::test]
    async fn bulk_conflicts_with_single_target_fields() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client
            .request()
            .to("+44771232343")
            .bulk_messages([BulkMessage::to_contact(
                ContactId::new(2),
                MessageText::new("hey").unwrap(),
            )])
            .send()
            .await
            .unwrap_err();

        assert_validation(
            err,
            ValidationError::TargetConflict {
                field: "data",
                conflicts_with: "number",
            },
        );
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn bulk_conflicts_with_chain_level_schedule() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client
            .request()
            .bulk_messages([BulkMessage::to_contact(
                ContactId::new(2),
                MessageText::new("hey").unwrap(),
            )])
            .send_at(1_700_000_000)
            .send()
            .await
            .unwrap_err();

        assert_validation(
            err,
            ValidationError::TargetConflict {
                field: "data",
                conflicts_with: "send_at",
            },
        );
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_message_fails_before_any_http_call() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client
            .request()
            .to("+44771232343")
            .message("")
            .send()
            .await
            .unwrap_err();

        assert_validation(err, ValidationError::Empty { field: "message" });
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_message_fails_before_any_http_call() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client.request().to("+44771232343").send().await.unwrap_err();

        assert_validation(err, ValidationError::Empty { field: "message" });
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_recipient_is_rejected() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client.request().message("hi").send().await.unwrap_err();

        assert_validation(err, ValidationError::MissingRecipient);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn create_posts_contact_pair() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client
            .request()
            .contact("John Doe", "+44771232343")
            .create()
            .await
            .unwrap();

        let call = transport.last_call();
        assert_eq!(call.method, "POST");
        assert_eq!(call.url, "https://example.invalid/api/v3/contacts/create");
        assert_param(&call.params, "email", "me@example.com");
        assert_param(&call.params, "password", "secret");
        assert_param(&call.params, "name", "John Doe");
        assert_param(&call.params, "number", "+44771232343");
    }

    #[tokio::test]
    async fn create_without_pair_is_unknown_operation() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client.request().create().await.unwrap_err();

        assert_validation(err, ValidationError::UnknownOperation { terminal: "create" });
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn create_with_empty_pair_fields_fails_before_any_http_call() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client
            .request()
            .contact("", "+44771232343")
            .create()
            .await
            .unwrap_err();
        assert_validation(err, ValidationError::Empty { field: "name" });

        let err = client
            .request()
            .contact("John Doe", "  ")
            .create()
            .await
            .unwrap_err();
        assert_validation(err, ValidationError::Empty { field: "number" });

        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn get_devices_list_defaults_to_page_one() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client.request().devices().get().await.unwrap();

        let call = transport.last_call();
        assert_eq!(call.method, "GET");
        assert_eq!(call.url, "https://example.invalid/api/v3/devices");
        assert_param(&call.params, "email", "me@example.com");
        assert_param(&call.params, "password", "secret");
        assert_param(&call.params, "page", "1");
    }

    #[tokio::test]
    async fn get_messages_list_honors_page() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client.request().messages().page(5).get().await.unwrap();

        let call = transport.last_call();
        assert_eq!(call.url, "https://example.invalid/api/v3/messages");
        assert_param(&call.params, "page", "5");
    }

    #[tokio::test]
    async fn page_zero_is_rejected() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client.request().contacts().page(0).get().await.unwrap_err();

        assert_validation(err, ValidationError::PageOutOfRange { actual: 0 });
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn get_message_detail_has_no_page_param() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client.request().message_id(7).get().await.unwrap();

        let call = transport.last_call();
        assert_eq!(call.url, "https://example.invalid/api/v3/messages/view/7");
        assert_param(&call.params, "email", "me@example.com");
        assert_param(&call.params, "password", "secret");
        assert_no_param(&call.params, "page");
    }

    #[tokio::test]
    async fn client_default_device_satisfies_detail_inference() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(Some(DeviceId::new(5)), transport.clone());

        client.request().get().await.unwrap();

        let call = transport.last_call();
        assert_eq!(call.url, "https://example.invalid/api/v3/devices/view/5");
    }

    #[tokio::test]
    async fn builder_device_overrides_client_default_in_inference() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(Some(DeviceId::new(5)), transport.clone());

        client.request().device(9).get().await.unwrap();

        let call = transport.last_call();
        assert_eq!(call.url, "https://example.invalid/api/v3/devices/view/9");
    }

    #[tokio::test]
    async fn scalar_contact_outranks_message_id_in_inference() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client
            .request()
            .to_contact(4)
            .message_id(7)
            .get()
            .await
            .unwrap();

        let call = transport.last_call();
        assert_eq!(call.url, "https://example.invalid/api/v3/contacts/view/4");
    }

    #[tokio::test]
    async fn contact_id_list_never_satisfies_detail_inference() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        let err = client
            .request()
            .to_contacts([1, 2, 3])
            .get()
            .await
            .unwrap_err();

        assert_validation(err, ValidationError::NothingToQuery);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn http_failure_status_flows_through_as_result() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(None, transport.clone());

        let result = client
            .request()
            .to("+44771232343")
            .message("hi")
            .send()
            .await
            .unwrap();

        assert_eq!(result.status, 500);
        assert_eq!(result.raw(), Some("oops"));
    }

    #[tokio::test]
    async fn falsy_json_body_falls_back_to_raw_response() {
        let transport = FakeTransport::new(200, "null");
        let client = make_client(None, transport.clone());

        let result = client.request().devices().get().await.unwrap();

        assert_eq!(result.status, 200);
        assert!(matches!(result.response, ResponseBody::Raw(ref body) if body == "null"));
    }

    #[tokio::test]
    async fn typed_query_entry_matches_fluent_chain() {
        let transport = FakeTransport::new(200, OK_BODY);
        let client = make_client(None, transport.clone());

        client.query(Query::Message(MessageId::new(7))).await.unwrap();
        let typed = transport.last_call();

        client.request().message_id(7).get().await.unwrap();
        let fluent = transport.last_call();

        assert_eq!(typed.url, fluent.url);
        assert_eq!(typed.params, fluent.params);
    }

    #[test]
    fn credentials_constructor_validates_inputs() {
        assert!(Credentials::new("   ", "secret").is_err());
        assert!(Credentials::new("me@example.com", "").is_err());
    }

    #[test]
    fn builder_overrides_are_applied() {
        let credentials = Credentials::new("me@example.com", "secret").unwrap();
        let client = GatewayClient::builder(credentials.clone())
            .base_url("https://example.invalid/api/v3")
            .device(DeviceId::new(9))
            .timeout(Duration::from_secs(5))
            .user_agent("smsgatewayme-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://example.invalid/api/v3");
        assert_eq!(client.device, Some(DeviceId::new(9)));

        let err = GatewayClient::builder(credentials)
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidUrl(_)));
    }
}
