//! Client layer: sends commands, retries timeouts and maps transport ↔ domain.

mod operations;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{AccountId, Params, Password, SearchQuery, ValidationError};
use crate::transport::{DecodeError, EnvelopeError, Response, XmlElement, validate};

/// Production reseller endpoint.
pub const LIVE_ENDPOINT: &str = "https://reseller.enom.com/interface.asp";
pub const TEST_ENDPOINT: &str = "https://resellertest.enom.com/interface.asp";

/// Attempts per command when requests time out.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_USER_AGENT: &str = concat!("enom-rs/", env!("CARGO_PKG_VERSION"));

const COMMAND_FIELD: &str = "command";
const RESPONSE_TYPE_FIELD: &str = "responseType";
const RESPONSE_TYPE_XML: &str = "xml";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

#[derive(Debug)]
enum TransportFailure {
    /// The request did not complete within the configured timeout.
    Timeout(BoxError),
    Other(BoxError),
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    fn failure(err: reqwest::Error) -> TransportFailure {
        if err.is_timeout() {
            TransportFailure::Timeout(Box::new(err))
        } else {
            TransportFailure::Other(Box::new(err))
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .form(&params)
                .send()
                .await
                .map_err(Self::failure)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(Self::failure)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reseller account credentials, sent as `uid` / `pw` with every command.
pub struct Credentials {
    uid: AccountId,
    pw: Password,
}

impl Credentials {
    /// Validate both parts: the login id must be non-empty after trimming and
    /// the password must be non-empty.
    pub fn new(uid: impl Into<String>, pw: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            uid: AccountId::new(uid)?,
            pw: Password::new(pw)?,
        })
    }

    pub fn account_id(&self) -> &AccountId {
        &self.uid
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((AccountId::FIELD.to_owned(), self.uid.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.pw.as_str().to_owned()));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which registrar endpoint to talk to.
pub enum Environment {
    #[default]
    Live,
    /// The reseller test bed; orders placed here are not billed.
    Test,
}

impl Environment {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Live => LIVE_ENDPOINT,
            Self::Test => TEST_ENDPOINT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`EnomClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status, timeouts or other transport failures),
/// - registrar-level failures (`ErrCount > 0`, unfinished commands, unexpected
///   registry codes),
/// - validation/parse failures.
pub enum EnomError {
    /// HTTP client / transport failure other than a timeout (DNS, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Every attempt timed out.
    #[error("request timed out after {attempts} attempt(s)")]
    Timeout {
        attempts: u32,
        #[source]
        source: BoxError,
    },

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The registrar reported one or more errors, in `Err1..ErrN` order.
    #[error("registrar error: {}", messages.join("; "))]
    Response { messages: Vec<String> },

    /// The registrar did not report the command as done. The whole response
    /// document is kept for inspection.
    #[error("registrar response incomplete")]
    Incomplete { document: Box<XmlElement> },

    /// The registry answered with an RRP code the operation does not handle.
    #[error("unexpected RRP code {code}: {}", text.as_deref().unwrap_or("no text"))]
    UnexpectedRrpCode { code: String, text: Option<String> },

    /// Response body could not be parsed or a field had the wrong shape.
    #[error("parse error: {0}")]
    Parse(#[from] DecodeError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl EnomError {
    /// Registrar error messages for [`EnomError::Response`]; empty otherwise.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Response { messages } => messages,
            _ => &[],
        }
    }
}

impl From<EnvelopeError> for EnomError {
    fn from(value: EnvelopeError) -> Self {
        match value {
            EnvelopeError::Response { messages } => Self::Response { messages },
            EnvelopeError::Incomplete { document } => Self::Incomplete { document },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`EnomClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent or
/// retry budget.
pub struct EnomClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    max_attempts: u32,
}

impl EnomClientBuilder {
    /// Create a builder for the live endpoint with three attempts per command.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Environment::Live.endpoint().to_owned(),
            timeout: None,
            user_agent: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Point the client at the live or test endpoint.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.endpoint = environment.endpoint().to_owned();
        self
    }

    /// Override the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to each attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Total attempts per command when attempts time out. Must be at least 1.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Build an [`EnomClient`].
    pub fn build(self) -> Result<EnomClient, EnomError> {
        if self.max_attempts == 0 {
            return Err(ValidationError::InvalidAttempts {
                actual: self.max_attempts,
            }
            .into());
        }
        if url::Url::parse(&self.endpoint).is_err() {
            return Err(ValidationError::InvalidEndpoint {
                input: self.endpoint,
            }
            .into());
        }

        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| EnomError::Transport(Box::new(err)))?;

        Ok(EnomClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            max_attempts: self.max_attempts,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level eNom reseller client.
///
/// Every command is one form-encoded POST to the configured endpoint. The
/// XML response is checked for registrar errors and completion before the
/// typed operation decodes it.
pub struct EnomClient {
    credentials: Credentials,
    endpoint: String,
    max_attempts: u32,
    http: Arc<dyn HttpTransport>,
}

impl EnomClient {
    /// Create a client for `environment` with default settings.
    ///
    /// For more customization, use [`EnomClient::builder`].
    pub fn new(credentials: Credentials, environment: Environment) -> Result<Self, EnomError> {
        EnomClientBuilder::new(credentials)
            .environment(environment)
            .build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> EnomClientBuilder {
        EnomClientBuilder::new(credentials)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn account_id(&self) -> &AccountId {
        self.credentials.account_id()
    }

    /// Send any registrar command and return its validated response.
    ///
    /// Caller params named `command`, `responseType`, `uid` or `pw` (in any
    /// case) are dropped in favour of the client's own values.
    pub async fn send_command(&self, name: &str, params: Params) -> Result<Response, EnomError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: COMMAND_FIELD,
            }
            .into());
        }
        self.call(name, params).await
    }

    async fn call(&self, command: &str, params: Params) -> Result<Response, EnomError> {
        let form = self.command_form(command, &params);
        self.execute(command, form).await
    }

    async fn call_search(&self, query: &SearchQuery) -> Result<Response, EnomError> {
        let mut form = strip_reserved(
            query.to_wire_params().to_wire(),
            &[AccountId::FIELD, Password::FIELD],
        );
        self.credentials.push_form_params(&mut form);
        self.execute(crate::domain::SEARCH_COMMAND, form).await
    }

    fn command_form(&self, command: &str, params: &Params) -> Vec<(String, String)> {
        let mut form = strip_reserved(
            params.to_wire(),
            &[
                COMMAND_FIELD,
                RESPONSE_TYPE_FIELD,
                AccountId::FIELD,
                Password::FIELD,
            ],
        );
        form.push((COMMAND_FIELD.to_owned(), command.to_owned()));
        form.push((RESPONSE_TYPE_FIELD.to_owned(), RESPONSE_TYPE_XML.to_owned()));
        self.credentials.push_form_params(&mut form);
        form
    }

    async fn execute(
        &self,
        command: &str,
        form: Vec<(String, String)>,
    ) -> Result<Response, EnomError> {
        let body = self.dispatch(command, form).await?;
        let document = XmlElement::parse(&body)?;
        validate(document).map_err(|err| {
            debug!(command, error = %err, "registrar did not accept command");
            EnomError::from(err)
        })
    }

    /// POST the form, retrying attempts that time out. Other failures and
    /// non-2xx statuses end the call immediately.
    async fn dispatch(
        &self,
        command: &str,
        form: Vec<(String, String)>,
    ) -> Result<String, EnomError> {
        let mut attempt = 1;
        loop {
            debug!(command, attempt, "sending registrar command");
            match self.http.post_form(&self.endpoint, form.clone()).await {
                Ok(response) => return successful_body(response),
                Err(TransportFailure::Timeout(source)) if attempt < self.max_attempts => {
                    warn!(command, attempt, error = %source, "registrar request timed out, retrying");
                    attempt += 1;
                }
                Err(TransportFailure::Timeout(source)) => {
                    return Err(EnomError::Timeout {
                        attempts: attempt,
                        source,
                    });
                }
                Err(TransportFailure::Other(source)) => return Err(EnomError::Transport(source)),
            }
        }
    }
}

fn successful_body(response: HttpResponse) -> Result<String, EnomError> {
    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(EnomError::HttpStatus {
            status: response.status,
            body,
        });
    }
    Ok(response.body)
}

/// Drop every field whose key matches one of `reserved`, ignoring case.
fn strip_reserved(form: Vec<(String, String)>, reserved: &[&str]) -> Vec<(String, String)> {
    form.into_iter()
        .filter(|(key, _)| !reserved.iter().any(|name| key.eq_ignore_ascii_case(name)))
        .collect()
}
