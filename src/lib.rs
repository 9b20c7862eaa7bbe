//! Typed Rust client for the eNom reseller HTTP/XML API.
//!
//! The crate is split into a domain layer of validated types, a transport
//! layer that knows the registrar's form fields and XML shapes, and a client
//! layer that sends commands and maps failures.
//!
//! ```rust,no_run
//! use enom::{Credentials, DomainName, EnomClient, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), enom::EnomError> {
//!     let credentials = Credentials::new("reseller", "secret")?;
//!     let client = EnomClient::new(credentials, Environment::Test)?;
//!
//!     let availability = client.check(["example.com", "example.net"]).await?;
//!     println!("{availability:?}");
//!
//!     let domain = DomainName::parse("example.com")?;
//!     let locked = client.get_reg_lock(&domain).await?;
//!     println!("locked: {locked}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DEFAULT_MAX_ATTEMPTS, EnomClient, EnomClientBuilder, EnomError, Environment,
    LIVE_ENDPOINT, TEST_ENDPOINT,
};
pub use domain::{
    AccountId, Availability, Balance, CheckDomains, Contact, ContactRole, DeleteOutcome,
    DomainContacts, DomainCount, DomainInfo, DomainName, DomainOwnership, DomainStatus,
    ExpiredDomain, ExpiredDomains, ExtAttribute, ExtAttributeOption, ExtendInfo, ExtendOptions,
    InAccount, NameserverStatus, Nameservers, OrderBy, OrderDetail, OrderDetailLine, OrderId,
    OrderListOptions, OrderSummary, OrderType, ParamValue, Params, Password, PricingOptions,
    PurchaseOptions, PurchaseResult, PurchaseStatus, RegistrationStatus, SearchQuery,
    SearchResult, TldInfo, TldPricing, TransferOrder, TransferOrderDetail, TransferOrderLine,
    ValidationError, WhoisInfo,
};
pub use transport::{DecodeError, Response, XmlElement};
