//! Domain layer: strong types with validation and invariants (no I/O).

mod contact;
mod request;
mod response;
mod search;
mod validation;
mod value;

pub use contact::{Contact, ContactRole, DEFAULT_JOB_TITLE};
pub use request::{
    CHECK_MAX_NAMES, CheckDomains, ExtendOptions, OrderListOptions, PricingOptions,
    PurchaseOptions,
};
pub use response::{
    Availability, Balance, DeleteOutcome, DomainContacts, DomainCount, DomainInfo,
    DomainOwnership, DomainStatus, ExpiredDomain, ExpiredDomains, ExtAttribute,
    ExtAttributeOption, ExtendInfo, InAccount, NameserverStatus, OrderDetail, OrderDetailLine,
    OrderSummary, PurchaseResult, PurchaseStatus, RegistrationStatus, SearchResult, TldInfo,
    TldPricing, TransferOrder, TransferOrderDetail, TransferOrderLine, WhoisInfo,
};
pub use search::{OrderBy, SEARCH_COMMAND, SearchQuery};
pub use validation::ValidationError;
pub use value::{
    AccountId, DomainName, MAX_NAMESERVERS, Nameservers, OrderId, OrderType, ParamValue, Params,
    Password, WIRE_DATE_FORMAT,
};
