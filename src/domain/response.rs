use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::contact::{Contact, ContactRole};
use crate::domain::value::OrderId;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of an availability check: a plain flag for one name, a map keyed
/// by domain name for several.
pub enum Availability {
    Single(bool),
    Many(BTreeMap<String, bool>),
}

impl Availability {
    /// Availability of `name`, for either shape.
    pub fn is_available(&self, name: &str) -> Option<bool> {
        match self {
            Self::Single(available) => Some(*available),
            Self::Many(map) => map.get(&name.to_ascii_lowercase()).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub domain_name_id: Option<String>,
    pub sld: String,
    pub tld: String,
    pub expiration: Option<NaiveDate>,
    pub ns_status: Option<String>,
    pub auto_renew: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseStatus {
    /// Registered in real time.
    Registered,
    /// Queued for a TLD that does not register in real time.
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseResult {
    pub result: PurchaseStatus,
    pub order_id: OrderId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Refused {
        string: Option<String>,
        source: Option<String>,
        section: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtAttribute {
    pub id: String,
    pub name: String,
    pub title: String,
    /// Required for the registrant contact.
    pub application: bool,
    pub user_defined: bool,
    pub required: bool,
    pub description: String,
    pub is_child: bool,
    pub options: Vec<ExtAttributeOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtAttributeOption {
    pub id: String,
    pub value: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisInfo {
    pub contacts: BTreeMap<ContactRole, Contact>,
    pub updated: Option<NaiveDateTime>,
    pub created: Option<NaiveDateTime>,
    pub expires: Option<NaiveDateTime>,
    /// Lower-cased nameserver host names.
    pub nameservers: Vec<String>,
    /// Registrar lock status as reported by the WHOIS record.
    pub lock_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainContacts {
    pub registrant: Option<Contact>,
    pub aux_billing: Option<Contact>,
    pub admin: Option<Contact>,
    pub tech: Option<Contact>,
    pub billing: Option<Contact>,
}

impl DomainContacts {
    pub fn get(&self, role: ContactRole) -> Option<&Contact> {
        match role {
            ContactRole::Registrant => self.registrant.as_ref(),
            ContactRole::AuxBilling => self.aux_billing.as_ref(),
            ContactRole::Admin => self.admin.as_ref(),
            ContactRole::Tech => self.tech.as_ref(),
            ContactRole::Billing => self.billing.as_ref(),
        }
    }

    pub(crate) fn set(&mut self, role: ContactRole, contact: Contact) {
        let slot = match role {
            ContactRole::Registrant => &mut self.registrant,
            ContactRole::AuxBilling => &mut self.aux_billing,
            ContactRole::Admin => &mut self.admin,
            ContactRole::Tech => &mut self.tech,
            ContactRole::Billing => &mut self.billing,
        };
        *slot = Some(contact);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiredDomain {
    pub name: String,
    pub id: String,
    pub expiration: Option<NaiveDateTime>,
    pub locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiredDomains {
    pub expired: Vec<ExpiredDomain>,
    /// Domains in the redemption grace period.
    pub redemption: Vec<ExpiredDomain>,
    /// Domains in the extended redemption grace period.
    pub extended_redemption: Vec<ExpiredDomain>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtendInfo {
    pub expiration: Option<NaiveDateTime>,
    pub max_extension: i64,
    pub min_extension: i64,
    pub registrar_hold: bool,
    pub balance: f64,
    pub available: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferOrder {
    pub id: i64,
    pub order_date: Option<NaiveDateTime>,
    pub order_type_id: i64,
    pub order_type: String,
    pub status_id: i64,
    pub status: String,
    pub auth_amount: f64,
    pub version: i64,
    pub details: Vec<TransferOrderLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferOrderLine {
    pub detail_id: i64,
    pub sld: String,
    pub tld: String,
    pub status_id: i64,
    pub status: String,
    pub price: f64,
    pub use_contacts: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferOrderDetail {
    pub detail_id: i64,
    pub sld: String,
    pub tld: String,
    pub lock: bool,
    pub renew: bool,
    pub status_id: i64,
    pub status: String,
    pub price: f64,
    pub use_contacts: bool,
    pub contacts: DomainContacts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverStatus {
    pub name: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    pub expires: Option<NaiveDateTime>,
    pub status: String,
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Where the registrar's database places a domain (`InAccount`).
pub enum InAccount {
    /// Not in the registrar database.
    Unknown,
    /// In the database and in this account.
    ThisAccount,
    /// In the database under another account.
    OtherAccount,
}

impl InAccount {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::ThisAccount),
            2 => Some(Self::OtherAccount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStatus {
    pub order_id: Option<OrderId>,
    pub in_account: Option<InAccount>,
    pub description: String,
    pub expires: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationStatus {
    pub hold: bool,
    /// One of `Processing`, `Registered`, `Hosted` or `Null`.
    pub registration: String,
    /// One of `Processing`, `Paid` or `Null`.
    pub purchase: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOwnership {
    pub known: bool,
    pub in_account: bool,
    pub last_order_id: Option<OrderId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetail {
    pub result: bool,
    pub amount: Option<String>,
    pub status: Option<String>,
    pub details: Vec<OrderDetailLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailLine {
    pub product_type: String,
    pub description: String,
    pub status: String,
    pub quantity: i64,
    pub amount: Option<String>,
    pub order_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub id: OrderId,
    pub date: Option<NaiveDateTime>,
    pub status: String,
    pub processed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainCount {
    pub registered: i64,
    pub hosted: i64,
    pub expiring: i64,
    pub expired: i64,
    pub redemption: i64,
    pub extended_redemption: i64,
    pub processing: i64,
    pub watch_list: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldInfo {
    pub protocol: String,
    pub lockable: bool,
    pub realtime: bool,
    pub transferable: bool,
    pub auth_info: bool,
    pub transfer_auto: bool,
    pub transfer_fax: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Prices as reported, kept as text to avoid float formatting drift.
pub struct TldPricing {
    pub register: String,
    pub renew: String,
    pub renew_reseller: String,
    pub transfer: String,
    pub transfer_reseller: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub balance: f64,
    /// Amount available for immediate purchases.
    pub available: f64,
}
