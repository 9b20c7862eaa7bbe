//! Transport layer: XML envelope handling and wire-format details
//! (serialization/deserialization) for each command family.

mod account;
mod availability;
mod contact;
mod contacts;
mod envelope;
mod information;
mod lock;
mod nameservers;
mod orders;
mod registration;
mod renewal;
mod transfers;
mod wire;
mod xml;

pub use account::{
    GET_BALANCE_COMMAND, GET_DOMAIN_COUNT_COMMAND, GET_DOMAIN_PRICING_COMMAND,
    GET_TLD_INFO_COMMAND, GET_TLD_LIST_COMMAND, decode_balance_response,
    decode_domain_count_response, decode_domain_pricing_response, decode_tld_info_response,
    decode_tld_list_response, encode_domain_pricing_form,
};
pub use availability::{
    CHECK_COMMAND, decode_check_response, decode_search_response, encode_check_form,
};
pub use contacts::{
    GET_CONTACTS_COMMAND, GET_WHOIS_CONTACT_COMMAND, decode_contacts_response,
    decode_whois_contact_response,
};
pub use envelope::{EnvelopeError, Response, validate};
pub use information::{
    GET_DOMAIN_INFO_COMMAND, GET_DOMAIN_STATUS_COMMAND, GET_REGISTRATION_STATUS_COMMAND,
    NOT_IN_ACCOUNT_MESSAGE, STATUS_DOMAIN_COMMAND, decode_domain_info_response,
    decode_domain_status_response, decode_registration_status_response,
    decode_status_domain_response, encode_domain_status_form, encode_status_domain_form,
    held_elsewhere,
};
pub use lock::{
    GET_REG_LOCK_COMMAND, SET_REG_LOCK_COMMAND, UNLOCKED_STATUS, decode_reg_lock_response,
    decode_set_reg_lock_response, encode_set_reg_lock_form, is_already_unlocked,
};
pub use nameservers::{
    CHECK_NS_STATUS_COMMAND, DELETE_NAMESERVER_COMMAND, GET_DNS_COMMAND, MODIFY_NS_COMMAND,
    REGISTER_NAMESERVER_COMMAND, UPDATE_NAMESERVER_COMMAND, decode_check_ns_status_response,
    decode_delete_nameserver_response, decode_dns_response, decode_modify_ns_response,
    decode_update_nameserver_response, encode_check_ns_status_form,
    encode_delete_nameserver_form, encode_modify_ns_form, encode_register_nameserver_form,
    encode_update_nameserver_form,
};
pub use orders::{
    GET_ORDER_DETAIL_COMMAND, GET_ORDER_LIST_COMMAND, decode_order_detail_response,
    decode_order_list_response, encode_order_detail_form, encode_order_list_form,
};
pub use registration::{
    DELETE_REGISTRATION_COMMAND, GET_EXT_ATTRIBUTES_COMMAND, PURCHASE_COMMAND, PurchaseReply,
    decode_delete_registration_response, decode_ext_attributes_response,
    decode_purchase_response, encode_delete_registration_form, encode_get_ext_attributes_form,
    encode_purchase_form,
};
pub use renewal::{
    EXTEND_COMMAND, GET_DOMAIN_EXP_COMMAND, GET_EXPIRED_DOMAINS_COMMAND,
    GET_EXTEND_INFO_COMMAND, UPDATE_EXPIRED_DOMAINS_COMMAND, decode_domain_exp_response,
    decode_expired_domains_response, decode_extend_info_response, decode_extend_response,
    decode_update_expired_domains_response, encode_extend_form,
    encode_update_expired_domains_form,
};
pub use transfers::{
    PUSH_DOMAIN_COMMAND, SYNCH_AUTH_INFO_COMMAND, TRANSFER_CREATE_ORDER_COMMAND,
    TRANSFER_GET_ORDER_COMMAND, TRANSFER_GET_ORDER_DETAIL_COMMAND, decode_push_domain_response,
    decode_synch_auth_info_response, decode_transfer_order_detail_response,
    decode_transfer_order_response, decode_transfer_response, encode_push_domain_form,
    encode_synch_auth_info_form, encode_transfer_form, encode_transfer_order_detail_form,
    encode_transfer_order_form,
};
pub use xml::XmlElement;

use crate::domain::{DomainName, Params};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("response is missing field {field}")]
    MissingField { field: &'static str },

    #[error("response field {field} is not a number: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("response field {field} is not a date: {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// `SLD`/`TLD` params for a domain.
pub fn domain_params(domain: &DomainName) -> Params {
    Params::new()
        .with(DomainName::SLD_FIELD, domain.sld())
        .with(DomainName::TLD_FIELD, domain.tld())
}
