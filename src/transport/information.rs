use crate::domain::{
    DomainInfo, DomainName, DomainOwnership, DomainStatus, InAccount, OrderId, OrderType, Params,
    RegistrationStatus,
};

use super::wire::{flag, int, optional_text, text, timestamp};
use super::{DecodeError, Response, domain_params};

pub const GET_DOMAIN_INFO_COMMAND: &str = "GetDomainInfo";
pub const GET_DOMAIN_STATUS_COMMAND: &str = "GetDomainStatus";
pub const GET_REGISTRATION_STATUS_COMMAND: &str = "GetRegistrationStatus";
pub const STATUS_DOMAIN_COMMAND: &str = "StatusDomain";

/// Error text `StatusDomain` returns for a domain held by another account.
pub const NOT_IN_ACCOUNT_MESSAGE: &str = "The domain does not belong to this account";

const DNS_SERVICE: &str = "dnsserver";

pub fn decode_domain_info_response(response: &Response) -> Result<DomainInfo, DecodeError> {
    let root = response.root();
    let info = root.find("GetDomainInfo").unwrap_or(root);

    let nameservers = info
        .child("services")
        .into_iter()
        .flat_map(|services| services.children_named("entry"))
        .filter(|entry| entry.attribute("name") == Some(DNS_SERVICE))
        .filter_map(|entry| entry.child("configuration"))
        .flat_map(|configuration| configuration.children_named("dns"))
        .map(|dns| dns.text().trim().to_owned())
        .collect();

    let status = info.child("status");
    Ok(DomainInfo {
        expires: status
            .map(|status| timestamp(status, "expiration"))
            .transpose()?
            .flatten(),
        status: status
            .map(|status| text(status, "registrationstatus"))
            .unwrap_or_default(),
        nameservers,
    })
}

pub fn encode_domain_status_form(
    domain: &DomainName,
    order: Option<(&OrderId, OrderType)>,
) -> Params {
    let params = domain_params(domain);
    match order {
        Some((order_id, order_type)) => params
            .with(OrderId::FIELD, order_id.as_str())
            .with(OrderType::FIELD, order_type.as_str()),
        None => params,
    }
}

pub fn decode_domain_status_response(response: &Response) -> Result<DomainStatus, DecodeError> {
    let root = response.root();
    Ok(DomainStatus {
        order_id: optional_text(root, OrderId::FIELD).and_then(|id| OrderId::new(id).ok()),
        in_account: InAccount::from_code(int(root, "InAccount")?),
        description: text(root, "StatusDesc"),
        expires: timestamp(root, "ExpDate")?,
    })
}

pub fn decode_registration_status_response(response: &Response) -> RegistrationStatus {
    let root = response.root();
    RegistrationStatus {
        hold: flag(root, "RegistrarHold"),
        registration: text(root, "RegistrationStatus"),
        purchase: text(root, "PurchaseStatus"),
    }
}

pub fn encode_status_domain_form(domain: &DomainName, order_type: OrderType) -> Params {
    domain_params(domain).with(OrderType::FIELD, order_type.as_str())
}

pub fn decode_status_domain_response(response: &Response) -> DomainOwnership {
    let root = response.root();
    let status = root.find("DomainStatus").unwrap_or(root);
    DomainOwnership {
        known: status.find_text("Known") == Some("Known"),
        in_account: flag(status, "InAccount"),
        last_order_id: optional_text(status, OrderId::FIELD).and_then(|id| OrderId::new(id).ok()),
    }
}

/// Ownership reported when `StatusDomain` fails with
/// [`NOT_IN_ACCOUNT_MESSAGE`].
pub fn held_elsewhere() -> DomainOwnership {
    DomainOwnership {
        known: true,
        in_account: false,
        last_order_id: None,
    }
}
