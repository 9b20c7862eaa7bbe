use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{
    DomainName, ExpiredDomain, ExpiredDomains, ExtendInfo, ExtendOptions, OrderId, Params,
};

use super::wire::{
    flag, float, int, optional_text, parse_timestamp, parse_utc_offset, text, timestamp,
};
use super::{DecodeError, Response, XmlElement, domain_params};

pub const GET_DOMAIN_EXP_COMMAND: &str = "GetDomainExp";
pub const GET_EXPIRED_DOMAINS_COMMAND: &str = "GetExpiredDomains";
pub const EXTEND_COMMAND: &str = "Extend";
pub const GET_EXTEND_INFO_COMMAND: &str = "GetExtendInfo";
pub const UPDATE_EXPIRED_DOMAINS_COMMAND: &str = "UpdateExpiredDomains";

const RRP_OK: &str = "200";

/// `ExpirationDate` is local to the registrar; `TimeDifference` holds its UTC
/// offset. A missing offset is read as UTC.
pub fn decode_domain_exp_response(response: &Response) -> Result<DateTime<Utc>, DecodeError> {
    let root = response.root();
    let raw = root.find_text("ExpirationDate").ok_or(DecodeError::MissingField {
        field: "ExpirationDate",
    })?;
    let invalid = |field: &'static str, value: &str| DecodeError::InvalidDate {
        field,
        value: value.to_owned(),
    };

    let local = parse_timestamp(raw).ok_or_else(|| invalid("ExpirationDate", raw))?;
    let offset = match root.find_text("TimeDifference") {
        Some(value) => parse_utc_offset(value).ok_or_else(|| invalid("TimeDifference", value))?,
        None => FixedOffset::east_opt(0).ok_or_else(|| invalid("TimeDifference", "+0"))?,
    };
    local
        .and_local_timezone(offset)
        .single()
        .map(|expires| expires.with_timezone(&Utc))
        .ok_or_else(|| invalid("ExpirationDate", raw))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExpiryGroup {
    Expired,
    ExtendedRedemption,
    Redemption,
}

impl ExpiryGroup {
    /// `Extended RGP` must be tested before the plain `RGP` suffix.
    fn classify(status: &str) -> Option<Self> {
        let status = status.to_ascii_lowercase();
        if status.contains("expired") {
            Some(Self::Expired)
        } else if status.contains("extended rgp") {
            Some(Self::ExtendedRedemption)
        } else if status.contains("rgp") {
            Some(Self::Redemption)
        } else {
            None
        }
    }
}

pub fn decode_expired_domains_response(
    response: &Response,
) -> Result<ExpiredDomains, DecodeError> {
    let mut domains = ExpiredDomains::default();
    for detail in response.root().find_all("DomainDetail") {
        let Some(group) = ExpiryGroup::classify(&text(detail, "status")) else {
            continue;
        };
        let entry = decode_expired_domain(detail)?;
        match group {
            ExpiryGroup::Expired => domains.expired.push(entry),
            ExpiryGroup::ExtendedRedemption => domains.extended_redemption.push(entry),
            ExpiryGroup::Redemption => domains.redemption.push(entry),
        }
    }
    Ok(domains)
}

fn decode_expired_domain(detail: &XmlElement) -> Result<ExpiredDomain, DecodeError> {
    Ok(ExpiredDomain {
        name: text(detail, "DomainName"),
        id: text(detail, "DomainNameID"),
        expiration: timestamp(detail, "expiration-date")?,
        locked: text(detail, "lockstatus").eq_ignore_ascii_case("locked"),
    })
}

pub fn encode_extend_form(domain: &DomainName, years: u32, options: &ExtendOptions) -> Params {
    let mut params = options.extra.clone();
    params.extend(domain_params(domain));
    params.insert("NumYears", years);
    params
}

/// The renewal order id, or `None` unless the registry answered RRP 200.
pub fn decode_extend_response(response: &Response) -> Option<OrderId> {
    let root = response.root();
    if root.find_text("RRPCode") != Some(RRP_OK) {
        return None;
    }
    optional_text(root, OrderId::FIELD).and_then(|id| OrderId::new(id).ok())
}

pub fn decode_extend_info_response(response: &Response) -> Result<ExtendInfo, DecodeError> {
    let root = response.root();
    Ok(ExtendInfo {
        expiration: timestamp(root, "Expiration")?,
        max_extension: int(root, "MaxExtension")?,
        min_extension: int(root, "MinAllowed")?,
        registrar_hold: flag(root, "RegistrarHold"),
        balance: float(root, "Balance")?,
        available: float(root, "AvailableBalance")?,
    })
}

/// Reactivation takes the full name in `DomainName` rather than `SLD`/`TLD`.
pub fn encode_update_expired_domains_form(
    domain: &DomainName,
    years: u32,
    options: &ExtendOptions,
) -> Params {
    let mut params = options.extra.clone();
    params.insert("DomainName", domain.to_string());
    params.insert("NumYears", years);
    params
}

pub fn decode_update_expired_domains_response(response: &Response) -> Option<OrderId> {
    let root = response.root();
    let reactivated = root.find("ReactivateDomainName").unwrap_or(root);
    if !flag(reactivated, "Status") {
        return None;
    }
    optional_text(reactivated, OrderId::FIELD).and_then(|id| OrderId::new(id).ok())
}
