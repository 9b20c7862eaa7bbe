use std::collections::BTreeMap;

use crate::domain::{Balance, DomainCount, Params, PricingOptions, TldInfo, TldPricing};

use super::wire::{flag, float, int, text};
use super::{DecodeError, Response, XmlElement};

pub const GET_DOMAIN_COUNT_COMMAND: &str = "GetDomainCount";
pub const GET_TLD_LIST_COMMAND: &str = "GetTLDList";
pub const GET_TLD_INFO_COMMAND: &str = "TP_GetTLDInfo";
pub const GET_DOMAIN_PRICING_COMMAND: &str = "PE_GetDomainPricing";
pub const GET_BALANCE_COMMAND: &str = "GetBalance";

pub fn decode_domain_count_response(response: &Response) -> Result<DomainCount, DecodeError> {
    let root = response.root();
    Ok(DomainCount {
        registered: int(root, "RegisteredCount")?,
        hosted: int(root, "HostCount")?,
        expiring: int(root, "ExpiringCount")?,
        expired: int(root, "ExpiredDomainsCount")?,
        redemption: int(root, "RGP")?,
        extended_redemption: int(root, "ExtendedRGP")?,
        processing: int(root, "ProcessCount")?,
        watch_list: int(root, "WatchlistCount")?,
    })
}

/// Every `tldlist/tld/tld` value, skipping blanks.
pub fn decode_tld_list_response(response: &Response) -> Vec<String> {
    let Some(list) = response.root().find("tldlist") else {
        return Vec::new();
    };
    list.children_named("tld")
        .filter_map(|entry| entry.child("tld"))
        .map(|tld| tld.text().trim().to_owned())
        .filter(|tld| !tld.is_empty())
        .collect()
}

pub fn decode_tld_info_response(response: &Response) -> BTreeMap<String, TldInfo> {
    let Some(table) = response.root().find("tldtable") else {
        return BTreeMap::new();
    };
    table
        .children_named("tld")
        .map(|entry| (text(entry, "TLD"), decode_tld_info(entry)))
        .filter(|(tld, _)| !tld.is_empty())
        .collect()
}

fn decode_tld_info(entry: &XmlElement) -> TldInfo {
    TldInfo {
        protocol: text(entry, "Protocol"),
        lockable: flag(entry, "AbleToLock"),
        realtime: flag(entry, "RealTime"),
        transferable: flag(entry, "Transferable"),
        auth_info: flag(entry, "HasAuthInfo"),
        transfer_auto: flag(entry, "TransByAutoVeri"),
        transfer_fax: flag(entry, "TransByFax"),
    }
}

pub fn encode_domain_pricing_form(options: PricingOptions) -> Params {
    let mut params = Params::new().with("UseQtyEngine", options.quantities);
    if let Some(years) = options.years.filter(|years| *years > 0) {
        params.insert("Years", years);
    }
    params
}

pub fn decode_domain_pricing_response(response: &Response) -> BTreeMap<String, TldPricing> {
    let Some(prices) = response.root().find("pricestructure") else {
        return BTreeMap::new();
    };
    prices
        .children_named("product")
        .map(|product| {
            (
                text(product, "tld"),
                TldPricing {
                    register: text(product, "registerprice"),
                    renew: text(product, "renewprice"),
                    renew_reseller: text(product, "resellerpricerenew"),
                    transfer: text(product, "transferprice"),
                    transfer_reseller: text(product, "resellerpricetran"),
                },
            )
        })
        .filter(|(tld, _)| !tld.is_empty())
        .collect()
}

pub fn decode_balance_response(response: &Response) -> Result<Balance, DecodeError> {
    let root = response.root();
    Ok(Balance {
        balance: float(root, "Balance")?,
        available: float(root, "AvailableBalance")?,
    })
}
