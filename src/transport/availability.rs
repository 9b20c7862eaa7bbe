use std::collections::BTreeMap;

use crate::domain::{Availability, CheckDomains, Params, SearchResult};

use super::wire::{date, flag, optional_text, text};
use super::{DecodeError, Response, XmlElement, domain_params};

pub const CHECK_COMMAND: &str = "Check";

/// RRP code the registrar uses for "name is available".
const RRP_AVAILABLE: &str = "210";

pub fn encode_check_form(request: &CheckDomains) -> Params {
    match request {
        CheckDomains::One(name) => domain_params(name),
        CheckDomains::Many(names) => Params::new().with(
            CheckDomains::FIELD,
            names
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

pub fn decode_check_response(
    request: &CheckDomains,
    response: &Response,
) -> Result<Availability, DecodeError> {
    let root = response.root();
    match request {
        CheckDomains::One(_) => Ok(Availability::Single(
            root.find_text("RRPCode") == Some(RRP_AVAILABLE),
        )),
        CheckDomains::Many(names) => {
            let results = names
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let position = idx + 1;
                    let key = optional_text(root, &format!("Domain{position}"))
                        .unwrap_or_else(|| name.to_string())
                        .to_ascii_lowercase();
                    let available =
                        root.find_text(&format!("RRPCode{position}")) == Some(RRP_AVAILABLE);
                    (key, available)
                })
                .collect::<BTreeMap<_, _>>();
            Ok(Availability::Many(results))
        }
    }
}

pub fn decode_search_response(response: &Response) -> Result<Vec<SearchResult>, DecodeError> {
    let Some(domains) = response.root().find("Domains") else {
        return Ok(Vec::new());
    };
    domains
        .children_named("Domain")
        .map(decode_search_result)
        .collect()
}

fn decode_search_result(domain: &XmlElement) -> Result<SearchResult, DecodeError> {
    Ok(SearchResult {
        domain_name_id: optional_text(domain, "DomainNameID"),
        sld: text(domain, "SLD"),
        tld: text(domain, "TLD"),
        expiration: date(domain, "ExpDate")?,
        ns_status: optional_text(domain, "NSStatus"),
        auto_renew: flag(domain, "AutoRenew"),
    })
}
