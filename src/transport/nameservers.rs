use std::net::Ipv4Addr;

use crate::domain::{DomainName, NameserverStatus, Nameservers, Params};

use super::registration::nameserver_params;
use super::wire::{flag, text};
use super::{Response, domain_params};

pub const CHECK_NS_STATUS_COMMAND: &str = "CheckNSStatus";
pub const DELETE_NAMESERVER_COMMAND: &str = "DeleteNameServer";
pub const GET_DNS_COMMAND: &str = "GetDNS";
pub const REGISTER_NAMESERVER_COMMAND: &str = "RegisterNameServer";
pub const UPDATE_NAMESERVER_COMMAND: &str = "UpdateNameServer";
pub const MODIFY_NS_COMMAND: &str = "ModifyNS";

const RRP_OK: &str = "200";

fn rrp_ok(response: &Response) -> bool {
    response.root().find_text("RRPCode") == Some(RRP_OK)
}

pub fn encode_check_ns_status_form(name: &str) -> Params {
    Params::new().with("CheckNSName", name.trim())
}

/// `None` when the host is not registered with the registrar.
pub fn decode_check_ns_status_response(response: &Response) -> Option<NameserverStatus> {
    if !rrp_ok(response) {
        return None;
    }
    let root = response.root();
    let status = root.find("CheckNsStatus").unwrap_or(root);
    Some(NameserverStatus {
        name: text(status, "name"),
        ip_address: text(status, "ipaddress"),
    })
}

pub fn encode_delete_nameserver_form(name: &str) -> Params {
    Params::new().with("NS", name.trim())
}

pub fn decode_delete_nameserver_response(response: &Response) -> bool {
    rrp_ok(response) && response.root().find_text("NsSuccess") == Some("1")
}

/// The domain's nameservers, or `None` unless the registry answered RRP 200.
pub fn decode_dns_response(response: &Response) -> Option<Vec<String>> {
    if !rrp_ok(response) {
        return None;
    }
    Some(
        response
            .root()
            .find_all("dns")
            .into_iter()
            .map(|dns| dns.text().trim().to_owned())
            .filter(|host| !host.is_empty())
            .collect(),
    )
}

pub fn encode_register_nameserver_form(name: &str, ip: Ipv4Addr) -> Params {
    Params::new()
        .with("Add", "true")
        .with("NSName", name.trim())
        .with("IP", ip.to_string())
}

pub fn encode_update_nameserver_form(name: &str, old_ip: Ipv4Addr, new_ip: Ipv4Addr) -> Params {
    Params::new()
        .with("NS", name.trim())
        .with("OldIP", old_ip.to_string())
        .with("NewIP", new_ip.to_string())
}

pub fn decode_update_nameserver_response(response: &Response) -> bool {
    flag(response.root(), "NSSuccess")
}

pub fn encode_modify_ns_form(domain: &DomainName, nameservers: &Nameservers) -> Params {
    let mut params = domain_params(domain);
    params.extend(nameserver_params(nameservers));
    params
}

pub fn decode_modify_ns_response(response: &Response) -> bool {
    rrp_ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{XmlElement, validate};

    fn ok(body: &str) -> Response {
        validate(
            XmlElement::parse(&format!(
                "<interface-response>{body}<ErrCount>0</ErrCount><Done>true</Done></interface-response>"
            ))
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn check_ns_status_requires_rrp_200() {
        let found = ok("<RRPCode>200</RRPCode>\
             <CheckNsStatus><name>ns1.example.com</name><ipaddress>192.0.2.1</ipaddress></CheckNsStatus>");
        assert_eq!(
            decode_check_ns_status_response(&found),
            Some(NameserverStatus {
                name: "ns1.example.com".to_owned(),
                ip_address: "192.0.2.1".to_owned(),
            })
        );
        assert_eq!(
            decode_check_ns_status_response(&ok("<RRPCode>545</RRPCode>")),
            None
        );
    }

    #[test]
    fn delete_nameserver_needs_both_flags() {
        assert!(decode_delete_nameserver_response(&ok(
            "<RRPCode>200</RRPCode><NsSuccess>1</NsSuccess>"
        )));
        assert!(!decode_delete_nameserver_response(&ok(
            "<RRPCode>200</RRPCode><NsSuccess>0</NsSuccess>"
        )));
        assert!(!decode_delete_nameserver_response(&ok(
            "<RRPCode>541</RRPCode><NsSuccess>1</NsSuccess>"
        )));
    }

    #[test]
    fn get_dns_lists_hosts() {
        let response = ok("<RRPCode>200</RRPCode>\
             <dns>ns1.example.net</dns><dns> ns2.example.net </dns>");
        assert_eq!(
            decode_dns_response(&response),
            Some(vec![
                "ns1.example.net".to_owned(),
                "ns2.example.net".to_owned()
            ])
        );
        assert_eq!(decode_dns_response(&ok("<RRPCode>500</RRPCode>")), None);
    }

    #[test]
    fn nameserver_forms() {
        let ip = Ipv4Addr::new(192, 0, 2, 1);
        assert_eq!(
            encode_register_nameserver_form("ns1.example.com", ip).to_wire(),
            vec![
                ("Add".to_owned(), "true".to_owned()),
                ("NSName".to_owned(), "ns1.example.com".to_owned()),
                ("IP".to_owned(), "192.0.2.1".to_owned()),
            ]
        );
        let update =
            encode_update_nameserver_form("ns1.example.com", ip, Ipv4Addr::new(192, 0, 2, 2));
        assert_eq!(
            update.get("NewIP").map(|v| v.to_wire()).as_deref(),
            Some("192.0.2.2")
        );
        assert!(decode_update_nameserver_response(&ok("<NSSuccess>1</NSSuccess>")));
    }

    #[test]
    fn modify_ns_form_numbers_hosts() {
        let domain = DomainName::parse("example.com").unwrap();
        let hosts = Nameservers::new(["ns1.example.net", "ns2.example.net"]).unwrap();
        let params = encode_modify_ns_form(&domain, &hosts);
        assert_eq!(params.len(), 4);
        assert_eq!(
            params.get("NS2").map(|v| v.to_wire()).as_deref(),
            Some("ns2.example.net")
        );

        let cleared = encode_modify_ns_form(&domain, &Nameservers::default());
        assert_eq!(cleared.get("NS1").map(|v| v.to_wire()).as_deref(), Some(""));
        assert!(decode_modify_ns_response(&ok("<RRPCode>200</RRPCode>")));
    }
}
