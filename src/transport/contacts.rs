use std::collections::BTreeMap;

use crate::domain::{ContactRole, DomainContacts, WhoisInfo};

use super::contact::decode_contact;
use super::wire::{optional_text, timestamp};
use super::{DecodeError, Response, XmlElement};

pub const GET_WHOIS_CONTACT_COMMAND: &str = "GetWhoisContact";
pub const GET_CONTACTS_COMMAND: &str = "GetContacts";

pub fn decode_whois_contact_response(response: &Response) -> Result<WhoisInfo, DecodeError> {
    let root = response.root();
    let whois = root.find("GetWhoisContacts").unwrap_or(root);

    let contacts = whois
        .child("contacts")
        .map(|contacts| {
            contacts
                .children_named("contact")
                .filter_map(|element| {
                    let role = ContactRole::from_whois_type(element.attribute("ContactType")?)?;
                    Some((role, decode_contact(element)?))
                })
                .collect::<BTreeMap<_, _>>()
        })
        .unwrap_or_default();

    let Some(rrp) = whois.find("rrp-info") else {
        return Ok(WhoisInfo {
            contacts,
            updated: None,
            created: None,
            expires: None,
            nameservers: Vec::new(),
            lock_status: None,
        });
    };

    Ok(WhoisInfo {
        contacts,
        updated: timestamp(rrp, "updated-date")?,
        created: timestamp(rrp, "created-date")?,
        expires: timestamp(rrp, "registration-expiration-date")?,
        nameservers: nameserver_hosts(rrp),
        lock_status: optional_text(rrp, "status"),
    })
}

fn nameserver_hosts(rrp: &XmlElement) -> Vec<String> {
    rrp.child("nameserver")
        .map(|list| {
            list.children_named("nameserver")
                .map(|host| host.text().trim().to_ascii_lowercase())
                .filter(|host| !host.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// One contact per role; roles the registrar leaves empty stay `None`.
pub fn decode_contacts_response(response: &Response) -> DomainContacts {
    let root = response.root();
    let section = root.find("GetContacts").unwrap_or(root);
    decode_role_contacts(section)
}

/// Read the `Registrant`/`AuxBilling`/`Tech`/`Admin`/`Billing` children of
/// `section`. A role node holding only the text `None` is skipped.
pub(crate) fn decode_role_contacts(section: &XmlElement) -> DomainContacts {
    let mut contacts = DomainContacts::default();
    for role in ContactRole::ALL {
        let Some(element) = section.child(role.prefix()) else {
            continue;
        };
        if element.children().is_empty() && element.text().trim() == "None" {
            continue;
        }
        if let Some(contact) = decode_contact(element) {
            contacts.set(role, contact);
        }
    }
    contacts
}
