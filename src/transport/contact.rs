//! Contact records on the wire.
//!
//! Writes always use the prefixed per-role field names. Reads come in two
//! shapes: the short WHOIS layout (`FName`, `LName`, ...) and the per-role
//! layout (`RegistrantFirstName`, `TechFirstName`, ...). [`ContactSchema`]
//! decides which one a fragment uses.

use crate::domain::{Contact, ContactRole, DEFAULT_JOB_TITLE};

use super::xml::XmlElement;

const SHORT_MARKER: &str = "FName";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSchema {
    Short,
    Role(ContactRole),
}

impl ContactSchema {
    /// Probe the short marker first, then each role marker in
    /// [`ContactRole::ALL`] order.
    pub fn detect(element: &XmlElement) -> Option<Self> {
        if element.find(SHORT_MARKER).is_some() {
            return Some(Self::Short);
        }
        ContactRole::ALL
            .into_iter()
            .find(|role| element.find(&role_field(*role, "FirstName")).is_some())
            .map(Self::Role)
    }

    fn field(self, short: &str, long: &str) -> String {
        match self {
            Self::Short => short.to_owned(),
            Self::Role(role) => role_field(role, long),
        }
    }
}

fn role_field(role: ContactRole, field: &str) -> String {
    format!("{}{field}", role.prefix())
}

/// Flatten a contact into form fields, prefixing every key with `prefix`.
///
/// The address is split on its first newline into `Address1`/`Address2`.
/// `OrganizationName` and `JobTitle` are only sent for organisation contacts.
/// Empty values are dropped.
pub fn encode_contact(contact: &Contact, prefix: Option<&str>) -> Vec<(String, String)> {
    let prefix = prefix.unwrap_or_default();
    let (address1, address2) = match contact.address.as_deref() {
        Some(address) => match address.split_once('\n') {
            Some((first, second)) => (Some(first), Some(second)),
            None => (Some(address), None),
        },
        None => (None, None),
    };

    let mut fields: Vec<(&str, Option<&str>)> = vec![
        ("FirstName", Some(contact.first_name())),
        ("LastName", Some(contact.last_name())),
        ("Address1", address1),
        ("Address2", address2),
        ("City", contact.city.as_deref()),
        ("StateProvince", contact.state.as_deref()),
        ("PostalCode", contact.postal_code.as_deref()),
        ("Country", contact.country.as_deref()),
        ("EmailAddress", contact.email.as_deref()),
        ("Phone", contact.phone.as_deref()),
        ("PhoneExt", contact.phone_extension.as_deref()),
        ("Fax", contact.fax.as_deref()),
    ];

    if let Some(organisation) = contact.organisation.as_deref().filter(|org| !org.is_empty()) {
        fields.push(("OrganizationName", Some(organisation)));
        fields.push((
            "JobTitle",
            Some(contact.job_title.as_deref().unwrap_or(DEFAULT_JOB_TITLE)),
        ));
    }

    fields
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .filter(|value| !value.is_empty())
                .map(|value| (format!("{prefix}{key}"), value.to_owned()))
        })
        .collect()
}

/// Rebuild a contact from a response fragment, or `None` when the fragment
/// matches neither wire layout.
///
/// The names are taken as-is and may be blank.
pub fn decode_contact(element: &XmlElement) -> Option<Contact> {
    ContactSchema::detect(element).map(|schema| decode_with(element, schema))
}

pub fn decode_with(element: &XmlElement, schema: ContactSchema) -> Contact {
    let read = |short: &str, long: &str| {
        element
            .find_text(&schema.field(short, long))
            .map(str::to_owned)
    };

    let mut contact = Contact::from_names_unchecked(
        read("FName", "FirstName").unwrap_or_default(),
        read("LName", "LastName").unwrap_or_default(),
    );
    contact.organisation = read("Organization", "OrganizationName");
    contact.job_title = read("JobTitle", "JobTitle");
    contact.address = join_address(read("Address1", "Address1"), read("Address2", "Address2"));
    contact.city = read("City", "City");
    contact.state = read("StateProvince", "StateProvince");
    contact.postal_code = read("PostalCode", "PostalCode");
    contact.country = read("Country", "Country");
    contact.phone = read("Phone", "Phone");
    contact.phone_extension =
        read("PhoneExt", "PhoneExt").or_else(|| read("PhoneExtension", "PhoneExtension"));
    contact.fax = read("Fax", "Fax");
    contact.email = read("EmailAddress", "EmailAddress");
    contact.party_id = match schema {
        ContactSchema::Short => None,
        ContactSchema::Role(_) => read("PartyID", "PartyID"),
    };
    contact
}

fn join_address(first: Option<String>, second: Option<String>) -> Option<String> {
    let parts = [first, second]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}
