use crate::domain::{
    Contact, ContactRole, DeleteOutcome, DomainName, ExtAttribute, ExtAttributeOption,
    Nameservers, OrderId, Params, PurchaseOptions, PurchaseResult, PurchaseStatus,
};

use super::contact::encode_contact;
use super::wire::{flag, optional_text, text};
use super::{DecodeError, Response, XmlElement, domain_params};

pub const PURCHASE_COMMAND: &str = "Purchase";
pub const DELETE_REGISTRATION_COMMAND: &str = "DeleteRegistration";
pub const GET_EXT_ATTRIBUTES_COMMAND: &str = "GetExtAttributes";

/// The registrar insists on an end-user IP for deletions.
const DELETE_END_USER_IP: &str = "127.000.000.001";

const RRP_REGISTERED: &str = "200";
const RRP_ORDERED: &str = "1300";

/// Decoded outcome of a purchase, before the client maps it onto errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseReply {
    Accepted(PurchaseResult),
    /// RRP 1300 on a real-time TLD: the registration failed.
    Rejected(String),
    Unexpected { code: String, text: Option<String> },
}

/// `NS1..NSn`; an empty list sends a blank `NS1`.
pub fn nameserver_params(nameservers: &Nameservers) -> Params {
    if nameservers.is_empty() {
        return Params::new().with("NS1", "");
    }
    nameservers
        .as_slice()
        .iter()
        .enumerate()
        .map(|(idx, host)| (format!("NS{}", idx + 1), host.as_str()))
        .collect()
}

pub fn encode_purchase_form(
    domain: &DomainName,
    registrant: &Contact,
    nameservers: &Nameservers,
    options: &PurchaseOptions,
) -> Params {
    let mut params = options.extra.clone();
    params.extend(domain_params(domain));
    params.extend(
        encode_contact(registrant, Some(ContactRole::Registrant.prefix()))
            .into_iter()
            .collect(),
    );
    if let Some(period) = options.period {
        params.insert("NumYears", period);
    }
    params.extend(nameserver_params(nameservers));
    params
}

pub fn decode_purchase_response(response: &Response) -> Result<PurchaseReply, DecodeError> {
    let root = response.root();
    let code = text(root, "RRPCode");
    let accepted = |result| -> Result<PurchaseReply, DecodeError> {
        Ok(PurchaseReply::Accepted(PurchaseResult {
            result,
            order_id: order_id(root)?,
        }))
    };
    match code.as_str() {
        RRP_REGISTERED => accepted(PurchaseStatus::Registered),
        RRP_ORDERED if flag(root, "IsRealTimeTLD") => {
            Ok(PurchaseReply::Rejected(text(root, "RRPText")))
        }
        RRP_ORDERED => accepted(PurchaseStatus::Ordered),
        _ => Ok(PurchaseReply::Unexpected {
            code,
            text: optional_text(root, "RRPText"),
        }),
    }
}

pub(crate) fn order_id(element: &XmlElement) -> Result<OrderId, DecodeError> {
    optional_text(element, OrderId::FIELD)
        .and_then(|value| OrderId::new(value).ok())
        .ok_or(DecodeError::MissingField {
            field: OrderId::FIELD,
        })
}

pub fn encode_delete_registration_form(domain: &DomainName) -> Params {
    domain_params(domain).with("EndUserIP", DELETE_END_USER_IP)
}

pub fn decode_delete_registration_response(response: &Response) -> DeleteOutcome {
    let root = response.root();
    if flag(root, "DomainDeleted") {
        return DeleteOutcome::Deleted;
    }
    DeleteOutcome::Refused {
        string: optional_text(root, "ErrString"),
        source: optional_text(root, "ErrSource"),
        section: optional_text(root, "ErrSection"),
    }
}

pub fn encode_get_ext_attributes_form(tld: &str) -> Params {
    Params::new().with(DomainName::TLD_FIELD, tld.trim())
}

pub fn decode_ext_attributes_response(response: &Response) -> Vec<ExtAttribute> {
    let Some(attributes) = response.root().find("Attributes") else {
        return Vec::new();
    };
    attributes
        .children_named("Attribute")
        .map(|attribute| ExtAttribute {
            id: text(attribute, "ID"),
            name: text(attribute, "Name"),
            title: text(attribute, "Title"),
            application: attribute.find_text("Application") == Some("2"),
            user_defined: flag(attribute, "UserDefined"),
            required: flag(attribute, "Required"),
            description: text(attribute, "Description"),
            is_child: flag(attribute, "IsChild"),
            options: attribute
                .child("Options")
                .map(|options| {
                    options
                        .children_named("Option")
                        .map(|option| ExtAttributeOption {
                            id: text(option, "ID"),
                            value: text(option, "Value"),
                            title: text(option, "Title"),
                            description: text(option, "Description"),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::validate;

    fn ok(body: &str) -> Response {
        validate(
            XmlElement::parse(&format!(
                "<interface-response>{body}<ErrCount>0</ErrCount><Done>true</Done></interface-response>"
            ))
            .unwrap(),
        )
        .unwrap()
    }

    fn wire(params: &Params, key: &str) -> Option<String> {
        params.get(key).map(|value| value.to_wire())
    }

    #[test]
    fn encode_purchase_form_params() {
        let domain = DomainName::parse("example.com").unwrap();
        let registrant = Contact::new("Jane", "Doe").unwrap();
        let nameservers = Nameservers::new(["ns1.example.net", "ns2.example.net"]).unwrap();
        let options = PurchaseOptions {
            period: Some(2),
            extra: Params::new().with("SLD", "ignored").with("us_nexus", "C11"),
        };

        let params = encode_purchase_form(&domain, &registrant, &nameservers, &options);
        assert_eq!(wire(&params, "SLD").as_deref(), Some("example"));
        assert_eq!(wire(&params, "TLD").as_deref(), Some("com"));
        assert_eq!(wire(&params, "RegistrantFirstName").as_deref(), Some("Jane"));
        assert_eq!(wire(&params, "NumYears").as_deref(), Some("2"));
        assert_eq!(wire(&params, "NS1").as_deref(), Some("ns1.example.net"));
        assert_eq!(wire(&params, "NS2").as_deref(), Some("ns2.example.net"));
        assert_eq!(wire(&params, "us_nexus").as_deref(), Some("C11"));
    }

    #[test]
    fn empty_nameserver_list_sends_blank_ns1() {
        let params = nameserver_params(&Nameservers::default());
        assert_eq!(params.to_wire(), vec![("NS1".to_owned(), String::new())]);
    }

    #[test]
    fn decode_purchase_registered_and_ordered() {
        let registered = ok("<RRPCode>200</RRPCode><OrderID>157614499</OrderID>");
        assert_eq!(
            decode_purchase_response(&registered).unwrap(),
            PurchaseReply::Accepted(PurchaseResult {
                result: PurchaseStatus::Registered,
                order_id: OrderId::new("157614499").unwrap(),
            })
        );

        let ordered = ok(
            "<RRPCode>1300</RRPCode><IsRealTimeTLD>False</IsRealTimeTLD><OrderID>42</OrderID>",
        );
        assert!(matches!(
            decode_purchase_response(&ordered).unwrap(),
            PurchaseReply::Accepted(PurchaseResult {
                result: PurchaseStatus::Ordered,
                ..
            })
        ));
    }

    #[test]
    fn decode_purchase_real_time_1300_is_rejected() {
        let response = ok(
            "<RRPCode>1300</RRPCode><RRPText>Registry timeout</RRPText>\
             <IsRealTimeTLD>True</IsRealTimeTLD>",
        );
        assert_eq!(
            decode_purchase_response(&response).unwrap(),
            PurchaseReply::Rejected("Registry timeout".to_owned())
        );
    }

    #[test]
    fn decode_purchase_other_code_is_unexpected() {
        let response = ok("<RRPCode>540</RRPCode><RRPText>Domain taken</RRPText>");
        assert_eq!(
            decode_purchase_response(&response).unwrap(),
            PurchaseReply::Unexpected {
                code: "540".to_owned(),
                text: Some("Domain taken".to_owned()),
            }
        );
    }

    #[test]
    fn decode_purchase_requires_order_id() {
        let response = ok("<RRPCode>200</RRPCode>");
        assert!(matches!(
            decode_purchase_response(&response),
            Err(DecodeError::MissingField { field: "OrderID" })
        ));
    }

    #[test]
    fn decode_delete_registration() {
        assert_eq!(
            decode_delete_registration_response(&ok("<DomainDeleted>True</DomainDeleted>")),
            DeleteOutcome::Deleted
        );
        assert_eq!(
            decode_delete_registration_response(&ok(
                "<DomainDeleted>False</DomainDeleted><ErrString>Too old</ErrString>\
                 <ErrSource>Delete</ErrSource>"
            )),
            DeleteOutcome::Refused {
                string: Some("Too old".to_owned()),
                source: Some("Delete".to_owned()),
                section: None,
            }
        );
    }

    #[test]
    fn decode_ext_attributes_with_options() {
        let response = ok("<Attributes>\
               <Attribute><ID>1</ID><Name>us_nexus</Name><Title>Nexus</Title>\
                 <Application>2</Application><UserDefined>False</UserDefined>\
                 <Required>1</Required><Description>Nexus category</Description>\
                 <IsChild>0</IsChild>\
                 <Options>\
                   <Option><ID>10</ID><Value>C11</Value><Title>Citizen</Title>\
                     <Description>US citizen</Description></Option>\
                   <Option><ID>11</ID><Value>C12</Value><Title>Resident</Title>\
                     <Description>Permanent resident</Description></Option>\
                 </Options></Attribute>\
             </Attributes>");
        let attributes = decode_ext_attributes_response(&response);
        assert_eq!(attributes.len(), 1);
        let attribute = &attributes[0];
        assert_eq!(attribute.id, "1");
        assert_eq!(attribute.name, "us_nexus");
        assert!(attribute.application);
        assert!(!attribute.user_defined);
        assert!(attribute.required);
        assert_eq!(attribute.options.len(), 2);
        assert_eq!(attribute.options[1].value, "C12");
    }
}
