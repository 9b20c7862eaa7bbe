use crate::domain::{
    AccountId, Contact, ContactRole, DomainName, Params, TransferOrder, TransferOrderDetail,
    TransferOrderLine,
};

use super::contact::encode_contact;
use super::contacts::decode_role_contacts;
use super::wire::{flag, float, int, required_text, text, timestamp};
use super::{DecodeError, Response, XmlElement, domain_params};

pub const PUSH_DOMAIN_COMMAND: &str = "PushDomain";
pub const SYNCH_AUTH_INFO_COMMAND: &str = "SynchAuthInfo";
pub const TRANSFER_CREATE_ORDER_COMMAND: &str = "TP_CreateOrder";
pub const TRANSFER_GET_ORDER_COMMAND: &str = "TP_GetOrder";
pub const TRANSFER_GET_ORDER_DETAIL_COMMAND: &str = "TP_GetOrderDetail";

const EPP_EMAIL_SENT: &str = "email has been sent";

pub fn encode_push_domain_form(
    domain: &DomainName,
    account_id: &AccountId,
    push_contact: bool,
) -> Params {
    domain_params(domain)
        .with("AccountID", account_id.as_str())
        .with("PushContact", push_contact)
}

pub fn decode_push_domain_response(response: &Response) -> bool {
    flag(response.root(), "PushDomain")
}

/// Both switches take the literal strings `True`/`False`.
pub fn encode_synch_auth_info_form(domain: &DomainName, email_epp: bool) -> Params {
    domain_params(domain)
        .with("RunSynchAutoInfo", "True")
        .with("EmailEPP", if email_epp { "True" } else { "False" })
}

/// With `email_epp` the result is whether the code was mailed out; otherwise
/// whether the auth info was synchronised.
pub fn decode_synch_auth_info_response(response: &Response, email_epp: bool) -> bool {
    let root = response.root();
    if email_epp {
        text(root, "EPPEmailMessage")
            .to_ascii_lowercase()
            .contains(EPP_EMAIL_SENT)
    } else {
        flag(root, "InfoSynched")
    }
}

/// A single-domain auto-verified transfer order. Without a new registrant the
/// existing contacts are kept (`UseContacts=1`).
pub fn encode_transfer_form(
    domain: &DomainName,
    auth_code: &str,
    registrant: Option<&Contact>,
) -> Params {
    let mut params = Params::new()
        .with("SLD1", domain.sld())
        .with("TLD1", domain.tld())
        .with("AuthInfo1", auth_code)
        .with("DomainCount", 1)
        .with("Lock", 1)
        .with("OrderType", "Autoverification")
        .with("Renew", 0)
        .with("UseContacts", 1)
        .with("PreConfig", 0);
    if let Some(registrant) = registrant {
        params.insert("UseContacts", 0);
        params.extend(
            encode_contact(registrant, Some(ContactRole::Registrant.prefix()))
                .into_iter()
                .collect(),
        );
    }
    params
}

pub fn decode_transfer_response(response: &Response) -> Result<String, DecodeError> {
    let root = response.root();
    let order = root.find("transferorder").unwrap_or(root);
    required_text(order, "transferorderid")
}

pub fn encode_transfer_order_form(transfer_order_id: &str) -> Params {
    Params::new().with("TransferOrderID", transfer_order_id.trim())
}

pub fn decode_transfer_order_response(response: &Response) -> Result<TransferOrder, DecodeError> {
    let root = response.root();
    let order = root
        .find("transferorder")
        .ok_or(DecodeError::MissingField {
            field: "transferorder",
        })?;
    Ok(TransferOrder {
        id: int(order, "transferorderid")?,
        order_date: timestamp(order, "orderdate")?,
        order_type_id: int(order, "ordertypeid")?,
        order_type: text(order, "ordertypedesc"),
        status_id: int(order, "statusid")?,
        status: text(order, "statusdesc"),
        auth_amount: float(order, "authamount")?,
        version: int(order, "version")?,
        details: order
            .children_named("transferorderdetail")
            .map(decode_order_line)
            .collect::<Result<_, _>>()?,
    })
}

fn decode_order_line(detail: &XmlElement) -> Result<TransferOrderLine, DecodeError> {
    Ok(TransferOrderLine {
        detail_id: int(detail, "transferorderdetailid")?,
        sld: text(detail, "sld"),
        tld: text(detail, "tld"),
        status_id: int(detail, "statusid")?,
        status: text(detail, "statusdesc"),
        price: float(detail, "price")?,
        use_contacts: flag(detail, "usecontacts"),
    })
}

pub fn encode_transfer_order_detail_form(transfer_order_detail_id: &str) -> Params {
    Params::new().with("TransferOrderDetailID", transfer_order_detail_id.trim())
}

pub fn decode_transfer_order_detail_response(
    response: &Response,
) -> Result<TransferOrderDetail, DecodeError> {
    let root = response.root();
    let detail = root
        .find("transferorderdetail")
        .ok_or(DecodeError::MissingField {
            field: "transferorderdetail",
        })?;
    Ok(TransferOrderDetail {
        detail_id: int(detail, "transferorderdetailid")?,
        sld: text(detail, "sld"),
        tld: text(detail, "tld"),
        lock: flag(detail, "lock"),
        renew: flag(detail, "renew"),
        status_id: int(detail, "statusid")?,
        status: text(detail, "statusdesc"),
        price: float(detail, "price")?,
        use_contacts: flag(detail, "usecontacts"),
        contacts: detail
            .child("contacts")
            .map(decode_role_contacts)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

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
    fn push_domain_form_and_response() {
        let domain = DomainName::parse("example.com").unwrap();
        let account = AccountId::new("other-reseller").unwrap();
        let params = encode_push_domain_form(&domain, &account, false);
        assert_eq!(wire(&params, "AccountID").as_deref(), Some("other-reseller"));
        assert_eq!(wire(&params, "PushContact").as_deref(), Some("0"));
        assert!(decode_push_domain_response(&ok("<PushDomain>True</PushDomain>")));
    }

    #[test]
    fn synch_auth_info_reads_the_requested_outcome() {
        let domain = DomainName::parse("example.com").unwrap();
        let params = encode_synch_auth_info_form(&domain, true);
        assert_eq!(wire(&params, "RunSynchAutoInfo").as_deref(), Some("True"));
        assert_eq!(wire(&params, "EmailEPP").as_deref(), Some("True"));

        let mailed = ok("<EPPEmailMessage>Email has been sent.</EPPEmailMessage>");
        assert!(decode_synch_auth_info_response(&mailed, true));
        assert!(!decode_synch_auth_info_response(&mailed, false));

        let synched = ok("<InfoSynched>True</InfoSynched>");
        assert!(decode_synch_auth_info_response(&synched, false));
    }

    #[test]
    fn transfer_form_keeps_contacts_by_default() {
        let domain = DomainName::parse("example.com").unwrap();
        let params = encode_transfer_form(&domain, "s3cr3t", None);
        assert_eq!(wire(&params, "SLD1").as_deref(), Some("example"));
        assert_eq!(wire(&params, "TLD1").as_deref(), Some("com"));
        assert_eq!(wire(&params, "AuthInfo1").as_deref(), Some("s3cr3t"));
        assert_eq!(wire(&params, "OrderType").as_deref(), Some("Autoverification"));
        assert_eq!(wire(&params, "UseContacts").as_deref(), Some("1"));
        assert_eq!(wire(&params, "SLD"), None);
    }

    #[test]
    fn transfer_form_with_new_registrant() {
        let domain = DomainName::parse("example.com").unwrap();
        let registrant = Contact::new("Jane", "Doe").unwrap();
        let params = encode_transfer_form(&domain, "s3cr3t", Some(&registrant));
        assert_eq!(wire(&params, "UseContacts").as_deref(), Some("0"));
        assert_eq!(wire(&params, "RegistrantLastName").as_deref(), Some("Doe"));
    }

    #[test]
    fn transfer_response_yields_order_id() {
        let response =
            ok("<transferorder><transferorderid> 175614 </transferorderid></transferorder>");
        assert_eq!(decode_transfer_response(&response).unwrap(), "175614");
        assert!(matches!(
            decode_transfer_response(&ok("<transferorder/>")),
            Err(DecodeError::MissingField {
                field: "transferorderid"
            })
        ));
    }

    #[test]
    fn transfer_order_with_details() {
        let response = ok("<transferorder>\
               <transferorderid>175614</transferorderid>\
               <orderdate>3/7/2011 1:02:03 PM</orderdate>\
               <ordertypeid>1</ordertypeid><ordertypedesc>Auto Verification</ordertypedesc>\
               <statusid>1</statusid><statusdesc>Processing</statusdesc>\
               <authamount>8.95</authamount><version>1</version>\
               <transferorderdetail>\
                 <transferorderdetailid>1</transferorderdetailid>\
                 <sld>example</sld><tld>com</tld>\
                 <statusid>9</statusid><statusdesc>Awaiting auto verification</statusdesc>\
                 <price>8.95</price><usecontacts>1</usecontacts>\
               </transferorderdetail>\
             </transferorder>");
        let order = decode_transfer_order_response(&response).unwrap();
        assert_eq!(order.id, 175614);
        assert_eq!(order.status_id, 1);
        assert_eq!(order.status, "Processing");
        assert_eq!(order.order_date.unwrap().hour(), 13);
        assert_eq!(order.details.len(), 1);
        assert_eq!(order.details[0].status_id, 9);
        assert!(order.details[0].use_contacts);
    }

    #[test]
    fn transfer_order_detail_skips_none_contacts() {
        let response = ok("<transferorderdetail>\
               <transferorderdetailid>1</transferorderdetailid>\
               <sld>example</sld><tld>com</tld><lock>True</lock><renew>False</renew>\
               <statusid>5</statusid><statusdesc>Transferred</statusdesc>\
               <price>8.95</price><usecontacts>0</usecontacts>\
               <contacts>\
                 <Registrant><RegistrantFirstName>Jane</RegistrantFirstName>\
                   <RegistrantLastName>Doe</RegistrantLastName></Registrant>\
                 <AuxBilling>None</AuxBilling><Tech>None</Tech><Admin>None</Admin>\
                 <Billing>None</Billing>\
               </contacts>\
             </transferorderdetail>");
        let detail = decode_transfer_order_detail_response(&response).unwrap();
        assert_eq!(detail.detail_id, 1);
        assert!(detail.lock);
        assert!(!detail.renew);
        assert_eq!(detail.price, 8.95);
        assert_eq!(detail.contacts.registrant.as_ref().unwrap().first_name(), "Jane");
        assert_eq!(detail.contacts.tech, None);
        assert_eq!(detail.contacts.billing, None);
    }

    #[test]
    fn transfer_order_detail_requires_the_detail_node() {
        assert!(matches!(
            decode_transfer_order_detail_response(&ok("")),
            Err(DecodeError::MissingField {
                field: "transferorderdetail"
            })
        ));
    }
}
