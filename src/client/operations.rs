//! Typed registrar operations, grouped the way the registrar groups its
//! commands.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::{EnomClient, EnomError};
use crate::domain::{
    AccountId, Availability, Balance, CheckDomains, Contact, DeleteOutcome, DomainContacts,
    DomainCount, DomainInfo, DomainName, DomainOwnership, DomainStatus, ExpiredDomains,
    ExtAttribute, ExtendInfo, ExtendOptions, NameserverStatus, Nameservers, OrderDetail, OrderId,
    OrderListOptions, OrderSummary, OrderType, Params, PricingOptions, PurchaseOptions,
    PurchaseResult, RegistrationStatus, SearchQuery, SearchResult, TldInfo, TldPricing,
    TransferOrder, TransferOrderDetail, ValidationError, WhoisInfo,
};
use crate::transport::{self, PurchaseReply};

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Search and availability.
impl EnomClient {
    /// Run an advanced domain search over the account's domains.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, EnomError> {
        let response = self.call_search(query).await?;
        Ok(transport::decode_search_response(&response)?)
    }

    /// Check whether up to 30 names are available for registration.
    ///
    /// One name yields [`Availability::Single`], several yield
    /// [`Availability::Many`]. An empty list or more than 30 names fails before
    /// anything is sent.
    pub async fn check<I, S>(&self, names: I) -> Result<Availability, EnomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let request = CheckDomains::new(names)?;
        let response = self
            .call(
                transport::CHECK_COMMAND,
                transport::encode_check_form(&request),
            )
            .await?;
        Ok(transport::decode_check_response(&request, &response)?)
    }
}

/// Registration.
impl EnomClient {
    /// Register `domain` with `registrant` as the registrant contact. A
    /// registrant with a blank first or last name is rejected before sending.
    ///
    /// Errors:
    /// - [`EnomError::Response`] carrying the registry text when a real-time
    ///   TLD answers RRP 1300,
    /// - [`EnomError::UnexpectedRrpCode`] for any code other than 200/1300.
    pub async fn purchase(
        &self,
        domain: &DomainName,
        registrant: &Contact,
        nameservers: &Nameservers,
        options: PurchaseOptions,
    ) -> Result<PurchaseResult, EnomError> {
        registrant.ensure_named()?;
        let params = transport::encode_purchase_form(domain, registrant, nameservers, &options);
        let response = self.call(transport::PURCHASE_COMMAND, params).await?;
        match transport::decode_purchase_response(&response)? {
            PurchaseReply::Accepted(result) => Ok(result),
            PurchaseReply::Rejected(text) => Err(EnomError::Response {
                messages: vec![text],
            }),
            PurchaseReply::Unexpected { code, text } => {
                Err(EnomError::UnexpectedRrpCode { code, text })
            }
        }
    }

    pub async fn delete_registration(
        &self,
        domain: &DomainName,
    ) -> Result<DeleteOutcome, EnomError> {
        let response = self
            .call(
                transport::DELETE_REGISTRATION_COMMAND,
                transport::encode_delete_registration_form(domain),
            )
            .await?;
        Ok(transport::decode_delete_registration_response(&response))
    }

    /// Extended attributes a TLD requires at registration time.
    pub async fn get_ext_attributes(&self, tld: &str) -> Result<Vec<ExtAttribute>, EnomError> {
        let tld = required(tld, DomainName::TLD_FIELD)?;
        let response = self
            .call(
                transport::GET_EXT_ATTRIBUTES_COMMAND,
                transport::encode_get_ext_attributes_form(tld),
            )
            .await?;
        Ok(transport::decode_ext_attributes_response(&response))
    }
}

/// Contacts.
impl EnomClient {
    pub async fn get_whois_contact(&self, domain: &DomainName) -> Result<WhoisInfo, EnomError> {
        let response = self
            .call(
                transport::GET_WHOIS_CONTACT_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_whois_contact_response(&response)?)
    }

    pub async fn get_contacts(&self, domain: &DomainName) -> Result<DomainContacts, EnomError> {
        let response = self
            .call(
                transport::GET_CONTACTS_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_contacts_response(&response))
    }
}

/// Registrar lock.
impl EnomClient {
    pub async fn get_reg_lock(&self, domain: &DomainName) -> Result<bool, EnomError> {
        let response = self
            .call(
                transport::GET_REG_LOCK_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_reg_lock_response(&response))
    }

    /// Lock or unlock `domain`. Returns the new lock status, or `None` when
    /// the registrar answers `Failed`.
    ///
    /// Unlocking a domain that is already unlocked succeeds with
    /// `Some("Unlocked")`.
    pub async fn set_reg_lock(
        &self,
        domain: &DomainName,
        locked: bool,
    ) -> Result<Option<String>, EnomError> {
        let result = self
            .call(
                transport::SET_REG_LOCK_COMMAND,
                transport::encode_set_reg_lock_form(domain, locked),
            )
            .await;
        match result {
            Ok(response) => Ok(transport::decode_set_reg_lock_response(&response)),
            Err(EnomError::Response { messages })
                if !locked && messages.iter().any(|m| transport::is_already_unlocked(m)) =>
            {
                debug!(%domain, "domain already unlocked");
                Ok(Some(transport::UNLOCKED_STATUS.to_owned()))
            }
            Err(err) => Err(err),
        }
    }
}

/// Renewal.
impl EnomClient {
    /// Expiration of `domain` in UTC.
    pub async fn get_domain_exp(&self, domain: &DomainName) -> Result<DateTime<Utc>, EnomError> {
        let response = self
            .call(
                transport::GET_DOMAIN_EXP_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_domain_exp_response(&response)?)
    }

    /// Domains in the expired, redemption and extended redemption groups.
    pub async fn get_expired_domains(&self) -> Result<ExpiredDomains, EnomError> {
        let response = self
            .call(transport::GET_EXPIRED_DOMAINS_COMMAND, Params::new())
            .await?;
        Ok(transport::decode_expired_domains_response(&response)?)
    }

    /// Renew `domain` by `years`. `None` unless the registry answered RRP 200.
    pub async fn extend(
        &self,
        domain: &DomainName,
        years: u32,
        options: ExtendOptions,
    ) -> Result<Option<OrderId>, EnomError> {
        let response = self
            .call(
                transport::EXTEND_COMMAND,
                transport::encode_extend_form(domain, years, &options),
            )
            .await?;
        Ok(transport::decode_extend_response(&response))
    }

    pub async fn get_extend_info(&self, domain: &DomainName) -> Result<ExtendInfo, EnomError> {
        let response = self
            .call(
                transport::GET_EXTEND_INFO_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_extend_info_response(&response)?)
    }

    /// Reactivate an expired domain in real time.
    pub async fn update_expired_domains(
        &self,
        domain: &DomainName,
        years: u32,
        options: ExtendOptions,
    ) -> Result<Option<OrderId>, EnomError> {
        let response = self
            .call(
                transport::UPDATE_EXPIRED_DOMAINS_COMMAND,
                transport::encode_update_expired_domains_form(domain, years, &options),
            )
            .await?;
        Ok(transport::decode_update_expired_domains_response(&response))
    }
}

/// Transfers.
impl EnomClient {
    /// Move `domain` to another reseller account.
    pub async fn push_domain(
        &self,
        domain: &DomainName,
        account_id: &AccountId,
        push_contact: bool,
    ) -> Result<bool, EnomError> {
        let response = self
            .call(
                transport::PUSH_DOMAIN_COMMAND,
                transport::encode_push_domain_form(domain, account_id, push_contact),
            )
            .await?;
        Ok(transport::decode_push_domain_response(&response))
    }

    /// Resynchronise the transfer auth code with the registry, optionally
    /// mailing it to the registrant. An unfinished command reads as `false`.
    pub async fn synch_auth_info(
        &self,
        domain: &DomainName,
        email_epp: bool,
    ) -> Result<bool, EnomError> {
        let result = self
            .call(
                transport::SYNCH_AUTH_INFO_COMMAND,
                transport::encode_synch_auth_info_form(domain, email_epp),
            )
            .await;
        match result {
            Ok(response) => Ok(transport::decode_synch_auth_info_response(
                &response, email_epp,
            )),
            Err(EnomError::Incomplete { .. }) => {
                debug!(%domain, "auth info synch did not complete");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Order an auto-verified transfer of `domain` and return the transfer
    /// order id. Passing a registrant replaces the existing contacts.
    pub async fn transfer_domain(
        &self,
        domain: &DomainName,
        auth_code: &str,
        registrant: Option<&Contact>,
    ) -> Result<String, EnomError> {
        let auth_code = required(auth_code, "AuthInfo1")?;
        if let Some(registrant) = registrant {
            registrant.ensure_named()?;
        }
        let response = self
            .call(
                transport::TRANSFER_CREATE_ORDER_COMMAND,
                transport::encode_transfer_form(domain, auth_code, registrant),
            )
            .await?;
        Ok(transport::decode_transfer_response(&response)?)
    }

    pub async fn get_transfer_order(
        &self,
        transfer_order_id: &str,
    ) -> Result<TransferOrder, EnomError> {
        let id = required(transfer_order_id, "TransferOrderID")?;
        let response = self
            .call(
                transport::TRANSFER_GET_ORDER_COMMAND,
                transport::encode_transfer_order_form(id),
            )
            .await?;
        Ok(transport::decode_transfer_order_response(&response)?)
    }

    pub async fn get_transfer_order_detail(
        &self,
        transfer_order_detail_id: &str,
    ) -> Result<TransferOrderDetail, EnomError> {
        let id = required(transfer_order_detail_id, "TransferOrderDetailID")?;
        let response = self
            .call(
                transport::TRANSFER_GET_ORDER_DETAIL_COMMAND,
                transport::encode_transfer_order_detail_form(id),
            )
            .await?;
        Ok(transport::decode_transfer_order_detail_response(&response)?)
    }
}

/// Nameservers.
impl EnomClient {
    /// Status of a nameserver host, or `None` when it is not registered.
    pub async fn check_ns_status(&self, name: &str) -> Result<Option<NameserverStatus>, EnomError> {
        let name = required(name, "CheckNSName")?;
        let response = self
            .call(
                transport::CHECK_NS_STATUS_COMMAND,
                transport::encode_check_ns_status_form(name),
            )
            .await?;
        Ok(transport::decode_check_ns_status_response(&response))
    }

    pub async fn delete_nameserver(&self, name: &str) -> Result<bool, EnomError> {
        let name = required(name, "NS")?;
        let response = self
            .call(
                transport::DELETE_NAMESERVER_COMMAND,
                transport::encode_delete_nameserver_form(name),
            )
            .await?;
        Ok(transport::decode_delete_nameserver_response(&response))
    }

    /// Nameservers of `domain`, or `None` unless the registry answered RRP 200.
    pub async fn get_dns(&self, domain: &DomainName) -> Result<Option<Vec<String>>, EnomError> {
        let response = self
            .call(transport::GET_DNS_COMMAND, transport::domain_params(domain))
            .await?;
        Ok(transport::decode_dns_response(&response))
    }

    /// Register a nameserver host. Registrar errors surface as
    /// [`EnomError::Response`].
    pub async fn register_nameserver(&self, name: &str, ip: Ipv4Addr) -> Result<(), EnomError> {
        let name = required(name, "NSName")?;
        self.call(
            transport::REGISTER_NAMESERVER_COMMAND,
            transport::encode_register_nameserver_form(name, ip),
        )
        .await?;
        Ok(())
    }

    pub async fn update_nameserver(
        &self,
        name: &str,
        old_ip: Ipv4Addr,
        new_ip: Ipv4Addr,
    ) -> Result<bool, EnomError> {
        let name = required(name, "NS")?;
        let response = self
            .call(
                transport::UPDATE_NAMESERVER_COMMAND,
                transport::encode_update_nameserver_form(name, old_ip, new_ip),
            )
            .await?;
        Ok(transport::decode_update_nameserver_response(&response))
    }

    /// Replace the nameservers of `domain`. An empty list clears them.
    pub async fn modify_ns(
        &self,
        domain: &DomainName,
        nameservers: &Nameservers,
    ) -> Result<bool, EnomError> {
        let response = self
            .call(
                transport::MODIFY_NS_COMMAND,
                transport::encode_modify_ns_form(domain, nameservers),
            )
            .await?;
        Ok(transport::decode_modify_ns_response(&response))
    }
}

/// Domain information.
impl EnomClient {
    pub async fn get_domain_info(&self, domain: &DomainName) -> Result<DomainInfo, EnomError> {
        let response = self
            .call(
                transport::GET_DOMAIN_INFO_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_domain_info_response(&response)?)
    }

    /// Registration status of `domain`, optionally scoped to one order.
    pub async fn get_domain_status(
        &self,
        domain: &DomainName,
        order: Option<(OrderId, OrderType)>,
    ) -> Result<DomainStatus, EnomError> {
        let order = order.as_ref().map(|(id, order_type)| (id, *order_type));
        let response = self
            .call(
                transport::GET_DOMAIN_STATUS_COMMAND,
                transport::encode_domain_status_form(domain, order),
            )
            .await?;
        Ok(transport::decode_domain_status_response(&response)?)
    }

    pub async fn get_registration_status(
        &self,
        domain: &DomainName,
    ) -> Result<RegistrationStatus, EnomError> {
        let response = self
            .call(
                transport::GET_REGISTRATION_STATUS_COMMAND,
                transport::domain_params(domain),
            )
            .await?;
        Ok(transport::decode_registration_status_response(&response))
    }

    /// Whether the registrar knows `domain` and whether it sits in this
    /// account. A domain held by another account reads as known but not in
    /// this account.
    pub async fn status_domain(
        &self,
        domain: &DomainName,
        order_type: OrderType,
    ) -> Result<DomainOwnership, EnomError> {
        let result = self
            .call(
                transport::STATUS_DOMAIN_COMMAND,
                transport::encode_status_domain_form(domain, order_type),
            )
            .await;
        match result {
            Ok(response) => Ok(transport::decode_status_domain_response(&response)),
            Err(EnomError::Response { messages })
                if messages
                    .iter()
                    .any(|m| m == transport::NOT_IN_ACCOUNT_MESSAGE) =>
            {
                debug!(%domain, "domain belongs to another account");
                Ok(transport::held_elsewhere())
            }
            Err(err) => Err(err),
        }
    }
}

/// Orders.
impl EnomClient {
    pub async fn get_order_detail(&self, order_id: &OrderId) -> Result<OrderDetail, EnomError> {
        let response = self
            .call(
                transport::GET_ORDER_DETAIL_COMMAND,
                transport::encode_order_detail_form(order_id),
            )
            .await?;
        Ok(transport::decode_order_detail_response(&response)?)
    }

    /// Orders placed on the account. Without dates the registrar returns the
    /// last six months.
    pub async fn get_order_list(
        &self,
        options: OrderListOptions,
    ) -> Result<Vec<OrderSummary>, EnomError> {
        let response = self
            .call(
                transport::GET_ORDER_LIST_COMMAND,
                transport::encode_order_list_form(&options),
            )
            .await?;
        Ok(transport::decode_order_list_response(&response)?)
    }
}

/// Account.
impl EnomClient {
    pub async fn get_domain_count(&self) -> Result<DomainCount, EnomError> {
        let response = self
            .call(transport::GET_DOMAIN_COUNT_COMMAND, Params::new())
            .await?;
        Ok(transport::decode_domain_count_response(&response)?)
    }

    pub async fn get_tld_list(&self) -> Result<Vec<String>, EnomError> {
        let response = self
            .call(transport::GET_TLD_LIST_COMMAND, Params::new())
            .await?;
        Ok(transport::decode_tld_list_response(&response))
    }

    pub async fn get_tld_info(&self) -> Result<BTreeMap<String, TldInfo>, EnomError> {
        let response = self
            .call(transport::GET_TLD_INFO_COMMAND, Params::new())
            .await?;
        Ok(transport::decode_tld_info_response(&response))
    }

    pub async fn get_domain_pricing(
        &self,
        options: PricingOptions,
    ) -> Result<BTreeMap<String, TldPricing>, EnomError> {
        let response = self
            .call(
                transport::GET_DOMAIN_PRICING_COMMAND,
                transport::encode_domain_pricing_form(options),
            )
            .await?;
        Ok(transport::decode_domain_pricing_response(&response))
    }

    /// Current and available account balance.
    pub async fn get_balance(&self) -> Result<Balance, EnomError> {
        let response = self
            .call(transport::GET_BALANCE_COMMAND, Params::new())
            .await?;
        Ok(transport::decode_balance_response(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::super::tests::{FakeTransport, Reply, assert_param, make_client, ok_xml};
    use super::*;
    use crate::domain::{ContactRole, PurchaseStatus};

    fn domain() -> DomainName {
        DomainName::parse("example.com").unwrap()
    }

    fn failure(messages: &[&str]) -> String {
        let errors = messages
            .iter()
            .enumerate()
            .map(|(idx, message)| format!("<Err{}>{message}</Err{}>", idx + 1, idx + 1))
            .collect::<String>();
        format!(
            "<interface-response><ErrCount>{}</ErrCount><errors>{errors}</errors>\
             <Done>true</Done></interface-response>",
            messages.len()
        )
    }

    #[tokio::test]
    async fn check_single_and_many() {
        let transport = FakeTransport::replying([
            Reply::Http(200, ok_xml("<RRPCode>210</RRPCode>")),
            Reply::Http(
                200,
                ok_xml(
                    "<Domain1>example.com</Domain1><RRPCode1>211</RRPCode1>\
                     <Domain2>example.net</Domain2><RRPCode2>210</RRPCode2>",
                ),
            ),
        ]);
        let client = make_client(transport.clone());

        let single = client.check(["example.com"]).await.unwrap();
        assert_eq!(single, Availability::Single(true));

        let many = client.check(["example.com", "example.net"]).await.unwrap();
        assert_eq!(many.is_available("example.com"), Some(false));
        assert_eq!(many.is_available("example.net"), Some(true));

        let requests = transport.requests();
        assert_param(&requests[0].1, "command", "Check");
        assert_param(&requests[0].1, "SLD", "example");
        assert_param(&requests[1].1, "DomainList", "example.com,example.net");
    }

    #[tokio::test]
    async fn check_rejects_too_many_names_without_request() {
        let transport = FakeTransport::default();
        let client = make_client(transport.clone());
        let names = (0..31).map(|idx| format!("name{idx}.com")).collect::<Vec<_>>();
        let err = client.check(&names).await.unwrap_err();
        assert!(matches!(
            err,
            EnomError::Validation(ValidationError::TooManyNames {
                max: 30,
                actual: 31
            })
        ));
        let err = client.check(Vec::<String>::new()).await.unwrap_err();
        assert!(matches!(err, EnomError::Validation(ValidationError::Empty { .. })));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn purchase_maps_registry_codes() {
        let transport = FakeTransport::replying([
            Reply::Http(200, ok_xml("<RRPCode>200</RRPCode><OrderID>157614499</OrderID>")),
            Reply::Http(
                200,
                ok_xml(
                    "<RRPCode>1300</RRPCode><RRPText>Registry error</RRPText>\
                     <IsRealTimeTLD>True</IsRealTimeTLD>",
                ),
            ),
            Reply::Http(
                200,
                ok_xml("<RRPCode>541</RRPCode><RRPText>Invalid attribute</RRPText>"),
            ),
        ]);
        let client = make_client(transport.clone());
        let registrant = Contact::new("Jane", "Doe").unwrap();
        let nameservers = Nameservers::default();

        let registered = client
            .purchase(&domain(), &registrant, &nameservers, PurchaseOptions::default())
            .await
            .unwrap();
        assert_eq!(registered.result, PurchaseStatus::Registered);
        assert_eq!(registered.order_id.as_str(), "157614499");
        let params = transport.last_params();
        assert_param(&params, "NS1", "");
        assert_param(&params, "RegistrantFirstName", "Jane");

        let err = client
            .purchase(&domain(), &registrant, &nameservers, PurchaseOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.messages(), ["Registry error"]);

        let err = client
            .purchase(&domain(), &registrant, &nameservers, PurchaseOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EnomError::UnexpectedRrpCode { ref code, .. } if code == "541"
        ));
    }

    #[tokio::test]
    async fn nameless_registrant_is_rejected_without_request() {
        let transport = FakeTransport::default();
        let client = make_client(transport.clone());
        let blank = Contact::from_names_unchecked(String::new(), "Doe".to_owned())
            .with_city("Perth");

        let err = client
            .purchase(
                &domain(),
                &blank,
                &Nameservers::default(),
                PurchaseOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EnomError::Validation(ValidationError::Empty {
                field: Contact::FIRST_NAME_FIELD
            })
        ));

        let err = client
            .transfer_domain(&domain(), "s3cr3t", Some(&blank))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EnomError::Validation(ValidationError::Empty { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn delete_registration_sends_end_user_ip() {
        let transport = FakeTransport::ok(ok_xml("<DomainDeleted>True</DomainDeleted>"));
        let client = make_client(transport.clone());
        let outcome = client.delete_registration(&domain()).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_param(&transport.last_params(), "EndUserIP", "127.000.000.001");
    }

    #[tokio::test]
    async fn unlock_recovers_from_already_unlocked() {
        let transport = FakeTransport::replying([
            Reply::Http(200, failure(&["Domain is already unlocked"])),
            Reply::Http(200, failure(&["Domain is already unlocked"])),
        ]);
        let client = make_client(transport.clone());

        let status = client.set_reg_lock(&domain(), false).await.unwrap();
        assert_eq!(status.as_deref(), Some("Unlocked"));
        assert_param(&transport.last_params(), "UnlockRegistrar", "1");

        let err = client.set_reg_lock(&domain(), true).await.unwrap_err();
        assert_eq!(err.messages(), ["Domain is already unlocked"]);
    }

    #[tokio::test]
    async fn set_reg_lock_failed_reads_as_none() {
        let client = make_client(FakeTransport::ok(ok_xml(
            "<RegistrarLock>Failed</RegistrarLock>",
        )));
        assert_eq!(client.set_reg_lock(&domain(), true).await.unwrap(), None);
    }

    #[tokio::test]
    async fn status_domain_recovers_from_foreign_account() {
        let transport = FakeTransport::replying([
            Reply::Http(200, failure(&["The domain does not belong to this account"])),
            Reply::Http(200, failure(&["Invalid domain"])),
        ]);
        let client = make_client(transport.clone());

        let ownership = client
            .status_domain(&domain(), OrderType::Purchase)
            .await
            .unwrap();
        assert!(ownership.known);
        assert!(!ownership.in_account);
        assert_eq!(ownership.last_order_id, None);
        assert_param(&transport.last_params(), "OrderType", "Purchase");

        let err = client
            .status_domain(&domain(), OrderType::Purchase)
            .await
            .unwrap_err();
        assert_eq!(err.messages(), ["Invalid domain"]);
    }

    #[tokio::test]
    async fn synch_auth_info_incomplete_reads_as_false() {
        let incomplete =
            "<interface-response><ErrCount>0</ErrCount><Done>false</Done></interface-response>";
        let transport = FakeTransport::replying([
            Reply::Http(200, incomplete.to_owned()),
            Reply::Http(200, failure(&["Domain not found"])),
        ]);
        let client = make_client(transport.clone());

        assert!(!client.synch_auth_info(&domain(), false).await.unwrap());
        assert_param(&transport.last_params(), "EmailEPP", "False");

        let err = client.synch_auth_info(&domain(), false).await.unwrap_err();
        assert!(matches!(err, EnomError::Response { .. }));
    }

    #[tokio::test]
    async fn get_domain_exp_is_utc() {
        let client = make_client(FakeTransport::ok(ok_xml(
            "<ExpirationDate>4/12/2012 9:15:37 AM</ExpirationDate>\
             <TimeDifference>+08.00</TimeDifference>",
        )));
        let expires = client.get_domain_exp(&domain()).await.unwrap();
        assert_eq!(expires, Utc.with_ymd_and_hms(2012, 4, 12, 1, 15, 37).unwrap());
    }

    #[tokio::test]
    async fn get_contacts_by_role() {
        let client = make_client(FakeTransport::ok(ok_xml(
            "<GetContacts><Billing><BillingFirstName>Bill</BillingFirstName>\
             <BillingLastName>Payer</BillingLastName></Billing></GetContacts>",
        )));
        let contacts = client.get_contacts(&domain()).await.unwrap();
        assert_eq!(
            contacts.get(ContactRole::Billing).map(Contact::first_name),
            Some("Bill")
        );
        assert_eq!(contacts.registrant, None);
    }

    #[tokio::test]
    async fn transfer_domain_validates_auth_code() {
        let transport = FakeTransport::ok(ok_xml(
            "<transferorder><transferorderid>175614</transferorderid></transferorder>",
        ));
        let client = make_client(transport.clone());

        let err = client.transfer_domain(&domain(), " ", None).await.unwrap_err();
        assert!(matches!(
            err,
            EnomError::Validation(ValidationError::Empty { field: "AuthInfo1" })
        ));
        assert!(transport.requests().is_empty());

        let id = client
            .transfer_domain(&domain(), "s3cr3t", None)
            .await
            .unwrap();
        assert_eq!(id, "175614");
        assert_param(&transport.last_params(), "command", "TP_CreateOrder");
    }

    #[tokio::test]
    async fn nameserver_operations() {
        let transport = FakeTransport::replying([
            Reply::Http(200, ok_xml("")),
            Reply::Http(200, ok_xml("<RRPCode>200</RRPCode>")),
            Reply::Http(200, ok_xml("<RRPCode>200</RRPCode><dns>ns1.example.net</dns>")),
        ]);
        let client = make_client(transport.clone());

        client
            .register_nameserver("ns1.example.com", Ipv4Addr::new(192, 0, 2, 1))
            .await
            .unwrap();
        assert_param(&transport.last_params(), "IP", "192.0.2.1");

        let hosts = Nameservers::new(["ns1.example.net"]).unwrap();
        assert!(client.modify_ns(&domain(), &hosts).await.unwrap());
        assert_param(&transport.last_params(), "NS1", "ns1.example.net");

        assert_eq!(
            client.get_dns(&domain()).await.unwrap(),
            Some(vec!["ns1.example.net".to_owned()])
        );
    }

    #[tokio::test]
    async fn get_domain_status_sends_order_scope() {
        let transport = FakeTransport::ok(ok_xml(
            "<DomainStatus><InAccount>1</InAccount><StatusDesc>Registered</StatusDesc>\
             </DomainStatus>",
        ));
        let client = make_client(transport.clone());
        let status = client
            .get_domain_status(
                &domain(),
                Some((OrderId::new("157").unwrap(), OrderType::Extend)),
            )
            .await
            .unwrap();
        assert_eq!(status.description, "Registered");
        let params = transport.last_params();
        assert_param(&params, "OrderID", "157");
        assert_param(&params, "OrderType", "Extend");
    }

    #[tokio::test]
    async fn get_balance_strips_separators() {
        let transport = FakeTransport::ok(ok_xml(
            "<Balance>1,234.56</Balance><AvailableBalance>1,000.00</AvailableBalance>",
        ));
        let client = make_client(transport.clone());
        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance.balance, 1234.56);
        assert_eq!(balance.available, 1000.0);
        assert_param(&transport.last_params(), "command", "GetBalance");
    }

    #[tokio::test]
    async fn get_order_list_defaults_start() {
        let transport = FakeTransport::ok(ok_xml(
            "<OrderList><OrderDetail><OrderID>1</OrderID><StatusDesc>Done</StatusDesc>\
             </OrderDetail></OrderList>",
        ));
        let client = make_client(transport.clone());
        let orders = client
            .get_order_list(OrderListOptions::default())
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_param(&transport.last_params(), "Start", "1");
    }
}
