use crate::domain::validation::ValidationError;

/// Job title sent with an organisation contact when none is set.
pub const DEFAULT_JOB_TITLE: &str = "Domains Manager";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Role a contact plays on a registration. The wire prefix of each role is its
/// name, e.g. `AuxBillingFirstName`.
pub enum ContactRole {
    Registrant,
    AuxBilling,
    Tech,
    Admin,
    Billing,
}

impl ContactRole {
    /// Probe order used when detecting which role a wire fragment belongs to.
    pub const ALL: [ContactRole; 5] = [
        ContactRole::Registrant,
        ContactRole::AuxBilling,
        ContactRole::Tech,
        ContactRole::Admin,
        ContactRole::Billing,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Registrant => "Registrant",
            Self::AuxBilling => "AuxBilling",
            Self::Tech => "Tech",
            Self::Admin => "Admin",
            Self::Billing => "Billing",
        }
    }

    /// Map the `ContactType` attribute used by WHOIS reads onto a role.
    pub fn from_whois_type(value: &str) -> Option<Self> {
        match value.trim() {
            "Registrant" => Some(Self::Registrant),
            "Administrative" => Some(Self::Admin),
            "Technical" => Some(Self::Tech),
            "Billing" => Some(Self::Billing),
            "AuxBilling" => Some(Self::AuxBilling),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A registrant or any other contact attached to a registration.
///
/// Build one with [`Contact::new`], which enforces non-empty first and last
/// names, then fill in the optional fields. Contacts decoded from responses may
/// carry blank names when the registrar has nothing stored for a role; check
/// [`Contact::has_name`] before relying on one.
pub struct Contact {
    first_name: String,
    last_name: String,
    pub organisation: Option<String>,
    pub job_title: Option<String>,
    /// One or two lines separated by `\n`.
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub phone_extension: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    /// Registrar-side identifier of the contact in its role (`{Role}PartyID`).
    pub party_id: Option<String>,
}

impl Contact {
    pub const FIRST_NAME_FIELD: &'static str = "FirstName";
    pub const LAST_NAME_FIELD: &'static str = "LastName";

    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let contact = Self::from_names_unchecked(first_name.into(), last_name.into());
        contact.ensure_named()?;
        Ok(contact)
    }

    /// Decoder entry point: names may be blank here.
    pub(crate) fn from_names_unchecked(first_name: String, last_name: String) -> Self {
        Self {
            first_name,
            last_name,
            organisation: None,
            job_title: None,
            address: None,
            city: None,
            state: None,
            postal_code: None,
            country: None,
            phone: None,
            phone_extension: None,
            fax: None,
            email: None,
            party_id: None,
        }
    }

    /// Both names must be non-blank before a contact is sent.
    pub(crate) fn ensure_named(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::FIRST_NAME_FIELD,
            });
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::LAST_NAME_FIELD,
            });
        }
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn has_name(&self) -> bool {
        !self.first_name.trim().is_empty() || !self.last_name.trim().is_empty()
    }

    pub fn with_organisation(mut self, organisation: impl Into<String>) -> Self {
        self.organisation = Some(organisation.into());
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_phone_extension(mut self, phone_extension: impl Into<String>) -> Self {
        self.phone_extension = Some(phone_extension.into());
        self
    }

    pub fn with_fax(mut self, fax: impl Into<String>) -> Self {
        self.fax = Some(fax.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
