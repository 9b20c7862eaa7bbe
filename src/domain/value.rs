use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::validation::ValidationError;

/// Wire format for date-typed request values.
pub const WIRE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Maximum number of nameservers the registrar accepts per domain.
pub const MAX_NAMESERVERS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// eNom reseller account login id (`uid`).
///
/// Invariant: non-empty after trimming.
pub struct AccountId(String);

impl AccountId {
    /// Form field name used by eNom (`uid`).
    pub const FIELD: &'static str = "uid";

    /// Create a validated [`AccountId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated login id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// eNom reseller account password (`pw`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by eNom (`pw`).
    pub const FIELD: &'static str = "pw";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// A domain name split into its second-level label (`SLD`) and the
/// top-level remainder (`TLD`).
///
/// The split happens on the first dot only, so `sub.example.co.uk` yields
/// `sub` / `example.co.uk`.
pub struct DomainName {
    sld: String,
    tld: String,
}

impl DomainName {
    /// Form field name for the second-level label.
    pub const SLD_FIELD: &'static str = "SLD";
    /// Form field name for the top-level remainder.
    pub const TLD_FIELD: &'static str = "TLD";

    /// Parse and split a domain name. Surrounding whitespace is ignored.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        match trimmed.split_once('.') {
            Some((sld, tld)) if !sld.is_empty() && !tld.is_empty() => Ok(Self {
                sld: sld.to_owned(),
                tld: tld.to_owned(),
            }),
            _ => Err(ValidationError::InvalidDomain {
                input: trimmed.to_owned(),
            }),
        }
    }

    pub fn sld(&self) -> &str {
        &self.sld
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

impl FromStr for DomainName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Nameserver host names for a domain (`NS1..NS12`).
///
/// Invariant: at most [`MAX_NAMESERVERS`] entries. An empty list is allowed and
/// is sent as a blank `NS1`.
pub struct Nameservers(Vec<String>);

impl Nameservers {
    pub fn new<I, S>(hosts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hosts = hosts
            .into_iter()
            .map(|host| host.into().trim().to_owned())
            .collect::<Vec<_>>();
        if hosts.len() > MAX_NAMESERVERS {
            return Err(ValidationError::TooManyNameservers {
                max: MAX_NAMESERVERS,
                actual: hosts.len(),
            });
        }
        Ok(Self(hosts))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Registrar order identifier (`OrderID`).
pub struct OrderId(String);

impl OrderId {
    /// Form field name used by eNom (`OrderID`).
    pub const FIELD: &'static str = "OrderID";

    /// Create a validated [`OrderId`]. Invariant: non-empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Kind of order a status query refers to (`OrderType`).
pub enum OrderType {
    Purchase,
    Transfer,
    Extend,
}

impl OrderType {
    pub const FIELD: &'static str = "OrderType";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "Purchase",
            Self::Transfer => "Transfer",
            Self::Extend => "Extend",
        }
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "purchase" => Ok(Self::Purchase),
            "transfer" => Ok(Self::Transfer),
            "extend" => Ok(Self::Extend),
            _ => Err(ValidationError::InvalidOrderType {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A scalar request value. Every variant is rendered to a string before it
/// goes on the wire.
pub enum ParamValue {
    Text(String),
    Integer(i64),
    /// Rendered as `1` / `0`.
    Bool(bool),
    /// Rendered as `MM/DD/YYYY`.
    Date(NaiveDate),
}

impl ParamValue {
    pub fn to_wire(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Bool(value) => (if *value { "1" } else { "0" }).to_owned(),
            Self::Date(value) => value.format(WIRE_DATE_FORMAT).to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Field name → value mapping sent with a command.
///
/// Inserting a key that is already present replaces its value, so every key
/// appears at most once.
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    /// Consuming variant of [`Params::insert`] for building params inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert every field of `other`, replacing fields already present.
    pub fn extend(&mut self, other: Params) -> &mut Self {
        for (key, value) in other.0 {
            self.insert(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render every value to its wire string, keeping insertion order.
    pub fn to_wire(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.to_wire()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
