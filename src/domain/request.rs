use chrono::NaiveDate;

use crate::domain::validation::ValidationError;
use crate::domain::value::{DomainName, Params};

pub const CHECK_MAX_NAMES: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Availability check for 1..=[`CHECK_MAX_NAMES`] domain names.
pub enum CheckDomains {
    One(DomainName),
    Many(Vec<DomainName>),
}

impl CheckDomains {
    pub const FIELD: &'static str = "DomainList";

    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = names
            .into_iter()
            .map(DomainName::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if names.len() > CHECK_MAX_NAMES {
            return Err(ValidationError::TooManyNames {
                max: CHECK_MAX_NAMES,
                actual: names.len(),
            });
        }
        match names.len() {
            0 => Err(ValidationError::Empty { field: Self::FIELD }),
            1 => Ok(Self::One(names.remove(0))),
            _ => Ok(Self::Many(names)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseOptions {
    /// Registration period in years (`NumYears`).
    pub period: Option<u32>,
    /// Additional fields, e.g. TLD extended attributes.
    pub extra: Params,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendOptions {
    /// Additional fields sent with the renewal command.
    pub extra: Params,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListOptions {
    /// Starting offset in the order list; the registrar starts at 1.
    pub start: Option<u32>,
    /// Earliest order date; the registrar defaults to six months back.
    pub begin: Option<NaiveDate>,
    /// Latest order date; the registrar defaults to today.
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingOptions {
    /// Use quantity-engine pricing (`UseQtyEngine`).
    pub quantities: bool,
    /// Price for this many years (`Years`); ignored when zero.
    pub years: Option<u32>,
}
