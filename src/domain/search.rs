use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;
use crate::domain::value::{ParamValue, Params};

/// Command name of the advanced domain search.
pub const SEARCH_COMMAND: &str = "advanceddomainsearch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Sort column accepted by the advanced domain search (`orderby`).
pub enum OrderBy {
    Sld,
    Tld,
    NsStatus,
    ExpDate,
    Renew,
}

impl OrderBy {
    pub const FIELD: &'static str = "orderby";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sld => "sld",
            Self::Tld => "tld",
            Self::NsStatus => "nsstatus",
            Self::ExpDate => "expdate",
            Self::Renew => "renew",
        }
    }
}

impl FromStr for OrderBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sld" => Ok(Self::Sld),
            "tld" => Ok(Self::Tld),
            "nsstatus" => Ok(Self::NsStatus),
            "expdate" => Ok(Self::ExpDate),
            "renew" => Ok(Self::Renew),
            _ => Err(ValidationError::InvalidOrderBy {
                input: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Builder for the advanced domain search payload.
///
/// ```rust
/// use enom::SearchQuery;
///
/// let mut query = SearchQuery::new();
/// query
///     .order_by("expdate")?
///     .limit_from(10, 25)
///     .filter([("tld", "com")]);
///
/// let params = query.to_wire_params();
/// assert_eq!(params.get("orderby").map(|v| v.to_wire()), Some("expdate".to_owned()));
/// # Ok::<(), enom::ValidationError>(())
/// ```
pub struct SearchQuery {
    order_by: Option<OrderBy>,
    start_position: Option<u32>,
    records_to_return: Option<u32>,
    conditions: Params,
}

impl SearchQuery {
    pub const RECORDS_FIELD: &'static str = "recordstoreturn";
    pub const START_FIELD: &'static str = "startposition";
    pub const COMMAND_FIELD: &'static str = "command";
    pub const RESPONSE_TYPE_FIELD: &'static str = "responsetype";

    pub fn new() -> Self {
        Self::default()
    }

    /// Order results by one of `sld`, `tld`, `nsstatus`, `expdate` or `renew`.
    pub fn order_by(&mut self, field: impl AsRef<str>) -> Result<&mut Self, ValidationError> {
        self.order_by = Some(field.as_ref().parse()?);
        Ok(self)
    }

    /// Return at most `count` records.
    pub fn limit(&mut self, count: u32) -> &mut Self {
        self.records_to_return = Some(count);
        self
    }

    /// Return at most `count` records starting at position `start`.
    pub fn limit_from(&mut self, start: u32, count: u32) -> &mut Self {
        self.start_position = Some(start);
        self.records_to_return = Some(count);
        self
    }

    /// Merge filter conditions. Later values replace earlier ones for the same
    /// field; `command` and `responsetype` (in any case) can never be
    /// overridden.
    pub fn filter<I, K, V>(&mut self, conditions: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (key, value) in conditions {
            self.conditions.insert(key, value);
        }
        self
    }

    /// Freeze the query into the flat POST payload. Date values are rendered as
    /// `MM/DD/YYYY` when the payload goes on the wire.
    pub fn to_wire_params(&self) -> Params {
        let mut params = self
            .conditions
            .iter()
            .filter(|(key, _)| {
                !key.eq_ignore_ascii_case(Self::COMMAND_FIELD)
                    && !key.eq_ignore_ascii_case(Self::RESPONSE_TYPE_FIELD)
            })
            .map(|(key, value)| (key, value.clone()))
            .collect::<Params>();
        if let Some(order_by) = self.order_by {
            params.insert(OrderBy::FIELD, order_by.as_str());
        }
        if let Some(records) = self.records_to_return {
            params.insert(Self::RECORDS_FIELD, records);
        }
        if let Some(start) = self.start_position {
            params.insert(Self::START_FIELD, start);
        }
        params.insert(Self::RESPONSE_TYPE_FIELD, "xml");
        params.insert(Self::COMMAND_FIELD, SEARCH_COMMAND);
        params
    }
}
