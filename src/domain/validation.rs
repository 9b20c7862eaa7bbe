use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooManyNames { max: usize, actual: usize },
    TooManyNameservers { max: usize, actual: usize },
    InvalidDomain { input: String },
    InvalidOrderBy { input: String },
    InvalidOrderType { input: String },
    InvalidAttempts { actual: u32 },
    InvalidEndpoint { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooManyNames { max, actual } => {
                write!(f, "too many domain names: {actual} (max {max})")
            }
            Self::TooManyNameservers { max, actual } => {
                write!(f, "too many nameservers: {actual} (max {max})")
            }
            Self::InvalidDomain { input } => write!(f, "invalid domain name: {input}"),
            Self::InvalidOrderBy { input } => write!(
                f,
                "invalid order by value: {input} (expected sld, tld, nsstatus, expdate or renew)"
            ),
            Self::InvalidOrderType { input } => write!(
                f,
                "invalid order type: {input} (expected purchase, transfer or extend)"
            ),
            Self::InvalidAttempts { actual } => {
                write!(f, "attempt budget must be at least 1 (got {actual})")
            }
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
