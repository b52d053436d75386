// src/domain/zipcode.rs
use crate::domain::errors::{DomainResult, ServiceError};
use std::fmt;

pub const ZIPCODE_LENGTH: usize = 8;
const PREFIX_LENGTH: usize = 5;

/// Accepts exactly eight ASCII digits. Nothing is normalised: a hyphenated
/// or padded input is rejected rather than cleaned up.
pub fn validate(raw: &str) -> DomainResult<()> {
    if raw.len() != ZIPCODE_LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::InvalidZipcode);
    }
    Ok(())
}

/// Inserts the hyphen after the fifth digit (`26140040` -> `26140-040`).
/// Inputs that are not eight bytes long are returned untouched.
pub fn format_zipcode(raw: &str) -> String {
    if raw.len() != ZIPCODE_LENGTH {
        return raw.to_string();
    }
    match (raw.get(..PREFIX_LENGTH), raw.get(PREFIX_LENGTH..)) {
        (Some(prefix), Some(suffix)) => format!("{prefix}-{suffix}"),
        _ => raw.to_string(),
    }
}

/// A validated Brazilian postal code (CEP).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zipcode(String);

impl Zipcode {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        validate(&raw)?;
        Ok(Self(raw))
    }

    pub fn hyphenated(&self) -> String {
        format_zipcode(&self.0)
    }
}

impl fmt::Display for Zipcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
