use std::error::Error;
use std::io;

use serde::Serialize;

use crate::DomainError;

/// Broad failure class used by error boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    Domain,
    Infrastructure,
}

impl ErrorClass {
    /// Classify an error by looking for a `DomainError` anywhere in its source chain
    pub fn of(err: &(dyn Error + 'static)) -> Self {
        if is_domain_error(err) {
            ErrorClass::Domain
        } else {
            ErrorClass::Infrastructure
        }
    }

    /// Wire tag, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Domain => "domain",
            ErrorClass::Infrastructure => "infrastructure",
        }
    }
}

/// Find the first `DomainError` in `err` or its sources.
///
/// Feature errors usually wrap `DomainError` with `#[from]`, so the domain
/// error is often one or more levels down the chain. An `io::Error` reports
/// its custom payload's source rather than the payload, so the payload is
/// visited explicitly.
pub fn find_domain_error<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a DomainError> {
    let mut current: Option<&'a (dyn Error + 'static)> = Some(err);

    while let Some(e) = current {
        if let Some(domain) = e.downcast_ref::<DomainError>() {
            return Some(domain);
        }

        current = match e.downcast_ref::<io::Error>().and_then(|inner| inner.get_ref()) {
            Some(payload) => Some(payload as &(dyn Error + 'static)),
            None => e.source(),
        };
    }

    None
}

/// Check whether `err` is, or wraps, a domain error
pub fn is_domain_error(err: &(dyn Error + 'static)) -> bool {
    find_domain_error(err).is_some()
}
