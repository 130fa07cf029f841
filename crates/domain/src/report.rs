use std::error::Error;

use serde::Serialize;
use tracing::{error, warn};

use crate::classify::{find_domain_error, ErrorClass};

/// Code reported for anything that is not a domain error
pub const INTERNAL_CODE: &str = "internal";

/// Serializable description of a surfaced error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub class: ErrorClass,
    pub code: &'static str,
    pub message: String,
}

impl ErrorReport {
    /// Build a report without logging.
    ///
    /// Domain errors keep their own message even if an outer layer wrapped
    /// them with a prefix.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        match find_domain_error(err) {
            Some(domain) => ErrorReport {
                class: ErrorClass::Domain,
                code: domain.code(),
                message: domain.message().to_string(),
            },
            None => ErrorReport {
                class: ErrorClass::Infrastructure,
                code: INTERNAL_CODE,
                message: err.to_string(),
            },
        }
    }
}

/// Build a report for `err` and log it.
///
/// Nothing is retried here. A domain error such as a missing configured
/// validator only goes away with a configuration change.
pub fn report(err: &(dyn Error + 'static)) -> ErrorReport {
    let report = ErrorReport::from_error(err);

    match report.class {
        ErrorClass::Domain => {
            warn!(code = report.code, error = %err, "Domain error surfaced");
        }
        ErrorClass::Infrastructure => {
            error!(code = report.code, error = %err, "Infrastructure error surfaced");
        }
    }

    report
}
