pub mod classify;
pub mod error;
pub mod report;

pub use classify::{find_domain_error, is_domain_error, ErrorClass};
pub use error::DomainError;
pub use report::{report, ErrorReport};
