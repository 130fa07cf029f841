use thiserror::Error;

/// Domain-level failures raised by the CQRS service map.
///
/// These are configuration and business-rule failures, as opposed to
/// transport or infrastructure faults. Variants carry no payload and each
/// one maps to a single fixed message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DomainError {
    /// A DTO validator named in configuration is not registered with the
    /// service map.
    #[error("The configured DTO validator is not available")]
    ConfiguredDtoValidatorNotAvailable,
}

impl DomainError {
    /// Message of `ConfiguredDtoValidatorNotAvailable`, usable without an instance
    pub const CONFIGURED_DTO_VALIDATOR_NOT_AVAILABLE: &'static str =
        "The configured DTO validator is not available";

    /// Fixed human-readable message for this error
    pub fn message(&self) -> &'static str {
        match self {
            DomainError::ConfiguredDtoValidatorNotAvailable => {
                Self::CONFIGURED_DTO_VALIDATOR_NOT_AVAILABLE
            }
        }
    }

    /// Stable machine-readable code, used in logs and error bodies
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::ConfiguredDtoValidatorNotAvailable => {
                "configured_dto_validator_not_available"
            }
        }
    }
}
