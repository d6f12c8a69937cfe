use crate::section::Section;
use crate::unit::Service;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("service name cannot be empty")]
    EmptyName,
    #[error("service name '{0}' cannot start with '.' or contain '/' or whitespace")]
    InvalidName(String),
    #[error("[{section}] {key} contains a line break")]
    LineBreak {
        section: &'static str,
        key: &'static str,
    },
}

fn check_section<S: Section>(section: &S) -> Result<(), ValidationError> {
    for field in S::FIELDS {
        if let Some(value) = (field.value)(section) {
            if value.contains(['\n', '\r']) {
                return Err(ValidationError::LineBreak {
                    section: S::HEADER,
                    key: field.key,
                });
            }
        }
    }
    Ok(())
}

/// Checks that the service renders to a well-formed unit file.
pub fn validate(service: &Service) -> Result<(), ValidationError> {
    let stem = service.name.strip_suffix(".service").unwrap_or(&service.name);
    if stem.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if stem.starts_with('.') || stem.chars().any(|c| c == '/' || c.is_whitespace()) {
        return Err(ValidationError::InvalidName(service.name.clone()));
    }
    check_section(&service.unit)?;
    check_section(&service.service)?;
    check_section(&service.install)?;
    Ok(())
}
