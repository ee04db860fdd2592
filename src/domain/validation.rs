use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    ApiKeyTooShort { min: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::ApiKeyTooShort { min, actual } => {
                write!(
                    f,
                    "API key is too short: {actual} characters (expected at least {min})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
