use std::fmt;

#[derive(Debug)]
pub enum OmniflowError {
    /// The backend could not be reached (connect failure, timeout, broken body).
    Transport(String),
    /// The backend answered with a non-2xx status or an unusable body.
    Backend {
        status: u16,
        message: String,
    },
    InvalidIdentifier(String),
    MalformedPayload(String),
    InvalidTemperature(f32),
    Config(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl OmniflowError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OmniflowError::Backend { status: 404, .. })
    }
}

impl fmt::Display for OmniflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmniflowError::Transport(msg) => write!(f, "Transport error: {}", msg),
            OmniflowError::Backend { status, message } => {
                write!(f, "Backend error (status {}): {}", status, message)
            }
            OmniflowError::InvalidIdentifier(id) => write!(
                f,
                "Invalid user id '{}': use 3-64 letters, digits, '.', '_' or '-'",
                id
            ),
            OmniflowError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            OmniflowError::InvalidTemperature(value) => {
                write!(f, "Invalid temperature {}: must be between 0.0 and 2.0", value)
            }
            OmniflowError::Config(msg) => write!(f, "Configuration error: {}", msg),
            OmniflowError::Io(e) => write!(f, "IO error: {}", e),
            OmniflowError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for OmniflowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OmniflowError::Io(e) => Some(e),
            OmniflowError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OmniflowError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OmniflowError::Transport(format!("request timed out: {}", err))
        } else {
            OmniflowError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for OmniflowError {
    fn from(err: std::io::Error) -> Self {
        OmniflowError::Io(err)
    }
}

impl From<serde_json::Error> for OmniflowError {
    fn from(err: serde_json::Error) -> Self {
        OmniflowError::Json(err)
    }
}

impl From<serde_yaml::Error> for OmniflowError {
    fn from(err: serde_yaml::Error) -> Self {
        OmniflowError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OmniflowError>;
