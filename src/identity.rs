use crate::api::response::extract_message;
use crate::api::{BackendClient, CreateUserRequest, Endpoint};
use crate::error::{OmniflowError, Result};
use crate::session::Session;

pub const MIN_USER_ID_LEN: usize = 3;
pub const MAX_USER_ID_LEN: usize = 64;

/// True iff `candidate` is 3-64 chars of ASCII letters, digits, `.`, `_` or `-`.
pub fn validate(candidate: &str) -> bool {
    let len = candidate.chars().count();
    (MIN_USER_ID_LEN..=MAX_USER_ID_LEN).contains(&len)
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Result of asking the backend to provision default resources for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provisioning {
    Skipped,
    Created { message: Option<String> },
    /// The backend has no `create_user` route (HTTP 404).
    Unsupported,
    Failed { message: String },
}

impl Provisioning {
    pub fn warning(&self) -> Option<String> {
        match self {
            Provisioning::Skipped | Provisioning::Created { .. } => None,
            Provisioning::Unsupported => Some(
                "Backend does not support user provisioning; user was added locally only"
                    .to_string(),
            ),
            Provisioning::Failed { message } => Some(format!(
                "Could not provision default resources ({}); user was added locally only",
                message
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capability {
    #[default]
    Unknown,
    Supported,
    Unsupported,
}

pub struct IdentityManager<'a> {
    client: &'a BackendClient,
    provisioning: Capability,
}

impl<'a> IdentityManager<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self {
            client,
            provisioning: Capability::Unknown,
        }
    }

    pub fn provisioning_capability(&self) -> Capability {
        self.provisioning
    }

    pub fn validate(&self, candidate: &str) -> bool {
        validate(candidate)
    }

    /// Make `candidate` the active user. The previous user stays active on error.
    pub fn set_current(&self, session: &mut Session, candidate: &str) -> Result<()> {
        if !validate(candidate) {
            return Err(OmniflowError::InvalidIdentifier(candidate.to_string()));
        }

        session.activate_user(candidate);
        tracing::info!(user_id = candidate, "active user changed");
        Ok(())
    }

    /// Register `candidate` locally and optionally provision it on the backend.
    /// Local registration succeeds whatever the backend answers.
    pub async fn create_user(
        &mut self,
        session: &mut Session,
        candidate: &str,
        provision_defaults: bool,
    ) -> Result<Provisioning> {
        if !validate(candidate) {
            return Err(OmniflowError::InvalidIdentifier(candidate.to_string()));
        }

        if session.register_user(candidate) {
            tracing::info!(user_id = candidate, "user registered");
        }

        if !provision_defaults {
            return Ok(Provisioning::Skipped);
        }

        if self.provisioning == Capability::Unsupported {
            return Ok(Provisioning::Unsupported);
        }

        let request = CreateUserRequest {
            user_id: candidate.to_string(),
        };
        let payload = serde_json::to_value(&request)?;
        let timed = self
            .client
            .call_endpoint(session.current_user(), Endpoint::CreateUser, Some(&payload))
            .await;

        let outcome = match timed.value {
            Ok(body) => {
                self.provisioning = Capability::Supported;
                Provisioning::Created {
                    message: extract_message(&body),
                }
            }
            Err(e) if e.is_not_found() => {
                self.provisioning = Capability::Unsupported;
                Provisioning::Unsupported
            }
            Err(e) => Provisioning::Failed {
                message: e.to_string(),
            },
        };

        match outcome.warning() {
            Some(warning) => tracing::warn!(user_id = candidate, "{}", warning),
            None => tracing::info!(user_id = candidate, "user provisioning finished"),
        }

        Ok(outcome)
    }
}
