use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::model::SignInResponse;
use log::warn;

/// Shown for every rejected sign-in; backend detail is never surfaced.
pub const SIGN_IN_FAILED: &str = "Sign-in failed. Check credentials.";

pub const DEFAULT_EMAIL: &str = "alice@example.org";
pub const DEFAULT_PASSWORD: &str = "alice-pass";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignInPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    phase: SignInPhase,
    error: String,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.into(),
            password: DEFAULT_PASSWORD.into(),
            phase: SignInPhase::Idle,
            error: String::new(),
        }
    }
}

impl SignInForm {
    pub fn phase(&self) -> SignInPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SignInPhase::Submitting
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// Moves to `Submitting`. `None` while a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        self.phase = SignInPhase::Submitting;
        self.error.clear();
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Settles a submit. The caller installs the token and user from an
    /// `Ok` result into its session.
    pub fn finish(&mut self, result: &Result<SignInResponse, ApiError>) {
        if let Err(err) = result {
            match err.status() {
                Some(status) => warn!("sign-in rejected with status {status}"),
                None => warn!("sign-in request failed"),
            }
            self.error = SIGN_IN_FAILED.into();
        }
        self.phase = SignInPhase::Idle;
    }
}

impl Credentials {
    pub async fn sign_in<T: Transport>(
        &self,
        client: &ApiClient<T>,
    ) -> Result<SignInResponse, ApiError> {
        client.sign_in(&self.email, &self.password).await
    }
}
