use crate::models::domain::Profile;

/// Explicit per-user context handed into services that need to know who is
/// acting. Built on sign-in (or per request from the profile repository) and
/// dropped on sign-out; there is no process-wide current-user state.
#[derive(Clone, Debug)]
pub struct SessionContext {
    pub user_id: String,
    pub profile: Option<Profile>,
}

impl SessionContext {
    pub fn sign_in(user_id: &str, profile: Option<Profile>) -> Self {
        Self {
            user_id: user_id.to_string(),
            profile,
        }
    }
}
