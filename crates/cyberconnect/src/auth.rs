use crate::feed::UserRole;

/// The single shared demo credential checked by every login form.
pub const SHARED_USERNAME: &str = "1";
pub const SHARED_PASSWORD: &str = "1";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Checks the shared credential and grants the requested role. There is
/// no session behind this: the server keeps nothing, the client holds
/// the granted role as a local flag.
pub fn authenticate(username: &str, password: &str, requested_role: UserRole) -> Result<UserRole, AuthError> {
    if username == SHARED_USERNAME && password == SHARED_PASSWORD {
        Ok(requested_role)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
