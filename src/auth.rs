//! The login gate
//!
//! This is a plain comparison with a fixed pair of credentials (see [`config`](crate::config)), not a security mechanism.
//! There is no session, and tasks are not tied to any user.

use crate::config::{LOGIN_PASSWORD, LOGIN_USERNAME};

/// Returns whether these credentials open the task list
pub fn check_credentials(username: &str, password: &str) -> bool {
    let granted = username == crate::config::read(&LOGIN_USERNAME)
        && password == crate::config::read(&LOGIN_PASSWORD);
    if granted == false {
        log::info!("Invalid credentials for user {:?}", username);
    }
    granted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_credentials() {
        assert!(check_credentials("admin", "1234"));
        assert!(check_credentials("admin", "12345") == false);
        assert!(check_credentials("Admin", "1234") == false);
        assert!(check_credentials("", "") == false);
    }
}
