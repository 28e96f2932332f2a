/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use md5::{Digest, Md5};
use tracing::trace;

/// Returns the lowercase hexadecimal MD5 digest of `input`
#[must_use]
pub fn md5_hex(input: &str) -> String {
    let digest = Md5::digest(input.as_bytes());
    format!("{digest:x}")
}

/// Builds the `authenticate` token sent to the paste API
///
/// The token has the shape `username:md5hex(password)`. The password hash is
/// memoized and only recomputed when a different password is supplied.
#[derive(Clone, Default)]
pub struct CredentialComposer {
    cached_for: Option<String>,
    cached_hash: String,
    hash_count: u64,
}

impl CredentialComposer {
    /// Creates a composer with an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composes the authentication token
    ///
    /// # Arguments
    /// * `username` - Account name
    /// * `password` - Plain-text account password
    ///
    /// # Returns
    /// `"{username}:{md5hex(password)}"`, or an empty string when either
    /// argument is empty (no authentication is attached in that case).
    pub fn compose(&mut self, username: &str, password: &str) -> String {
        if username.is_empty() || password.is_empty() {
            return String::new();
        }

        if self.cached_for.as_deref() != Some(password) {
            trace!("Password changed, recomputing hash");
            self.cached_hash = md5_hex(password);
            self.cached_for = Some(password.to_string());
            self.hash_count += 1;
        }

        format!("{}:{}", username, self.cached_hash)
    }

    /// Number of times the password hash has actually been computed
    #[must_use]
    pub fn hash_count(&self) -> u64 {
        self.hash_count
    }

    /// Drops the memoized hash
    pub fn invalidate(&mut self) {
        self.cached_for = None;
        self.cached_hash.clear();
    }
}

impl std::fmt::Debug for CredentialComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialComposer")
            .field("cached", &self.cached_for.is_some())
            .field("hash_count", &self.hash_count)
            .finish()
    }
}
