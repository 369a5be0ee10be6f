//! One-time login codes for staff users.
//!
//! Staff members sign in by redeeming a code issued for them, either at startup for the
//! bootstrap admin or by an admin through the API. Codes live in memory only, expire
//! after the configured TTL and are consumed on first successful use.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Length of generated login codes.
const CODE_LENGTH: usize = 32;

/// Issued code waiting to be redeemed.
#[derive(Clone)]
struct PendingLogin {
    /// Staff user the code signs in as.
    user_id: i32,
    expires_at: Instant,
}

impl PendingLogin {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Service for issuing and redeeming one-time staff login codes.
///
/// Cloning is cheap; all clones share the same code store.
#[derive(Clone)]
pub struct LoginCodeService {
    codes: Arc<RwLock<HashMap<String, PendingLogin>>>,
    ttl: Duration,
}

impl LoginCodeService {
    /// Creates a new LoginCodeService with no issued codes.
    ///
    /// # Arguments
    /// - `ttl` - How long an issued code stays redeemable
    pub fn new(ttl: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a new code for a staff user.
    ///
    /// Expired codes are pruned on every call. Earlier codes of the same user stay valid
    /// until they expire or are redeemed.
    ///
    /// # Returns
    /// - `String` - The generated 32-character alphanumeric code
    pub async fn issue(&self, user_id: i32) -> String {
        let code = Self::generate_random_code();
        let mut codes = self.codes.write().await;

        codes.retain(|_, pending| !pending.is_expired());
        codes.insert(
            code.clone(),
            PendingLogin {
                user_id,
                expires_at: Instant::now() + self.ttl,
            },
        );

        code
    }

    /// Redeems a code, consuming it.
    ///
    /// # Returns
    /// - `Some(user_id)` - The code was issued and has not expired
    /// - `None` - The code is unknown, already used or expired
    pub async fn redeem(&self, code: &str) -> Option<i32> {
        let pending = self.codes.write().await.remove(code)?;

        if pending.is_expired() {
            return None;
        }

        Some(pending.user_id)
    }

    /// Removes every code issued for a user.
    ///
    /// Called when a staff user is deleted so that outstanding codes cannot sign in as
    /// a user that no longer exists.
    pub async fn revoke_for_user(&self, user_id: i32) {
        self.codes
            .write()
            .await
            .retain(|_, pending| pending.user_id != user_id);
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    #[cfg(test)]
    pub async fn pending_count(&self) -> usize {
        self.codes.read().await.len()
    }
}
