//! Balances sub-client: cached wallet aggregation.

use crate::client::BackofficeClient;
use crate::domain::balance::{CryptoWalletRow, FiatWalletRow, UserBalances};
use crate::shared::Query;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// user_id → (balances, fetched_at). Shared by the client and the gateway,
/// which empties it when the session expires.
pub(crate) type BalanceCache = Arc<RwLock<HashMap<String, (UserBalances, Instant)>>>;

/// Sub-client for user wallet balances.
pub struct Balances<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Balances<'a> {
    /// A user's balances. Uses TTL cache.
    ///
    /// Requires a session even for cached entries. On a miss both wallet
    /// tables are read concurrently. A failed read, or a missing session,
    /// yields [`UserBalances::failed`], which is not cached, so the next call
    /// goes back to the backend. A result whose session ended mid-fetch is
    /// returned but not cached.
    pub async fn get(&self, user_id: &str) -> UserBalances {
        let session = match self.client.require_session().await {
            Ok(session) => session,
            Err(e) => return UserBalances::failed(e.to_string()),
        };

        {
            let cache = self.client.balance_cache.read().await;
            if let Some((balances, fetched_at)) = cache.get(user_id) {
                if fetched_at.elapsed() < self.client.balance_cache_ttl {
                    tracing::debug!(user_id, "Balance cache hit");
                    return balances.clone();
                }
            }
        }

        let fiat = Query::table("user_wallets").eq("user_id", user_id);
        let crypto = Query::table("crypto_wallets").eq("user_id", user_id);
        let fiat_endpoint = fiat.to_endpoint();
        let crypto_endpoint = crypto.to_endpoint();

        let (fiat_rows, crypto_rows) = futures_util::join!(
            self.client.http.get::<Vec<FiatWalletRow>>(&fiat_endpoint),
            self.client.http.get::<Vec<CryptoWalletRow>>(&crypto_endpoint),
        );

        let (fiat_rows, crypto_rows) = match (fiat_rows, crypto_rows) {
            (Ok(f), Ok(c)) => (f, c),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(user_id, error = %e, "Failed to fetch wallet balances");
                return UserBalances::failed(e.to_string());
            }
        };

        let balances = UserBalances::merge(fiat_rows, crypto_rows);

        // Logout or expiry while the reads were in flight: don't repopulate.
        let still_current = matches!(
            self.client.session.state().await,
            Some(current) if current.admin_id == session.admin_id
        );
        if still_current {
            self.client
                .balance_cache
                .write()
                .await
                .insert(user_id.to_string(), (balances.clone(), Instant::now()));
        }
        balances
    }

    /// Drop one user's cached balances.
    pub async fn invalidate(&self, user_id: &str) {
        self.client.balance_cache.write().await.remove(user_id);
    }

    /// Drop every cached entry.
    pub async fn clear_cache(&self) {
        self.client.balance_cache.write().await.clear();
    }
}
