//! User manager orchestration
//!
//! Ties the session, dispatcher, and cache together. Writes flow
//! caller → dispatcher → transport, and only a confirmed success mutates
//! the cache. Point reads are cache-first: a hit answers from the cache
//! alone and never touches the network.

use std::sync::{Arc, RwLock};

use futures_util::future::join_all;
use roster_core::{
    ClientConfig, RosterError, RosterResult, Session, User, UserCreationParams, UserUpdateParams,
};
use tracing::{debug, info};

use crate::cache::UserCache;
use crate::dispatcher::RateLimitedDispatcher;
use crate::request::RequestDescriptor;
use crate::transport::Transport;
use crate::wire::{decode_user, decode_users};

/// Client-side manager for a tenant's user directory.
///
/// One live session at a time; switching to a different tenant discards
/// the cache wholesale before the new session takes effect.
pub struct UserManager {
    dispatcher: RateLimitedDispatcher,
    cache: UserCache,
    session: RwLock<Option<Session>>,
    config: ClientConfig,
}

impl UserManager {
    /// Create a manager over the given transport.
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            dispatcher: RateLimitedDispatcher::new(transport, &config),
            cache: UserCache::new(),
            session: RwLock::new(None),
            config,
        }
    }

    /// Create a manager with the default configuration.
    pub fn with_defaults(transport: Arc<dyn Transport>) -> Self {
        Self::new(transport, ClientConfig::default())
    }

    /// The user cache. Exposed so callers can inspect cached state.
    pub fn cache(&self) -> &UserCache {
        &self.cache
    }

    /// Set the active session.
    ///
    /// If a session was already live under a different, non-empty tenant
    /// id, every cached user is discarded before the new session takes
    /// effect. Re-initializing with the same tenant id leaves the cache
    /// alone.
    pub fn init_session(&self, tenant_id: impl Into<String>, api_token: impl Into<String>) {
        let next = Session::new(tenant_id, api_token);

        let mut session = match self.session.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = session.as_ref() {
            if !previous.tenant_id.is_empty() && previous.tenant_id != next.tenant_id {
                info!(
                    from = %previous.tenant_id,
                    to = %next.tenant_id,
                    "tenant changed, discarding cached users"
                );
                self.cache.clear();
            }
        }
        *session = Some(next);
    }

    fn current_session(&self) -> RosterResult<Session> {
        let session = match self.session.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        session.clone().ok_or(RosterError::SessionNotInitialized)
    }

    /// Create a single user.
    ///
    /// Applies the configured default profile URL when the params omit
    /// one. The created user is cached after the server confirms it.
    pub async fn create_user(&self, params: UserCreationParams) -> RosterResult<User> {
        let session = self.current_session()?;
        let request = RequestDescriptor::create_user(&session, &self.config, &params);

        let body = self.dispatcher.submit(request).await?;
        let user = decode_user(body)?;
        self.cache.upsert(user.clone());
        Ok(user)
    }

    /// Create up to `batch_limit` users concurrently.
    ///
    /// All requests are dispatched independently and joined; the result
    /// order matches the input order. If any sub-request fails, the whole
    /// call reports a `BatchNotSuccessful` aggregate naming succeeded and
    /// failed ids, even when every sub-request failed. Nothing is
    /// dispatched when the batch exceeds the limit.
    pub async fn create_users(
        &self,
        params_list: Vec<UserCreationParams>,
    ) -> RosterResult<Vec<User>> {
        if params_list.len() > self.config.batch_limit {
            return Err(RosterError::InvalidParameters {
                message: format!(
                    "the number of users to be created is limited to {}",
                    self.config.batch_limit
                ),
            });
        }

        let results = join_all(
            params_list
                .iter()
                .map(|params| self.create_user(params.clone())),
        )
        .await;

        if results.iter().all(|result| result.is_ok()) {
            return Ok(results.into_iter().flatten().collect());
        }

        let mut created_ids = Vec::new();
        let mut failed_ids = Vec::new();
        for (params, result) in params_list.iter().zip(&results) {
            match result {
                Ok(user) => created_ids.push(user.user_id.clone()),
                Err(_) => failed_ids.push(params.user_id.clone()),
            }
        }
        Err(RosterError::BatchNotSuccessful {
            created_ids,
            failed_ids,
        })
    }

    /// Update a user. Only the fields present in the params are sent; the
    /// full server-returned record replaces the cache entry on success.
    pub async fn update_user(&self, params: UserUpdateParams) -> RosterResult<User> {
        let session = self.current_session()?;
        let request = RequestDescriptor::update_user(&session, &self.config, &params);

        let body = self.dispatcher.submit(request).await?;
        let user = decode_user(body)?;
        self.cache.upsert(user.clone());
        Ok(user)
    }

    /// Fetch a user by id, cache-first.
    ///
    /// A cache hit answers immediately without a network call. On a miss
    /// the user is fetched and cached.
    pub async fn get_user(&self, user_id: &str) -> RosterResult<User> {
        let session = self.current_session()?;

        if let Some(user) = self.cache.get_by_id(user_id) {
            debug!(user_id, "cache hit");
            return Ok(user);
        }

        let request = RequestDescriptor::get_user(&session, &self.config, user_id);
        let body = self.dispatcher.submit(request).await?;
        let user = decode_user(body)?;
        self.cache.upsert(user.clone());
        Ok(user)
    }

    /// List users whose nickname matches exactly.
    ///
    /// The server-side limit is fixed by the configuration. Every returned
    /// user is cached; the list is returned in server order.
    pub async fn get_users(&self, nickname_matches: &str) -> RosterResult<Vec<User>> {
        if nickname_matches.is_empty() {
            return Err(RosterError::InvalidParameters {
                message: "nickname filter must not be empty".to_string(),
            });
        }
        let session = self.current_session()?;

        let request = RequestDescriptor::list_users(&session, &self.config, nickname_matches);
        let body = self.dispatcher.submit(request).await?;
        let users = decode_users(body)?;
        for user in &users {
            self.cache.upsert(user.clone());
        }
        Ok(users)
    }
}

impl std::fmt::Debug for UserManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManager")
            .field("dispatcher", &self.dispatcher)
            .field("cache", &self.cache)
            .finish()
    }
}
