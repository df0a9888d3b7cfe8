//! Session ownership across users.
//!
//! The registry hands out shared sessions keyed by owner name. A session
//! outlives any connection: removing it is an explicit act.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::config::SessionConfig;
use crate::voxel::edit::{ChangeSet, EditRecord};
use super::local::LocalSession;

/// Session shared between the registry and whoever is using it
pub type SharedSession<E = ChangeSet> = Arc<Mutex<LocalSession<E>>>;

/// Lock a shared session, recovering it if a previous holder panicked
pub fn lock_session<E>(session: &SharedSession<E>) -> MutexGuard<'_, LocalSession<E>> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sessions by owner.
#[derive(Debug)]
pub struct SessionRegistry<E = ChangeSet> {
    config: Arc<SessionConfig>,
    sessions: Mutex<HashMap<String, SharedSession<E>>>,
}

impl<E: EditRecord> SessionRegistry<E> {
    /// Create an empty registry. New sessions share `config`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config: Arc::new(config),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Config handed to new sessions
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Session of `owner`, created on first use
    pub fn session(&self, owner: &str) -> SharedSession<E> {
        let mut sessions = self.lock();
        if let Some(session) = sessions.get(owner) {
            return Arc::clone(session);
        }
        log::debug!("Created session for {}", owner);
        let session = Arc::new(Mutex::new(LocalSession::new(Arc::clone(&self.config))));
        sessions.insert(owner.to_string(), Arc::clone(&session));
        session
    }

    /// Session of `owner`, if one exists
    pub fn get(&self, owner: &str) -> Option<SharedSession<E>> {
        self.lock().get(owner).cloned()
    }

    /// Drop `owner`'s session from the registry. Holders keep their handle.
    pub fn remove(&self, owner: &str) -> Option<SharedSession<E>> {
        let removed = self.lock().remove(owner);
        if removed.is_some() {
            log::debug!("Removed session for {}", owner);
        }
        removed
    }

    /// Number of sessions
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no sessions exist
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, SharedSession<E>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    use crate::core::types::IVec3;

    #[test]
    fn test_session_created_once_per_owner() {
        let registry: SessionRegistry = SessionRegistry::new(SessionConfig::default());
        assert!(registry.is_empty());

        let first = registry.session("alice");
        let again = registry.session("alice");
        assert!(Arc::ptr_eq(&first, &again));

        registry.session("bob");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_session_state_is_shared() {
        let registry: SessionRegistry = SessionRegistry::new(SessionConfig::default());
        lock_session(&registry.session("alice")).set_pos1(IVec3::new(1, 2, 3));

        let session = registry.get("alice").unwrap();
        assert_eq!(lock_session(&session).pos1().unwrap(), IVec3::new(1, 2, 3));
        assert!(registry.get("bob").is_none());
    }

    #[test]
    fn test_remove_keeps_outstanding_handles() {
        let registry: SessionRegistry = SessionRegistry::new(SessionConfig::default());
        let held = registry.session("alice");
        lock_session(&held).set_pos2(IVec3::ONE);

        assert!(registry.remove("alice").is_some());
        assert!(registry.remove("alice").is_none());
        assert!(registry.get("alice").is_none());
        assert_eq!(lock_session(&held).pos2().unwrap(), IVec3::ONE);

        // A fresh session replaces the removed one
        let fresh = registry.session("alice");
        assert!(lock_session(&fresh).pos2().is_err());
    }

    #[test]
    fn test_sessions_share_config() {
        let mut config = SessionConfig::default();
        config.history_capacity = 4;
        let registry: SessionRegistry = SessionRegistry::new(config);
        let session = registry.session("alice");
        assert_eq!(lock_session(&session).config().history_capacity, 4);
        assert_eq!(registry.config().history_capacity, 4);
    }

    #[test]
    fn test_concurrent_owners() {
        let registry: Arc<SessionRegistry> = Arc::new(SessionRegistry::new(SessionConfig::default()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let owner = format!("user{}", i % 4);
                    let session = registry.session(&owner);
                    lock_session(&session).set_pos1(IVec3::splat(i % 4));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 4);
        for i in 0..4 {
            let session = registry.get(&format!("user{}", i)).unwrap();
            assert_eq!(lock_session(&session).pos1().unwrap(), IVec3::splat(i));
        }
    }

    #[test]
    fn test_poisoned_session_recovers() {
        let registry: Arc<SessionRegistry> = Arc::new(SessionRegistry::new(SessionConfig::default()));
        let session = registry.session("alice");

        let poisoner = Arc::clone(&session);
        let result = thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("holder crashed");
        })
        .join();
        assert!(result.is_err());
        assert!(session.is_poisoned());

        lock_session(&session).set_pos1(IVec3::ZERO);
        assert!(lock_session(&session).pos1().is_ok());
    }
}
