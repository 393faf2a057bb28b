use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
    time::{Duration, Instant},
};

use crate::domain::{common::entities::app_errors::CoreError, session::value_objects::SessionScope};

#[derive(Debug, Clone)]
struct Slot {
    food_name: String,
    written_at: Instant,
}

/// Last detected food name, kept per [`SessionScope`].
///
/// The global slot never expires. Client slots live for `ttl` after their last
/// write, and at most `max_clients` of them are held at once. Concurrent
/// writers to the same slot are last-writer-wins.
#[derive(Debug)]
pub struct RecognitionSession {
    global: RwLock<Option<String>>,
    scoped: RwLock<HashMap<String, Slot>>,
    ttl: Duration,
    max_clients: usize,
}

impl RecognitionSession {
    pub fn new(ttl: Duration, max_clients: usize) -> Self {
        Self {
            global: RwLock::new(None),
            scoped: RwLock::new(HashMap::new()),
            ttl,
            max_clients: max_clients.max(1),
        }
    }

    pub fn set(&self, scope: &SessionScope, food_name: impl Into<String>) {
        let food_name = food_name.into();
        match scope {
            SessionScope::Global => {
                *self.global.write().unwrap_or_else(PoisonError::into_inner) = Some(food_name);
            }
            SessionScope::Client(id) => {
                let mut scoped = self.scoped.write().unwrap_or_else(PoisonError::into_inner);
                let ttl = self.ttl;
                scoped.retain(|_, slot| slot.written_at.elapsed() < ttl);

                if !scoped.contains_key(id) && scoped.len() >= self.max_clients {
                    let oldest = scoped
                        .iter()
                        .min_by_key(|(_, slot)| slot.written_at)
                        .map(|(key, _)| key.clone());
                    if let Some(oldest) = oldest {
                        scoped.remove(&oldest);
                    }
                }

                scoped.insert(
                    id.clone(),
                    Slot {
                        food_name,
                        written_at: Instant::now(),
                    },
                );
            }
        }
    }

    pub fn last(&self, scope: &SessionScope) -> Option<String> {
        match scope {
            SessionScope::Global => self
                .global
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            SessionScope::Client(id) => self
                .scoped
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(id)
                .filter(|slot| slot.written_at.elapsed() < self.ttl)
                .map(|slot| slot.food_name.clone()),
        }
    }

    /// Returns `explicit` when it is non-blank, otherwise the remembered name.
    pub fn get_or_default(
        &self,
        scope: &SessionScope,
        explicit: Option<&str>,
    ) -> Result<String, CoreError> {
        if let Some(name) = explicit.map(str::trim).filter(|name| !name.is_empty()) {
            return Ok(name.to_string());
        }

        self.last(scope).ok_or(CoreError::NoFoodContext)
    }
}
