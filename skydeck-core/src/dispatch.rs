//! Store and dispatch plumbing
//!
//! The store owns [`AppState`] and is the single point of mutation:
//! actions go through the reducer, which returns whether a re-render is
//! needed plus any effects for the runtime to execute.

use tracing::debug;

use crate::action::{Action, ActionName};
use crate::effect::Effect;
use crate::state::AppState;

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchResult {
    /// Whether the state was modified and the UI should re-render.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    #[inline]
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// The reducer signature: mutate state, report change + effects.
pub type Reducer = fn(&mut AppState, Action) -> DispatchResult;

/// Centralized state store.
pub struct Store {
    state: AppState,
    reducer: Reducer,
}

impl Store {
    pub fn new(state: AppState, reducer: Reducer) -> Self {
        Self { state, reducer }
    }

    /// Dispatch an action through the reducer, tracing the outcome.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        let name = action.name();
        let result = (self.reducer)(&mut self.state, action);
        debug!(
            action = name,
            changed = result.changed,
            effects = result.effects.len(),
            "dispatched"
        );
        result
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access for initialization; prefer dispatching actions.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }
}
