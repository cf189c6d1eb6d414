// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Model Listeners
// ─────────────────────────────────────────────────────────────────────
//! Observers notified after each published model state.
//!
//! Listeners run synchronously on the caller's thread, in registration
//! order. They receive the published state read-only.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use cogxel_types::CognitionResult;

use crate::model::CognitiveModel;
use crate::state::ModelState;

pub trait ModelListener: Send + Sync {
    fn model_state_changed(
        &self,
        model: &CognitiveModel,
        state: &Arc<ModelState>,
    ) -> CognitionResult<()>;
}

/// Keeps the most recent `capacity` published states.
pub struct RecordingListener {
    capacity: usize,
    states: Mutex<VecDeque<Arc<ModelState>>>,
}

impl RecordingListener {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            states: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn states(&self) -> Vec<Arc<ModelState>> {
        self.states.lock().iter().cloned().collect()
    }

    pub fn last(&self) -> Option<Arc<ModelState>> {
        self.states.lock().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.states.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.states.lock().clear();
    }
}

impl ModelListener for RecordingListener {
    fn model_state_changed(
        &self,
        _model: &CognitiveModel,
        state: &Arc<ModelState>,
    ) -> CognitionResult<()> {
        if self.capacity == 0 {
            return Ok(());
        }
        let mut states = self.states.lock();
        states.push_back(Arc::clone(state));
        if states.len() > self.capacity {
            states.pop_front();
        }
        Ok(())
    }
}

type ListenFn = Box<dyn Fn(&CognitiveModel, &Arc<ModelState>) -> CognitionResult<()> + Send + Sync>;

/// Listener that delegates to a closure.
pub struct ExternalListener {
    listen_fn: ListenFn,
}

impl ExternalListener {
    pub fn new(
        listen_fn: impl Fn(&CognitiveModel, &Arc<ModelState>) -> CognitionResult<()>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            listen_fn: Box::new(listen_fn),
        }
    }
}

impl ModelListener for ExternalListener {
    fn model_state_changed(
        &self,
        model: &CognitiveModel,
        state: &Arc<ModelState>,
    ) -> CognitionResult<()> {
        (self.listen_fn)(model, state)
    }
}
