#![allow(dead_code)]

use logdispatch::{Dispatcher, LogModule, Registry, Value, testing::RecordingSink};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Modules
// ============================================================================

/// Always declines, like a module that inspects a value and rejects it.
pub struct DecliningModule {
    pub key: &'static str,
    pub calls: Arc<AtomicUsize>,
}

impl LogModule<Value> for DecliningModule {
    fn key(&self) -> &str {
        self.key
    }

    fn process(&self, _value: &Value) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        false
    }
}

/// Handles HTTP status codes at or above a threshold.
pub struct StatusModule {
    pub threshold: i64,
    pub seen: Arc<Mutex<Vec<i64>>>,
}

impl LogModule<Value> for StatusModule {
    fn key(&self) -> &str {
        "http.status"
    }

    fn process(&self, value: &Value) -> bool {
        match value.as_i64() {
            Some(code) if code >= self.threshold => {
                self.seen.lock().unwrap().push(code);
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A dispatcher over `registry` whose fallback is recorded.
pub fn recorded(registry: Registry<Value>) -> (Dispatcher<Value>, RecordingSink<Value>) {
    let sink = RecordingSink::new();
    let dispatcher = Dispatcher::builder()
        .registry(registry)
        .fallback(sink.clone())
        .build();
    (dispatcher, sink)
}
