// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Capture tracing events emitted by the code under test.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Event, Subscriber, field};
use tracing_subscriber::{Layer, layer::Context, prelude::*};

/// A tracing event captured by [EventLog].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapturedEvent {
    /// The event level, e.g. `DEBUG`.
    pub level: String,
    /// The event message.
    pub message: String,
    /// The remaining fields, formatted as strings.
    pub fields: HashMap<String, String>,
}

/// Extracts the fields of an event.
struct EventVisitor<'a>(&'a mut CapturedEvent);

impl field::Visit for EventVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.insert(field, value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.insert(field, value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.insert(field, value.to_string());
    }
}

impl EventVisitor<'_> {
    fn insert(&mut self, field: &field::Field, value: String) {
        if field.name() == "message" {
            self.0.message = value;
        } else {
            self.0.fields.insert(field.name().to_string(), value);
        }
    }
}

/// Records the events emitted while the guard returned by
/// [EventLog::install] is alive.
///
/// # Example
/// ```
/// use awsclient_test_utils::capture::EventLog;
/// let log = EventLog::default();
/// let _guard = log.install();
/// tracing::info!(answer = 42, "hello");
/// let events = log.events();
/// assert_eq!(events[0].message, "hello");
/// assert_eq!(events[0].fields.get("answer").map(String::as_str), Some("42"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl EventLog {
    /// Installs a subscriber recording all events on the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let layer = CaptureLayer {
            events: self.events.clone(),
        };
        tracing::subscriber::set_default(tracing_subscriber::registry().with(layer))
    }

    /// Returns a copy of the events captured so far.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .map(|e| e.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Returns the captured events with the given message.
    pub fn find(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message == message)
            .collect()
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut captured = CapturedEvent {
            level: event.metadata().level().to_string(),
            ..Default::default()
        };
        event.record(&mut EventVisitor(&mut captured));
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}
