//! Lifecycle Events and Recorder
//!
//! Observable events produced by the core: shape lifecycle transitions and
//! callable message emissions. The recorder is a drainable buffer; the core
//! itself performs no I/O.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::RupaConfig;

/// Shape facet an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Base,
    Derived,
}

/// Observable core event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A shape facet finished constructing
    Constructed { facet: Facet },

    /// A shape facet was released
    Destructed { facet: Facet },

    /// A bound callable emitted a message
    MessageEmitted { message: String },
}

#[derive(Debug)]
struct RecorderState {
    events: Vec<LifecycleEvent>,
    dropped: usize,
}

/// Drainable event buffer. Cloning yields another handle to the same buffer.
#[derive(Debug, Clone)]
pub struct EventRecorder {
    state: Arc<Mutex<RecorderState>>,
    max_events: usize,
    max_message_len: usize,
}

impl EventRecorder {
    /// New recorder with limits taken from `config`
    pub fn new(config: &RupaConfig) -> Self {
        EventRecorder {
            state: Arc::new(Mutex::new(RecorderState {
                events: Vec::new(),
                dropped: 0,
            })),
            max_events: config.max_events,
            max_message_len: config.max_message_len,
        }
    }

    /// Record an event. Beyond `max_events` the event is counted as dropped
    /// instead of buffered; emitted messages are truncated to
    /// `max_message_len` bytes at the nearest character boundary.
    pub fn record(&self, event: LifecycleEvent) {
        let event = match event {
            LifecycleEvent::MessageEmitted { mut message } => {
                let mut end = self.max_message_len.min(message.len());
                while !message.is_char_boundary(end) {
                    end -= 1;
                }
                message.truncate(end);
                LifecycleEvent::MessageEmitted { message }
            }
            other => other,
        };

        if let Ok(mut state) = self.state.lock() {
            if state.events.len() >= self.max_events {
                state.dropped += 1;
            } else {
                state.events.push(event);
            }
        }
    }

    /// Drain all buffered events, in recording order
    pub fn drain(&self) -> Vec<LifecycleEvent> {
        match self.state.lock() {
            Ok(mut state) => std::mem::take(&mut state.events),
            Err(_) => Vec::new(),
        }
    }

    /// Number of buffered events
    pub fn len(&self) -> usize {
        match self.state.lock() {
            Ok(state) => state.events.len(),
            Err(_) => 0,
        }
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of events rejected because the buffer was full
    pub fn dropped(&self) -> usize {
        match self.state.lock() {
            Ok(state) => state.dropped,
            Err(_) => 0,
        }
    }
}
