//! Bound Callables
//!
//! A callable is an opaque handle over one fixed emitter function. The
//! binding is resolved once, when the callable is created, never per call.

use crate::events::{EventRecorder, LifecycleEvent};

/// Emitter signature a callable binds at construction
pub type EmitFn = fn(&EventRecorder, &str);

/// Later-invocable handle with a statically bound emitter
#[derive(Debug, Clone)]
pub struct Callable {
    emit: EmitFn,
    recorder: EventRecorder,
}

impl Callable {
    pub(crate) fn new(recorder: EventRecorder) -> Self {
        Callable {
            emit: emit_message,
            recorder,
        }
    }

    /// Invoke the bound emitter with `message`
    pub fn invoke(&self, message: &str) {
        (self.emit)(&self.recorder, message)
    }
}

/// The one fixed free emitter: records the message as an observable event
fn emit_message(recorder: &EventRecorder, message: &str) {
    recorder.record(LifecycleEvent::MessageEmitted {
        message: message.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RupaConfig;

    #[test]
    fn invoke_records_the_message() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let callable = Callable::new(recorder.clone());

        callable.invoke("Message via bound callable");
        callable.invoke("second");

        assert_eq!(
            recorder.drain(),
            vec![
                LifecycleEvent::MessageEmitted {
                    message: "Message via bound callable".to_string()
                },
                LifecycleEvent::MessageEmitted {
                    message: "second".to_string()
                },
            ]
        );
    }
}
