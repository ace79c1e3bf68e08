//! Host integration crate for the Rupa core
//!
//! Contains the small mechanical helpers that consume the core's drained
//! event buffer and hand emitted messages to a host-provided sink, plus the
//! fixed rendering of events for display. This crate intentionally contains
//! no policy.

pub use rupa_core::events::{EventRecorder, Facet, LifecycleEvent};
pub use rupa_core::{RupaError, RupaResult};

pub mod counter;

/// Sink provided by the host. Receives each emitted message in order.
pub type HostSink = fn(&str) -> RupaResult<()>;

/// Deliver every emitted message in `events` to `sink`, in recording order.
/// Lifecycle transitions are skipped; a sink failure aborts the remainder.
/// Returns the number of messages delivered.
pub fn deliver(events: &[LifecycleEvent], sink: HostSink) -> RupaResult<usize> {
    let mut delivered = 0;
    for event in events {
        match event {
            LifecycleEvent::MessageEmitted { message } => {
                sink(message)?;
                delivered += 1;
            }
            // lifecycle transitions are not host messages
            _ => continue,
        }
    }
    Ok(delivered)
}

/// Drain the recorder and deliver its emitted messages to `sink`. This
/// intentionally consumes the whole buffer (deterministic handoff); callers
/// that also want the lifecycle events should drain first and use
/// [`deliver`].
pub fn consume_emissions(recorder: &EventRecorder, sink: HostSink) -> RupaResult<usize> {
    deliver(&recorder.drain(), sink)
}

/// Fixed human-readable rendering of a core event
pub fn render_event(event: &LifecycleEvent) -> String {
    match event {
        LifecycleEvent::Constructed { facet } => format!("[{} constructor]", facet_name(facet)),
        LifecycleEvent::Destructed { facet } => format!("[{} destructor]", facet_name(facet)),
        LifecycleEvent::MessageEmitted { message } => message.clone(),
    }
}

fn facet_name(facet: &Facet) -> &'static str {
    match facet {
        Facet::Base => "Base",
        Facet::Derived => "Derived",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rupa_core::config::RupaConfig;
    use rupa_core::dispatch::registry::{ShapeKind, ShapeRegistry};

    #[test]
    fn consume_emissions_counts_delivered_messages() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let registry = ShapeRegistry::new(recorder.clone());

        {
            let _derived = registry.create(ShapeKind::Derived);
            let callable = registry.callable();
            callable.invoke("one");
            callable.invoke("two");
        }

        fn sink(message: &str) -> RupaResult<()> {
            assert!(!message.is_empty());
            Ok(())
        }

        let delivered = consume_emissions(&recorder, sink).expect("delivery failed");
        assert_eq!(delivered, 2);
        // the buffer was consumed, lifecycle events included
        assert!(recorder.is_empty());
    }

    #[test]
    fn sink_failure_propagates() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let registry = ShapeRegistry::new(recorder.clone());
        registry.callable().invoke("refused");

        fn sink(message: &str) -> RupaResult<()> {
            Err(RupaError::Emission(message.to_string()))
        }

        assert_eq!(
            consume_emissions(&recorder, sink),
            Err(RupaError::Emission("refused".to_string()))
        );
    }

    #[test]
    fn render_event_matches_the_fixed_format() {
        assert_eq!(
            render_event(&LifecycleEvent::Constructed {
                facet: Facet::Derived
            }),
            "[Derived constructor]"
        );
        assert_eq!(
            render_event(&LifecycleEvent::Destructed { facet: Facet::Base }),
            "[Base destructor]"
        );
        assert_eq!(
            render_event(&LifecycleEvent::MessageEmitted {
                message: "hi".to_string()
            }),
            "hi"
        );
    }
}
