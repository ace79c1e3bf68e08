//! Rupa Polymorphic Value Core - Library
//!
//! Public API surface for the Rupa core: tagged values with checked reads,
//! the shape dispatch registry, and type-constrained generic operators.
//! The core performs no I/O; observable behavior is recorded as drainable
//! events.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod ops;
pub mod value;

// Re-export commonly used types
pub use config::RupaConfig;
pub use dispatch::registry::{ShapeKind, ShapeRegistry};
pub use dispatch::shape::Shape;
pub use error::{RupaError, RupaResult};
pub use events::{EventRecorder, Facet, LifecycleEvent};
pub use value::tag::ValueTag;
pub use value::tagged::{Payload, TaggedValue};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_shape_emits_the_full_transition_sequence() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let registry = ShapeRegistry::new(recorder.clone());

        {
            let derived = registry.create(ShapeKind::Derived);
            assert_eq!(registry.describe(derived.as_ref()), "Derived foo");
        }

        let events = recorder.drain();
        assert_eq!(
            events,
            vec![
                LifecycleEvent::Constructed { facet: Facet::Base },
                LifecycleEvent::Constructed { facet: Facet::Derived },
                LifecycleEvent::Destructed { facet: Facet::Derived },
                LifecycleEvent::Destructed { facet: Facet::Base },
            ]
        );
    }

    #[test]
    fn callable_binding_outlives_the_shape_that_requested_it() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let registry = ShapeRegistry::new(recorder.clone());

        let callable = {
            let _derived = registry.create(ShapeKind::Derived);
            registry.callable()
        };
        recorder.drain();

        // the binding was fixed at creation and stays invocable
        callable.invoke("after release");
        assert_eq!(
            recorder.drain(),
            vec![LifecycleEvent::MessageEmitted {
                message: "after release".to_string()
            }]
        );
    }

    #[test]
    fn tagged_values_cross_the_operator_surface_explicitly() {
        let a = TaggedValue::integer(5);
        let b = TaggedValue::integer(10);

        // callers unwrap payloads through checked reads before combining
        let sum = ops::combine(a.as_integer().unwrap(), b.as_integer().unwrap()).unwrap();
        assert_eq!(sum, 15);
        assert_eq!(TaggedValue::integer(sum).as_integer(), Ok(15));
    }
}
