//! Shape Variants
//!
//! The closed set of dispatch variants and their shared capability.
//! The derived variant embeds the base variant; field order then guarantees
//! base-first construction and derived-first destruction, and both
//! transitions are recorded as observable events.

use crate::events::{EventRecorder, Facet, LifecycleEvent};

/// Shared capability implemented by every shape variant
pub trait Shape {
    /// Describe the concrete variant
    fn describe(&self) -> String;
}

/// Base shape variant
#[derive(Debug)]
pub struct BaseShape {
    recorder: EventRecorder,
}

impl BaseShape {
    /// Construct the base facet, recording the transition
    pub fn new(recorder: EventRecorder) -> Self {
        recorder.record(LifecycleEvent::Constructed { facet: Facet::Base });
        BaseShape { recorder }
    }

    pub(crate) fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }
}

impl Shape for BaseShape {
    fn describe(&self) -> String {
        "Base foo".to_string()
    }
}

impl Drop for BaseShape {
    fn drop(&mut self) {
        self.recorder
            .record(LifecycleEvent::Destructed { facet: Facet::Base });
    }
}

/// Derived shape variant. Embeds the base facet rather than inheriting it.
#[derive(Debug)]
pub struct DerivedShape {
    base: BaseShape,
}

impl DerivedShape {
    /// Construct the derived facet on top of a fresh base facet
    pub fn new(recorder: EventRecorder) -> Self {
        let base = BaseShape::new(recorder);
        base.recorder()
            .record(LifecycleEvent::Constructed { facet: Facet::Derived });
        DerivedShape { base }
    }
}

impl Shape for DerivedShape {
    /// Replaces the base description entirely
    fn describe(&self) -> String {
        "Derived foo".to_string()
    }
}

impl Drop for DerivedShape {
    fn drop(&mut self) {
        // Runs before the embedded base facet is released
        self.base
            .recorder()
            .record(LifecycleEvent::Destructed { facet: Facet::Derived });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RupaConfig;

    #[test]
    fn describe_is_fixed_per_variant() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let base = BaseShape::new(recorder.clone());
        let derived = DerivedShape::new(recorder);

        assert_eq!(base.describe(), "Base foo");
        assert_eq!(derived.describe(), "Derived foo");
    }

    #[test]
    fn describe_is_idempotent_on_a_live_shape() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        let derived = DerivedShape::new(recorder);
        assert_eq!(derived.describe(), derived.describe());
    }

    #[test]
    fn base_lifecycle_brackets_its_scope() {
        let recorder = EventRecorder::new(&RupaConfig::new());
        {
            let _base = BaseShape::new(recorder.clone());
        }
        assert_eq!(
            recorder.drain(),
            vec![
                LifecycleEvent::Constructed { facet: Facet::Base },
                LifecycleEvent::Destructed { facet: Facet::Base },
            ]
        );
    }
}
