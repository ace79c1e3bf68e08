//! Shape Registry
//!
//! Construction and dispatch surface for the closed shape variant set.
//! Dispatch is dynamic (vtable); constructed shapes are exclusively owned by
//! the caller, so a released shape can never be described again.

use super::callable::Callable;
use super::shape::{BaseShape, DerivedShape, Shape};
use crate::events::EventRecorder;

/// Closed set of shape variants the registry can construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Base,
    Derived,
}

/// Registry for shape construction and dispatch
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    recorder: EventRecorder,
}

impl ShapeRegistry {
    /// New registry recording into `recorder`
    pub fn new(recorder: EventRecorder) -> Self {
        ShapeRegistry { recorder }
    }

    /// Recorder handle shared with constructed shapes
    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    /// Construct a shape variant. The caller owns the result exclusively;
    /// releasing it records the destruction transitions.
    pub fn create(&self, kind: ShapeKind) -> Box<dyn Shape> {
        match kind {
            ShapeKind::Base => Box::new(BaseShape::new(self.recorder.clone())),
            ShapeKind::Derived => Box::new(DerivedShape::new(self.recorder.clone())),
        }
    }

    /// Dispatch the describe capability through the variant's own
    /// implementation
    pub fn describe(&self, shape: &dyn Shape) -> String {
        shape.describe()
    }

    /// A callable bound to this registry's recorder
    pub fn callable(&self) -> Callable {
        Callable::new(self.recorder.clone())
    }
}
