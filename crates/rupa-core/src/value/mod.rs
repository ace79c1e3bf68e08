pub mod tag;
pub mod tagged;

pub use tag::ValueTag;
pub use tagged::{Payload, TaggedValue};
