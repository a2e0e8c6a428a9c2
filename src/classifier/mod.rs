//! Classification core: pipeline kinds, one-shot process invocation, and
//! verdict normalization.

mod invoker;
mod pipeline;
mod verdict;

pub use invoker::{run_classifier, InvokeError};
pub use pipeline::PipelineKind;
pub use verdict::normalize;
