//! CLI library components for resume shortlisting.

pub mod logging;
pub mod pipeline;
