//! CLI library components for the PO formatter.

pub mod logging;
pub mod pipeline;
pub mod settings;
