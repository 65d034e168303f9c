pub mod runtime;

pub use runtime::{AlertRuntime, RunSummary};
