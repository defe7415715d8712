// Host fact gathering

pub mod facts;
pub mod host;
pub mod interfaces;
pub mod probes;

pub use facts::{collect_facts, Fact, FactKind};
pub use probes::{ProbeContext, UNKNOWN};
