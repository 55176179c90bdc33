//! Random entity fabrication.
//!
//! Every publishable entity type has a fabrication rule producing a fully
//! populated, internally-consistent instance. Rules are looked up generically
//! through the [`FabricatorRegistry`]; a missing rule is a hard
//! [`FabricationError`], not a silent default.
//!
//! Seeded generation is reproducible for everything except the
//! wall-clock-anchored timestamp fields, which keeps load test runs
//! comparable without freezing time.

pub mod data;
pub mod registry;
pub mod rules;
pub mod sampler;

pub use registry::{FabricationError, FabricatorRegistry};
