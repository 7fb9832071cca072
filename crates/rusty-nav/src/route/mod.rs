//! Route module: pattern parsing and the ordered matcher
//!
//! - `pattern` turns a registration string into typed segments
//! - `registry` scans registrations in order and keeps the first match

pub mod pattern;
pub mod registry;

// Re-export commonly used types
pub use pattern::{classify_segment, split_segments, RoutePattern, Segment};
pub use registry::{MatchResult, RouteRegistry};
