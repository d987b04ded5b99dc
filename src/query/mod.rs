//! Typed audit query filters
//!
//! A [`FilterSpec`] is the SDK-independent description of which audit records
//! to fetch. [`build_filter`] turns validated options into a spec; the remote
//! client decides how to render it for its wire protocol.

pub mod filter;

pub use filter::{build_filter, Condition, ConditionOperator, FilterSpec, FilterValue};
