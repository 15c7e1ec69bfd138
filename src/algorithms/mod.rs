//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the core algorithms: bounded random sampling and the
//! in-place partition-exchange sort.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bounded value and distinct-size sampling.
pub mod sampling;

/// In-place partition-exchange sort.
pub mod quicksort;
