//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure comparison machinery: ULP extraction and the
//! direction-aware tolerant ordering built on top of it.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unit-in-last-place computation.
pub mod ulp;

/// Direction-aware tolerant comparison.
pub mod ordering;
