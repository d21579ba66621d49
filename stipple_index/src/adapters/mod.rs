// Copyright 2025 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters for point types from other crates.
//!
//! Enabled via feature flags to keep the core small and dependency free.

#[cfg(feature = "kurbo_adapter")]
pub mod kurbo_point;
