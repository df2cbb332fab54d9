// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to render into other Thicket crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "host_tree_adapter")]
pub mod host_tree;
