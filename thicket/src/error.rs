// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by a render pass.

/// Failure of a render pass.
///
/// Structural mismatches between renders are not errors; they are resolved by
/// replacing the node. Everything listed here aborts the pass immediately and
/// leaves the container in an undefined, partially mutated state.
#[derive(Debug, thiserror::Error)]
pub enum RenderError<E> {
    /// The host failed to perform an operation.
    #[error("host operation failed: {0}")]
    Host(#[from] E),
    /// A description used [`Children::Multiple`](crate::desc::Children::Multiple)
    /// with no entries. Empty child lists must be [`Children::None`](crate::desc::Children::None).
    #[error("`Children::Multiple` must not be empty")]
    EmptyChildren,
}
