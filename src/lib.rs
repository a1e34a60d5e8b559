//! Purpose: Shared core library crate used by the `jsontree` CLI and tests.
//! Exports: `core` (tree value model, parser, serializer, errors).
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
//! Invariants: The core never terminates the process; failures surface as `core::error::Error`.
pub mod core;
