//! # Block-level rendering
//!
//! Single-pass, line-oriented block parsing and HTML emission.
//!
//! ## Phases
//!
//! 1. **Line classification** (`classify`): each line is classified
//!    independently into a [`LineKind`] holding only local facts,
//!    checked in the renderer's fixed precedence order.
//!
//! 2. **Fragment construction** (`builder`): a [`FragmentBuilder`]
//!    carries the parser state through the line sequence and emits one
//!    [`Fragment`] per line or per flushed multi-line buffer.
//!
//! ## Modules
//!
//! - **`types`**: the [`Fragment`] output unit
//! - **`kinds`**: per-construct detection and stripping helpers
//! - **`classify`**: [`LineKind`] and the precedence-ordered classifier
//! - **`builder`**: the [`FragmentBuilder`] state machine
//!
//! ## Key invariants
//!
//! - Fenced code and pipe-table buffers can never be open at the same
//!   time; the buffers live inside the state enum's variants.
//! - Code fence content is verbatim: no classification or inline
//!   formatting inside.
//! - A flushed buffer's fragment occupies the position of the line
//!   that triggered the flush.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::FragmentBuilder;
pub use classify::{LineKind, classify};
pub use types::Fragment;
