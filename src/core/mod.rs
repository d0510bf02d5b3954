//! # Core Navigation Logic
//!
//! This module contains werkbar's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • nav/fit/gesture      │
//!                    │    (pure derivations)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │  Embedding │
//!     │  Adapter   │      │  Adapter   │      │   pages    │
//!     │ (ratatui)  │      │  (future)  │      │ (info API) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all navigation state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`work`]: Work identifiers, labels, ordering
//! - [`nav`]: Location parsing and navigation derivation
//! - [`gesture`]: Swipe detection
//! - [`fit`]: Responsive bar fitting
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod fit;
pub mod gesture;
pub mod nav;
pub mod state;
pub mod work;
