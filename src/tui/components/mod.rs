//! # TUI Components
//!
//! UI components for the terminal interface, in two flavors:
//!
//! - **Stateless (props-based)**: `StatusLine` receives all data as fields
//!   and just renders it.
//! - **Stateful (event-driven)**: `WorkBarState` persists across frames
//!   (fit plan, scroll offset, gesture tracker, hit zones) and emits
//!   [`work_bar::WorkBarEvent`]s; the transient `WorkBar` wrapper borrows it
//!   for one render pass.
//!
//! Each component file contains its state types, event types, rendering and
//! tests, so one file tells the whole story of a component.

pub mod status_line;
pub mod work_bar;

pub use status_line::StatusLine;
pub use work_bar::{WorkBar, WorkBarEvent, WorkBarState};
