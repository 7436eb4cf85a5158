//! Terminal dashboard.
//!
//! Full-screen ratatui view of a [`Snapshot`](crate::core::Snapshot) that is
//! re-collected on a fixed interval.

mod app;
mod event_handler;
mod render;
mod widgets;

pub use app::{run_dashboard, DashboardApp, DashboardConfig};
pub use event_handler::{map_key, DashboardEvent};
