//! Per-view state machines.
//!
//! Each view owns its state exclusively and changes only through its
//! `update(msg)` function, which may hand back a command for the caller to
//! run against the backend. The outcome of that command is fed back in as
//! another message. Nothing in here performs I/O.

pub mod gallery;
pub mod navigation;
pub mod portfolio;
pub mod workflow;

pub use gallery::CollectionGallery;
pub use navigation::Route;
pub use portfolio::{ChartSource, PortfolioOverview, PriceChart};
pub use workflow::UploadWorkflow;
