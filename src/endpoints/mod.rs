//! Endpoint wrappers for the PokeWealth backend.
//!
//! Each module provides a struct that borrows the client's
//! [`Transport`](crate::transport::Transport) and exposes one method per
//! backend route, returning typed models.

pub mod analysis;
pub mod cards;
pub mod portfolio;

pub use analysis::AnalysisEndpoint;
pub use cards::CardEndpoint;
pub use portfolio::PortfolioEndpoint;
