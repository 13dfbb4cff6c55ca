//! API Routes
//!
//! Route handlers organized by dashboard page.

pub mod defaults;
pub mod emissions;
pub mod export;
pub mod farming;
pub mod health;
pub mod presale;
