//! # Country Registry
//!
//! An interactive, single-user registry of country records with:
//! - CSV persistence (load at startup, save on demand and at exit)
//! - Case-insensitive unique names
//! - Search, continent and range filters, multi-key sorting
//! - Aggregate statistics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Interactive Shell                          │
//! │             (MainMenu / FilterSubmenu / Exit)                │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │ add / update                 │ search / filter
//!                ▼                              │ sort / statistics
//!         ┌─────────────┐                ┌──────▼──────┐
//!         │ RecordStore │───────────────►│    Query    │
//!         │   (Vec)     │   &[Country]   │ (pure fns)  │
//!         └──────┬──────┘                └─────────────┘
//!                │ load / save
//!                ▼
//!         ┌─────────────┐
//!         │ Persistence │
//!         │    (CSV)    │
//!         └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod query;
pub mod persistence;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RegistryError, Result};
pub use config::Config;
pub use model::Country;
pub use store::RecordStore;
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the country registry
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
