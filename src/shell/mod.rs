//! Shell Module
//!
//! Interactive, line-oriented menu over standard input/output.
//!
//! ## State Machine
//! ```text
//!            1-8                 1-3
//!          ┌─────┐             ┌─────┐
//!          ▼     │             ▼     │
//!     ┌──────────┴─┐   4   ┌─────────┴──┐
//!     │  MainMenu  ├──────►│FilterSubmenu│
//!     │            │◄──────┤             │
//!     └─────┬──────┘   4   └─────────────┘
//!           │ 9 (save)
//!           ▼
//!        ┌──────┐
//!        │ Exit │
//!        └──────┘
//! ```
//! Invalid choices re-prompt without changing state. Main menu option 4
//! enters the filter submenu; option 4 in the submenu returns.
//!
//! The shell is generic over its input and output so it can be driven by
//! in-memory buffers in tests.

mod console;
mod menu;
mod render;
mod session;

pub use console::{parse_non_negative, Console, InvalidNumber};
pub use menu::{FilterAction, MainAction, MenuState, SortOption};
pub use render::{format_thousands, render_statistics, render_table};
pub use session::Shell;
