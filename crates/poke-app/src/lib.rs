//! Poke App - session state and controllers
//!
//! The stateful half of the explorer. Three controllers own all mutable
//! session state and expose it only through declared operations:
//!
//! - [`SettingsController`] — algorithm, result size, and vector strengths,
//!   with clipboard export/import.
//! - [`SelectionSynchronizer`] — the selected entity name, kept consistent
//!   with a `?pokemon=` URL parameter via [`Location`].
//! - [`QueryOrchestrator`] — issues similarity queries and guarantees that
//!   only the most recently triggered request's response is ever applied.
//!
//! [`ExplorerApp`] wires the three together over a fetched, immutable
//! catalog. Rendering (CLI or otherwise) consumes these and holds no state
//! of its own.

mod app;
mod clipboard;
mod location;
mod orchestrator;
mod selection;
mod settings;

pub use app::ExplorerApp;
pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use location::Location;
pub use orchestrator::{QueryOrchestrator, QueryState, SimilarityProvider};
pub use selection::{SelectionChange, SelectionSynchronizer};
pub use settings::{SettingsController, COPIED_CONFIRMATION};
