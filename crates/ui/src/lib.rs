pub mod app;
pub mod components;
pub mod event_handler;
pub mod layout;
pub mod markdown;
pub mod scroll;
pub mod session;
pub mod state;
pub mod theme;
pub mod transcript;

pub use app::{App, ServiceEvent};
pub use event_handler::{EventHandler, KeyAction};
pub use scroll::ScrollCoordinator;
pub use session::{InputState, SessionState};
pub use state::{AppState, View};
pub use theme::Theme;
pub use transcript::{Entry, EntryId, EntryKind, EntryStatus, Role, Transcript};
