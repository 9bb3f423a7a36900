mod backend;
#[cfg(feature = "web")]
mod browser;
mod error;
mod handle;
mod listeners;
mod location;
mod memory;
mod mode;

pub use backend::{NativeCallback, NativeEvents, NavigationBackend};
#[cfg(feature = "web")]
pub use browser::BrowserBackend;
pub use error::{HistoryError, HistoryResult};
pub use handle::{History, NativeSubscription, Unlisten};
pub use listeners::{ListenerId, ListenerRegistry};
pub use location::Location;
pub use memory::MemoryBackend;
pub use mode::HistoryMode;
