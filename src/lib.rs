pub mod boot;
pub mod config;
pub mod interactive_ratatui;
pub mod search;
pub mod session;
pub mod telemetry;

pub use boot::{BootEvent, BootHandle, BootSequencer, BootView};
pub use config::{ConfigError, SearchConfig};
pub use search::{
    HttpSearchService, OfflineSearchService, SearchError, SearchOptions, SearchResult,
    SearchService, format_search_result,
};
pub use session::{SearchObserver, SessionController, SessionStatus, SessionView, TracingObserver};
