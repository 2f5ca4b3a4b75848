pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, ScaffoldConfig, Settings, SettingsError};
pub use router::{MAX_REQUEST_BODY_BYTES, create_router};
pub use state::AppState;
