pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod history;
pub mod preload;
pub mod region;
pub mod renderer;
pub mod session;
pub mod view;

pub use api::client::{BackendClient, MatchSource};
pub use api::models::{Participant, SearchRequest};
pub use config::Config;
pub use error::AppError;
pub use preload::{AssetLoader, ImageLoader, PreloadSet};
pub use region::Region;
pub use renderer::{Cursor, MatchHistoryRenderer, Outcome, PendingFetch, RenderState};
pub use session::Session;
