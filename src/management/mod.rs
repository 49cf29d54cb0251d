mod auth;
mod dashboard;

pub use auth::StoredToken;
pub use auth::TokenStore;
pub use dashboard::Dashboard;
pub use dashboard::NO_TRACKS_MESSAGE;
pub use dashboard::render_tracks;
