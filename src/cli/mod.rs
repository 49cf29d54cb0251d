//! # CLI Module
//!
//! User-facing commands of racerx. Each command takes the shared
//! [`crate::client::ApiClient`], issues its request(s) and prints the outcome.
//! Failures are reported with `warning!` and never retried.
//!
//! ## Command Groups
//!
//! ### Accounts
//!
//! - [`register`] - create a user, log the backend's answer
//! - [`login`] - obtain a token and store it for later commands
//! - [`users`] - list users with the stored (or given) token
//! - [`logout`] - forget the stored token
//!
//! ### Tracks
//!
//! - [`tracks::overview`] - health and track list fetched side by side
//! - [`tracks::get`], [`tracks::create`], [`tracks::update`],
//!   [`tracks::delete`], [`tracks::search`]
//! - [`links`] - links attached to a track
//!
//! ### Development
//!
//! - [`serve`] - run the in-memory backend locally
//!
//! ## Usage Patterns
//!
//! ```bash
//! racerx serve --seed &                   # local backend with demo data
//! racerx register                         # demo user
//! racerx login                            # stores the token
//! racerx users
//! racerx tracks create --name "Laguna Seca" --location Monterey
//! racerx tracks                           # health + table
//! racerx tracks update 2 --name "Mazda Raceway"
//! ```

mod auth;
pub mod links;
mod serve;
pub mod tracks;

pub use auth::login;
pub use auth::logout;
pub use auth::register;
pub use auth::users;
pub use serve::serve;
