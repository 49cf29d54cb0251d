use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::types::{User, UserTableRow};

/// Starts a steady-ticking spinner with `message`. Call `finish_and_clear`
/// once the request is done.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Pretty-prints any response body as JSON, falling back to its debug form.
pub fn to_pretty_json<T: Serialize + std::fmt::Debug>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:?}", value))
}

pub fn user_rows(users: &[User]) -> Vec<UserTableRow> {
    let mut rows: Vec<UserTableRow> = users
        .iter()
        .map(|u| UserTableRow {
            id: u.id,
            username: u.username.clone(),
            email: u.email.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
    rows
}

/// Turns empty strings from optional CLI arguments into `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
