use crate::types::{Track, TrackLink, User};

use super::store::{SharedStore, Store, StoredUser, hash_password, now, random_string};

const DEMO_USERS: [(&str, &str, &str); 2] = [
    ("josh", "josh@example.com", "pass1"),
    ("dorrie", "dorrie@example.com", "pass2"),
];

// (name, location)
const DEMO_TRACKS: [(&str, &str); 5] = [
    ("Whoa Ghana", "Beautiful's Dream"),
    ("No Hitting", "Beautiful's Dream"),
    ("Donut City", "Beautiful's Dream"),
    ("Can I Get an Intro", "Beautiful's Dream"),
    ("Dorrie's Dumpling", "Dorrance"),
];

// (index into DEMO_TRACKS, link_type, link_url)
const DEMO_LINKS: [(usize, &str, &str); 4] = [
    (0, "youtube", "https://www.youtube.com/watch?v=OKgmt14oonA"),
    (1, "youtube", "https://www.youtube.com/watch?v=0MzQ2Pg4Zkc"),
    (
        0,
        "spotify",
        "https://open.spotify.com/track/0t4UVXTeUEtFCcMZGjsHPH?si=6e6be9b85c69428a",
    ),
    (
        2,
        "spotify",
        "https://open.spotify.com/track/3HZ7gHamJJzcjKbEENuGyY?si=518cc1dba71443c4",
    ),
];

impl Store {
    /// A shared store pre-filled with the demo data, see [`Store::seed`].
    pub fn seeded() -> SharedStore {
        let mut store = Store::default();
        store.seed();
        std::sync::Arc::new(tokio::sync::Mutex::new(store))
    }

    /// Drops everything and loads two demo users, five tracks and four links.
    pub fn seed(&mut self) {
        *self = Store::default();

        for (username, email, password) in DEMO_USERS {
            let id = self.next_id();
            let salt = random_string(16);
            let password_hash = hash_password(&salt, password);
            self.users.insert(
                id,
                StoredUser {
                    user: User {
                        id,
                        username: username.to_string(),
                        email: email.to_string(),
                        created_at: Some(now()),
                    },
                    salt,
                    password_hash,
                },
            );
        }

        let mut track_ids = Vec::with_capacity(DEMO_TRACKS.len());
        for (name, location) in DEMO_TRACKS {
            let id = self.next_id();
            let timestamp = now();
            self.tracks.insert(
                id,
                Track {
                    id,
                    name: name.to_string(),
                    location: location.to_string(),
                    created_at: Some(timestamp.clone()),
                    updated_at: Some(timestamp),
                },
            );
            track_ids.push(id);
        }

        for (track, link_type, link_url) in DEMO_LINKS {
            let id = self.next_id();
            self.links.insert(
                id,
                TrackLink {
                    id,
                    track_id: track_ids[track],
                    link_type: link_type.to_string(),
                    link_url: link_url.to_string(),
                },
            );
        }
    }
}
