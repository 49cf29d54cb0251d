use tabled::Table;

use crate::{
    client::{ApiClient, CredentialProvider, StaticToken},
    error, info,
    management::TokenStore,
    success,
    types::{Credentials, Registration},
    utils, warning,
};

pub async fn register(client: &ApiClient, registration: Registration) {
    let pb = utils::spinner(format!("Registering {}...", registration.username));
    let result = client.register(&registration).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            success!(
                "{}",
                response.message.as_deref().unwrap_or("Registration accepted.")
            );
            println!("{}", utils::to_pretty_json(&response));
        }
        Err(e) => warning!("Registration failed. Err: {}", e),
    }
}

pub async fn login(client: &ApiClient, credentials: Credentials) {
    let pb = utils::spinner(format!("Logging in as {}...", credentials.email));
    let result = client.login(&credentials).await;
    pb.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            warning!("Login failed. Err: {}", e);
            return;
        }
    };

    println!("{}", utils::to_pretty_json(&response));

    let mut store = TokenStore::new(TokenStore::default_path());
    store.set(&response.access_token);
    match store.persist().await {
        Ok(()) => success!("Logged in. Token saved to {}", store.path().display()),
        Err(e) => warning!("Logged in, but the token could not be saved. Err: {}", e),
    }
}

pub async fn users(client: &ApiClient, token: Option<String>) {
    let result = match token {
        Some(token) => fetch_users(client, &StaticToken::new(token)).await,
        None => {
            let store = match TokenStore::load_default().await {
                Ok(store) => store,
                Err(e) => error!("Failed to load token. Please run racerx login\n Error: {}", e),
            };
            if store.bearer_token().is_none() {
                info!("No stored token, sending the request unauthenticated.");
            }
            fetch_users(client, &store).await
        }
    };

    match result {
        Ok(users) => {
            let table = Table::new(utils::user_rows(&users));
            println!("{}", table);
        }
        Err(e) => warning!("Failed to fetch users. Err: {}", e),
    }
}

pub async fn logout() {
    let mut store = match TokenStore::load_default().await {
        Ok(store) => store,
        Err(e) => error!("Failed to load token. Err: {}", e),
    };

    match store.clear().await {
        Ok(()) => success!("Stored token removed."),
        Err(e) => warning!("Failed to remove token. Err: {}", e),
    }
}

async fn fetch_users(
    client: &ApiClient,
    credentials: &impl CredentialProvider,
) -> Result<Vec<crate::types::User>, reqwest::Error> {
    let pb = utils::spinner("Fetching users...");
    let result = client.get_users(credentials).await;
    pb.finish_and_clear();
    result
}
