use crate::types::{Credentials, LoginResponse, MessageResponse, Registration, User};

use super::{ApiClient, CredentialProvider, checked};

impl ApiClient {
    /// Registers a new user.
    ///
    /// Sends `POST /register` with the registration record as the JSON body and
    /// returns the backend's confirmation. Any JSON object is accepted as a
    /// confirmation; a `message` field is picked out when present, everything
    /// else is kept in `extra`. Duplicate usernames or emails and
    /// missing fields are rejected by the backend and arrive as an error with
    /// the corresponding status (409, 400).
    ///
    /// # Example
    ///
    /// ```
    /// let registration = Registration {
    ///     username: "testuser".to_string(),
    ///     email: "test@example.com".to_string(),
    ///     password: "SecurePass123".to_string(),
    /// };
    /// let result = client.register(&registration).await?;
    /// println!("{:?}", result.message);
    /// ```
    pub async fn register(
        &self,
        registration: &Registration,
    ) -> Result<MessageResponse, reqwest::Error> {
        let response = checked(self.http.post(self.url("/register")).json(registration)).await?;
        response.json::<MessageResponse>().await
    }

    /// Exchanges credentials for an access token via `POST /login`.
    ///
    /// The token is returned as-is; storing it is the caller's business.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, reqwest::Error> {
        let response = checked(self.http.post(self.url("/login")).json(credentials)).await?;
        response.json::<LoginResponse>().await
    }

    /// Lists users via the authenticated `GET /users`.
    ///
    /// The bearer token is taken from `credentials`. Without one the request is
    /// still sent, unauthenticated, and the backend answers 401.
    pub async fn get_users(
        &self,
        credentials: &impl CredentialProvider,
    ) -> Result<Vec<User>, reqwest::Error> {
        let mut request = self.http.get(self.url("/users"));
        if let Some(token) = credentials.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = checked(request).await?;
        response.json::<Vec<User>>().await
    }
}
