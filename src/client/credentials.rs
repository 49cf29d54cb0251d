/// Supplies the bearer token for authenticated requests.
///
/// The client never looks a token up on its own; whoever issues an
/// authenticated call passes a provider in. Returning `None` sends the request
/// without an `Authorization` header and leaves the decision to the backend.
pub trait CredentialProvider {
    fn bearer_token(&self) -> Option<&str>;
}

/// A token known up front, e.g. passed on the command line.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        StaticToken(token.into())
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<&str> {
        Some(&self.0)
    }
}

impl<P: CredentialProvider + ?Sized> CredentialProvider for &P {
    fn bearer_token(&self) -> Option<&str> {
        (**self).bearer_token()
    }
}

impl<P: CredentialProvider> CredentialProvider for Option<P> {
    fn bearer_token(&self) -> Option<&str> {
        self.as_ref().and_then(|p| p.bearer_token())
    }
}
