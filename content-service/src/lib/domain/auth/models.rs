/// Token handed back to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
}

impl AccessToken {
    pub const BEARER: &'static str = "bearer";

    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: Self::BEARER,
        }
    }
}
