use super::{
    client::{expect_ok, parse_json, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse, SessionUser},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self
            .http_client()
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_json(response).await
    }

    /// Current session identity; any error means "no session".
    pub async fn me(&self) -> Result<SessionUser, ApiError> {
        self.get_json("/auth/me").await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let response = self
            .http_client()
            .post(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        expect_ok(response).await
    }
}
