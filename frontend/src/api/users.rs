use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::ApiClient,
    types::{ApiError, UserRecord},
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'/')
    .add(b'%');

pub(crate) fn encode_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

impl ApiClient {
    /// Looks up the backend record for one email address. 404 maps to
    /// `ApiError::NotFound`; the caller decides what that means.
    pub async fn get_user_by_email(&self, email: &str) -> Result<UserRecord, ApiError> {
        self.get_json(&format!("/users/{}", encode_path_segment(email)))
            .await
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_json("/users").await
    }
}
