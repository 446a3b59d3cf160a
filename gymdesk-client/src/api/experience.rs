//! `/api/experience/sessions` (member feedback)

use shared::models::{ExperienceSession, ExperienceSessionCreate};

use crate::{ClientResult, HttpClient};

pub const SESSIONS: &str = "/api/experience/sessions";

pub struct ExperienceApi<'a, H> {
    pub(crate) http: &'a H,
}

impl<H: HttpClient> ExperienceApi<'_, H> {
    pub async fn list_sessions(&self) -> ClientResult<Vec<ExperienceSession>> {
        self.http.get_list(SESSIONS).await
    }

    pub async fn create_session(
        &self,
        payload: &ExperienceSessionCreate,
    ) -> ClientResult<ExperienceSession> {
        self.http.post_item(SESSIONS, payload).await
    }
}
