use crate::core::ApiClient;
use crate::domain::model::Route;
use crate::domain::requests::{MessageRequest, TimelineUpdateRequest};
use chrono::NaiveDate;
use serde_json::Value;

// Timeline management routes.
impl ApiClient {
    pub async fn update_timeline(
        &self,
        maker_id: &str,
        new_completion_date: NaiveDate,
        reason: Option<&str>,
    ) -> Value {
        let body = TimelineUpdateRequest {
            maker_id,
            new_completion_date,
            reason: reason.unwrap_or(""),
        };
        self.post(Route::new("/update-timeline"), &body).await
    }

    /// `GET /timeline-status?maker_id=`. `None` reports on every maker.
    pub async fn timeline_status(&self, maker_id: Option<&str>) -> Value {
        self.get(Route::new("/timeline-status").query("maker_id", maker_id.unwrap_or("")))
            .await
    }

    pub async fn send_message(&self, maker_id: &str, message: &str) -> Value {
        self.post(Route::new("/send-message"), &MessageRequest { maker_id, message })
            .await
    }
}
