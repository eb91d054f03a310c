use crate::core::ApiClient;
use crate::domain::model::Route;
use crate::domain::requests::{JobRequest, LogisticsPlanRequest};
use serde_json::Value;

// Logistics routes.
impl ApiClient {
    /// `POST /plan-logistics`. `winning_makers` is comma-separated.
    pub async fn plan_logistics(&self, job_id: &str, winning_makers: &str) -> Value {
        let body = LogisticsPlanRequest {
            job_id,
            winning_makers,
        };
        self.post(Route::new("/plan-logistics"), &body).await
    }

    pub async fn optimize_shipping(&self, job_id: &str) -> Value {
        self.post(Route::new("/optimize-shipping"), &JobRequest { job_id })
            .await
    }

    pub async fn track_shipments(&self, job_id: &str) -> Value {
        self.get(Route::new("/track-shipments").segment(job_id))
            .await
    }

    pub async fn coordinate_consolidation(&self, job_id: &str) -> Value {
        self.post(Route::new("/coordinate-consolidation"), &JobRequest { job_id })
            .await
    }
}
