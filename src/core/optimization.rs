use crate::core::ApiClient;
use crate::domain::model::Route;
use crate::domain::requests::OptimizeBidsRequest;
use serde_json::Value;

// Bid optimization routes.
impl ApiClient {
    pub async fn optimize_bids(&self, job_id: &str, required_qty: u32, required_skill: &str) -> Value {
        let body = OptimizeBidsRequest {
            job_id,
            required_qty,
            required_skill,
        };
        self.post(Route::new("/optimize-bids"), &body).await
    }

    pub async fn job_details(&self) -> Value {
        self.get(Route::new("/job-details")).await
    }

    /// `GET /manufacturers?skill=`. `None` lists every manufacturer.
    pub async fn list_manufacturers(&self, skill: Option<&str>) -> Value {
        self.get(Route::new("/manufacturers").query("skill", skill.unwrap_or("")))
            .await
    }
}
