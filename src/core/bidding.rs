use crate::core::ApiClient;
use crate::domain::model::Route;
use crate::domain::requests::{BidWindowRequest, JobRequest, NotifyWinnersRequest};
use serde_json::Value;

// Bid coordination routes.
impl ApiClient {
    /// `POST /create-bid`.
    pub async fn create_bid_window(&self, request: &BidWindowRequest) -> Value {
        self.post(Route::new("/create-bid"), request).await
    }

    /// `GET /bid-status/{job_id}`.
    pub async fn bid_status(&self, job_id: &str) -> Value {
        self.get(Route::new("/bid-status").segment(job_id)).await
    }

    /// `POST /close-bid`.
    pub async fn close_bid_window(&self, job_id: &str) -> Value {
        self.post(Route::new("/close-bid"), &JobRequest { job_id })
            .await
    }

    /// `POST /notify-winners`. `winning_maker_ids` is comma-separated and
    /// passed through as-is.
    pub async fn notify_winners(&self, job_id: &str, winning_maker_ids: &str) -> Value {
        let body = NotifyWinnersRequest {
            job_id,
            winning_maker_ids,
        };
        self.post(Route::new("/notify-winners"), &body).await
    }
}
