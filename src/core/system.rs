use crate::core::ApiClient;
use crate::domain::model::Route;
use serde_json::Value;

impl ApiClient {
    /// `GET /health`: agent liveness report.
    pub async fn health(&self) -> Value {
        self.get(Route::new("/health")).await
    }

    /// `GET /info`: the backend's route listing.
    pub async fn api_info(&self) -> Value {
        self.get(Route::new("/info")).await
    }
}
