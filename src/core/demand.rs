use crate::core::ApiClient;
use crate::domain::model::Route;
use crate::domain::requests::{CategoryRequest, ForecastRequest, DEFAULT_MIN_SCORE, DEFAULT_TIMEFRAME};
use serde_json::Value;

// Demand analysis routes.
impl ApiClient {
    /// `POST /analyze-demand`. `None` analyzes every category.
    pub async fn analyze_demand(&self, category: Option<&str>) -> Value {
        let body = CategoryRequest {
            category: category.unwrap_or(""),
        };
        self.post(Route::new("/analyze-demand"), &body).await
    }

    /// `GET /recommendations?min_score=`, defaulting to a score of 7.0.
    pub async fn recommendations(&self, min_score: Option<f64>) -> Value {
        let route = Route::new("/recommendations")
            .query("min_score", min_score.unwrap_or(DEFAULT_MIN_SCORE));
        self.get(route).await
    }

    /// `POST /forecast`, defaulting to a `30_days` timeframe.
    pub async fn forecast(&self, product_id: &str, timeframe: Option<&str>) -> Value {
        let body = ForecastRequest {
            product_id,
            timeframe: timeframe.unwrap_or(DEFAULT_TIMEFRAME),
        };
        self.post(Route::new("/forecast"), &body).await
    }
}
