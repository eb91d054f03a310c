use crate::core::ApiClient;
use crate::domain::model::Route;
use serde_json::{Map, Value};

// Orchestrated workflow triggers. Both send an empty JSON object.
impl ApiClient {
    /// Runs the full demand -> bid -> optimize -> logistics chain with the
    /// backend calling each step itself.
    pub async fn run_workflow_flask(&self) -> Value {
        self.post(Route::new("/complete-workflow-flask"), &Map::new())
            .await
    }

    /// Same chain, driven by the backend's sequential master agent.
    pub async fn run_workflow_adk(&self) -> Value {
        self.post(Route::new("/complete-workflow-adk"), &Map::new())
            .await
    }
}
