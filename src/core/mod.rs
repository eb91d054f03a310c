pub mod bidding;
pub mod demand;
pub mod dispatcher;
pub mod logistics;
pub mod optimization;
pub mod system;
pub mod timeline;
pub mod workflow;

pub use dispatcher::ApiClient;
