pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};
pub use config::ClientConfig;

pub use core::ApiClient;
pub use domain::model::{error_response, is_error_response, response_status, Route};
pub use domain::requests::{join_maker_ids, BidWindowRequest};
pub use utils::error::{ClientError, Result};
