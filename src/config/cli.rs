use crate::config::{ClientConfig, BASE_URL_ENV};
use crate::core::ApiClient;
use crate::domain::requests::{join_maker_ids, BidWindowRequest};
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cornerstone")]
#[command(about = "Call the Cornerstone manufacturing backend from the command line")]
pub struct Cli {
    /// API base URL, including the `/api` prefix
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// TOML config file with a [client] section
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render the outcome as a banner for this element id instead of printing JSON
    #[arg(long, value_name = "ELEMENT_ID")]
    pub html: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Config file, then environment, then `--base-url`.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let config = ClientConfig::load(self.config.as_deref())?;
        Ok(match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.clone()),
            None => config,
        })
    }

    /// Loads, validates and builds the client in one step, so every config
    /// failure surfaces through the same error.
    pub fn build_client(&self) -> Result<ApiClient> {
        self.client_config()?.build_client()
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze market trends
    AnalyzeDemand {
        #[arg(long)]
        category: Option<String>,
    },
    /// Products whose demand score is at least --min-score (default 7.0)
    Recommendations {
        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Demand forecast for one product (default timeframe 30_days)
    Forecast {
        product_id: String,
        #[arg(long)]
        timeframe: Option<String>,
    },
    /// Open a bid window (default 96 hours)
    CreateBid {
        job_id: String,
        product_name: String,
        required_qty: u32,
        required_skill: String,
        #[arg(long)]
        duration_hours: Option<u32>,
    },
    BidStatus {
        job_id: String,
    },
    CloseBid {
        job_id: String,
    },
    NotifyWinners {
        job_id: String,
        #[arg(value_delimiter = ',', required = true)]
        maker_ids: Vec<String>,
    },
    OptimizeBids {
        job_id: String,
        required_qty: u32,
        required_skill: String,
    },
    JobDetails,
    Manufacturers {
        #[arg(long)]
        skill: Option<String>,
    },
    /// Move a maker's completion date (YYYY-MM-DD)
    UpdateTimeline {
        maker_id: String,
        new_completion_date: NaiveDate,
        #[arg(long)]
        reason: Option<String>,
    },
    TimelineStatus {
        #[arg(long)]
        maker_id: Option<String>,
    },
    SendMessage {
        maker_id: String,
        message: String,
    },
    PlanLogistics {
        job_id: String,
        #[arg(value_delimiter = ',', required = true)]
        maker_ids: Vec<String>,
    },
    OptimizeShipping {
        job_id: String,
    },
    TrackShipments {
        job_id: String,
    },
    CoordinateConsolidation {
        job_id: String,
    },
    /// Run the whole workflow with the backend sequencing each step
    WorkflowFlask,
    /// Run the whole workflow through the backend's master agent
    WorkflowAdk,
    Health,
    Info,
}

impl Command {
    pub async fn run(&self, client: &ApiClient) -> Value {
        match self {
            Command::AnalyzeDemand { category } => client.analyze_demand(category.as_deref()).await,
            Command::Recommendations { min_score } => client.recommendations(*min_score).await,
            Command::Forecast {
                product_id,
                timeframe,
            } => client.forecast(product_id, timeframe.as_deref()).await,
            Command::CreateBid {
                job_id,
                product_name,
                required_qty,
                required_skill,
                duration_hours,
            } => {
                let mut request =
                    BidWindowRequest::new(job_id, product_name, *required_qty, required_skill);
                if let Some(hours) = duration_hours {
                    request = request.with_duration_hours(*hours);
                }
                client.create_bid_window(&request).await
            }
            Command::BidStatus { job_id } => client.bid_status(job_id).await,
            Command::CloseBid { job_id } => client.close_bid_window(job_id).await,
            Command::NotifyWinners { job_id, maker_ids } => {
                client
                    .notify_winners(job_id, &join_maker_ids(maker_ids))
                    .await
            }
            Command::OptimizeBids {
                job_id,
                required_qty,
                required_skill,
            } => {
                client
                    .optimize_bids(job_id, *required_qty, required_skill)
                    .await
            }
            Command::JobDetails => client.job_details().await,
            Command::Manufacturers { skill } => client.list_manufacturers(skill.as_deref()).await,
            Command::UpdateTimeline {
                maker_id,
                new_completion_date,
                reason,
            } => {
                client
                    .update_timeline(maker_id, *new_completion_date, reason.as_deref())
                    .await
            }
            Command::TimelineStatus { maker_id } => {
                client.timeline_status(maker_id.as_deref()).await
            }
            Command::SendMessage { maker_id, message } => {
                client.send_message(maker_id, message).await
            }
            Command::PlanLogistics { job_id, maker_ids } => {
                client
                    .plan_logistics(job_id, &join_maker_ids(maker_ids))
                    .await
            }
            Command::OptimizeShipping { job_id } => client.optimize_shipping(job_id).await,
            Command::TrackShipments { job_id } => client.track_shipments(job_id).await,
            Command::CoordinateConsolidation { job_id } => {
                client.coordinate_consolidation(job_id).await
            }
            Command::WorkflowFlask => client.run_workflow_flask().await,
            Command::WorkflowAdk => client.run_workflow_adk().await,
            Command::Health => client.health().await,
            Command::Info => client.api_info().await,
        }
    }
}
