use chrono::NaiveDate;
use serde::Serialize;

// Field names below are the backend's JSON keys; do not rename.

pub const DEFAULT_MIN_SCORE: f64 = 7.0;
pub const DEFAULT_TIMEFRAME: &str = "30_days";
pub const DEFAULT_BID_DURATION_HOURS: u32 = 96;

#[derive(Debug, Serialize)]
pub(crate) struct CategoryRequest<'a> {
    pub category: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ForecastRequest<'a> {
    pub product_id: &'a str,
    pub timeframe: &'a str,
}

/// Opens a bid window for a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidWindowRequest {
    pub job_id: String,
    pub product_name: String,
    pub required_qty: u32,
    pub required_skill: String,
    pub duration_hours: u32,
}

impl BidWindowRequest {
    pub fn new(
        job_id: impl Into<String>,
        product_name: impl Into<String>,
        required_qty: u32,
        required_skill: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            product_name: product_name.into(),
            required_qty,
            required_skill: required_skill.into(),
            duration_hours: DEFAULT_BID_DURATION_HOURS,
        }
    }

    pub fn with_duration_hours(mut self, duration_hours: u32) -> Self {
        self.duration_hours = duration_hours;
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct JobRequest<'a> {
    pub job_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NotifyWinnersRequest<'a> {
    pub job_id: &'a str,
    /// Comma-separated maker ids.
    pub winning_maker_ids: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct OptimizeBidsRequest<'a> {
    pub job_id: &'a str,
    pub required_qty: u32,
    pub required_skill: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TimelineUpdateRequest<'a> {
    pub maker_id: &'a str,
    /// Serialized as `YYYY-MM-DD`.
    pub new_completion_date: NaiveDate,
    pub reason: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageRequest<'a> {
    pub maker_id: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LogisticsPlanRequest<'a> {
    pub job_id: &'a str,
    /// Comma-separated maker ids.
    pub winning_makers: &'a str,
}

/// Joins maker ids into the comma-separated form the bidding and logistics
/// routes expect.
pub fn join_maker_ids<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
