#![cfg(feature = "cli")]

use anyhow::Result;
use clap::Parser;
use cornerstone_client::Cli;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_create_bid_command_applies_default_duration() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/create-bid").json_body(json!({
            "job_id": "JOB_1",
            "product_name": "Widget",
            "required_qty": 500,
            "required_skill": "CNC",
            "duration_hours": 96
        }));
        then.status(200).json_body(json!({"status": "success"}));
    });

    let base_url = server.url("/api");
    let cli = Cli::try_parse_from([
        "cornerstone",
        "--base-url",
        base_url.as_str(),
        "create-bid",
        "JOB_1",
        "Widget",
        "500",
        "CNC",
    ])?;
    let client = cli.client_config()?.build_client()?;
    let response = cli.command.run(&client).await;

    mock.assert();
    assert_eq!(response["status"], "success");
    Ok(())
}

#[tokio::test]
async fn test_plan_logistics_command_joins_maker_ids() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/plan-logistics").json_body(json!({
            "job_id": "JOB_1",
            "winning_makers": "MAKER_001,MAKER_002,MAKER_005"
        }));
        then.status(200).json_body(json!({"status": "success"}));
    });

    let base_url = server.url("/api");
    let cli = Cli::try_parse_from([
        "cornerstone",
        "--base-url",
        base_url.as_str(),
        "plan-logistics",
        "JOB_1",
        "MAKER_001,MAKER_002",
        "MAKER_005",
    ])?;
    let client = cli.client_config()?.build_client()?;
    cli.command.run(&client).await;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_recommendations_command_forwards_min_score() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/recommendations")
            .query_param("min_score", "8");
        then.status(200).json_body(json!({"status": "success"}));
    });

    let base_url = server.url("/api");
    let cli = Cli::try_parse_from([
        "cornerstone",
        "--base-url",
        base_url.as_str(),
        "recommendations",
        "--min-score",
        "8",
    ])?;
    let client = cli.client_config()?.build_client()?;
    cli.command.run(&client).await;

    mock.assert();
    Ok(())
}
