use clap::Parser;
use cornerstone_client::config::cli::Cli;
use cornerstone_client::domain::model::is_error_response;
use cornerstone_client::ui::{show_error, show_success, MemoryDocument};
use cornerstone_client::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let client = match cli.build_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };
    tracing::debug!("Using backend at {}", client.base_url());

    let response = cli.command.run(&client).await;
    let failed = is_error_response(&response);

    match &cli.html {
        Some(element_id) => {
            let mut document = MemoryDocument::new().with_element(element_id.clone());
            if failed {
                let message = response
                    .get("error_message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Request failed");
                show_error(&mut document, element_id, message);
            } else {
                show_success(&mut document, element_id, &serde_json::to_string(&response)?);
            }
            println!("{}", document.inner_html(element_id).unwrap_or_default());
        }
        None => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
