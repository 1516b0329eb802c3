use clap::Parser;
use colored::*;
use std::process;
use std::sync::Arc;

use chat2rec::api::ApiClient;
use chat2rec::chat::ChatController;
use chat2rec::cli::Args;
use chat2rec::config::Config;
use chat2rec::models::Session;
use chat2rec::recommend::HttpRecommendationClient;
use chat2rec::session::{HttpSessionStore, SessionCache, SessionPointer};
use chat2rec::ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Handle --clear option
    if args.clear_history {
        match SessionCache::new().clear_all() {
            Ok(_) => {
                println!("{}", "All cached conversation pointers cleared.".green());
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", format!("Error clearing cache: {}", e).red());
                process::exit(1);
            }
        }
    }

    if args.query.is_empty() {
        print_usage();
        process::exit(1);
    }

    let query = args.query.join(" ");

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let api = match ApiClient::new(
        &config.api_endpoint,
        config.api_key.as_deref(),
        config.request_timeout,
    ) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!("[rec] Using backend: {}", api.base_url()).dimmed()
        );
        eprintln!("{}", format!("[rec] User: {}", config.user_id).dimmed());
    }

    let store = Arc::new(HttpSessionStore::new(api.clone()));
    let recommender = Arc::new(HttpRecommendationClient::new(api));

    // Find a session to continue, unless a new one was requested
    let cache = SessionCache::new();
    let pointer = if args.new_conversation {
        None
    } else if args.force_continue {
        cache.find_latest(&config.user_id)
    } else {
        cache.find_recent(&config.user_id)
    };

    let mut controller = match pointer {
        Some(pointer) => {
            if config.verbose {
                eprintln!(
                    "{}",
                    format!("[rec] Resuming session {}", pointer.session_id).dimmed()
                );
            }
            let session = Session::new(pointer.session_id, config.user_id.clone());
            ChatController::resume(
                store,
                recommender,
                session,
                config.top_k,
                config.verbose,
            )
            .await?
        }
        None => {
            match ChatController::start(
                store,
                recommender,
                &config.user_id,
                config.top_k,
                config.verbose,
            )
            .await
            {
                Ok(controller) => controller,
                Err(e) => {
                    eprintln!("{} {}", "Error:".red(), e);
                    process::exit(1);
                }
            }
        }
    };

    if args.show_history {
        ui::display_history(controller.messages(), config.verbose);
    }

    let reply = controller.submit(&query).await?;
    ui::display_message(reply, config.verbose);

    // Remember the session for the next invocation
    let pointer = SessionPointer::new(&controller.session().id, &config.user_id);
    if let Err(e) = cache.save(&pointer) {
        if config.verbose {
            eprintln!(
                "{}",
                format!("[rec] Warning: Failed to cache session pointer: {}", e).dimmed()
            );
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!("{}", "Usage: rec [OPTIONS] <query>".red());
    eprintln!(
        "{}",
        "  -n, --new                  Start a new conversation".dimmed()
    );
    eprintln!(
        "{}",
        "  -c, --continue             Continue previous conversation even if expired".dimmed()
    );
    eprintln!(
        "{}",
        "      --clear                Clear all cached conversation pointers".dimmed()
    );
    eprintln!(
        "{}",
        "      --user                 User id the conversation belongs to".dimmed()
    );
    eprintln!(
        "{}",
        "      --top-k                Maximum number of recommendations per query".dimmed()
    );
    eprintln!(
        "{}",
        "      --history              Show the prior conversation before the new turn".dimmed()
    );
    eprintln!(
        "{}",
        "      --api-endpoint         Backend base URL".dimmed()
    );
}
