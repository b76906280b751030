// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line client for the FitTrack activity service

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use tracing::info;

use fittrack_client::api::{ActivityService, HttpActivityService};
use fittrack_client::config::ClientConfig;
use fittrack_client::detail::ActivityDetail;
use fittrack_client::logging::LoggingConfig;
use fittrack_client::models::ActivityType;

#[derive(Parser, Debug)]
#[command(author, version, about = "FitTrack activity client", long_about = None)]
struct Args {
    /// Override the API base URL from the environment
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the user's activities
    List,
    /// Show one activity with its segmented recommendation
    Show {
        /// Activity identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }

    let service = HttpActivityService::new(
        config.api_base_url.clone(),
        config.user_id.clone(),
        env::var("FITTRACK_ACCESS_TOKEN").ok(),
    );

    match args.command {
        Command::List => {
            let activities = service.get_activities().await?;
            info!("Fetched {} activities", activities.len());
            for activity in &activities {
                let activity_type = activity
                    .activity_type
                    .as_ref()
                    .unwrap_or(&ActivityType::DEFAULT_DISPLAY);
                println!(
                    "{}  {:<10} {:>6.1} min  {:>7.1} kcal",
                    activity.id,
                    activity_type.display_name(),
                    activity.duration_minutes.unwrap_or_default(),
                    activity.calories_burned.unwrap_or_default(),
                );
            }
        }
        Command::Show { id } => {
            let detail = ActivityDetail::load(&service, &id, None).await?;
            let activity = &detail.activity;

            let activity_type = activity
                .activity_type
                .as_ref()
                .unwrap_or(&ActivityType::DEFAULT_DISPLAY);
            println!("{} ({})", activity_type.display_name(), activity.id);
            if let Some(duration) = activity.duration_minutes {
                println!("  Duration: {duration} min");
            }
            if let Some(calories) = activity.calories_burned {
                println!("  Calories: {calories} kcal");
            }
            if let Some(created_at) = activity.created_at {
                println!("  Logged:   {created_at}");
            }

            if detail.sections.is_empty() {
                println!("\nNo recommendation yet.");
            } else {
                println!("\nRecommendations");
                for section in &detail.sections {
                    match &section.title {
                        Some(title) => println!("  [{title}] {}", section.content),
                        None => println!("  {}", section.content),
                    }
                }
            }

            for (label, block) in [
                ("Improvements", &activity.improvements),
                ("Suggestions", &activity.suggestions),
                ("Safety", &activity.safety),
            ] {
                if let Some(block) = block {
                    println!("\n{label}");
                    for item in block.items() {
                        println!("  - {item}");
                    }
                }
            }
        }
    }

    Ok(())
}
