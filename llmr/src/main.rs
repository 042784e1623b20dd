#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::io::Write;

use anyhow::Context;
use args::{Args, Command};
use clap::Parser;
use llmr_client::{LlmrClient, SearchRequest, Site, SiteDirectory, SiteSelector};
use llmr_config::Config;
use serde_json::Value;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load_or_default(&args.config)?;

    llmr_telemetry::init(&config.telemetry, args.log_filter.as_deref())?;

    tracing::debug!(config_path = %args.config.display(), "configuration loaded");

    let command = args.command.clone().unwrap_or(Command::Example);
    run(command, &args, &config, &mut std::io::stdout()).await
}

async fn run(command: Command, args: &Args, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Example => {
            let client = build_client(args, config)?;

            let results = client.search(&SearchRequest::new("AI tools").per_page(5)).await?;
            print_json(out, &results)?;

            let business = client.get_business_info().await?;
            print_json(out, &business)?;
        }
        Command::Search {
            query,
            per_page,
            post_type,
        } => {
            let client = build_client(args, config)?;
            let req = SearchRequest::new(query).per_page(per_page).post_type(post_type);
            print_json(out, &client.search(&req).await?)?;
        }
        Command::Business => print_json(out, &build_client(args, config)?.get_business_info().await?)?,
        Command::Discovery => print_json(out, &build_client(args, config)?.get_discovery().await?)?,
        Command::Contact => print_json(out, &build_client(args, config)?.get_contact_info().await?)?,
        Command::Services => print_json(out, &build_client(args, config)?.get_services().await?)?,
        Command::Booking => print_json(out, &build_client(args, config)?.get_booking().await?)?,
        Command::Sites => {
            let sites = site_directory(config);
            let listing: Vec<Value> = sites
                .sites()
                .map(|(id, site)| {
                    serde_json::json!({
                        "id": id,
                        "name": site.name,
                        "url": site.url,
                        "tags": site.tags,
                    })
                })
                .collect();
            print_json(out, &Value::Array(listing))?;
        }
        Command::SearchSites { query, site, tag } => {
            let selector = match (site, tag) {
                (Some(id), _) => SiteSelector::Named(id),
                (None, Some(tag)) => SiteSelector::Tagged(tag),
                (None, None) => SiteSelector::All,
            };

            let sites = site_directory(config);
            if sites.is_empty() {
                tracing::warn!("no sites configured");
            }

            let results = sites.search(&SearchRequest::new(query), &selector).await?;
            print_json(out, &serde_json::to_value(results)?)?;
        }
    }

    Ok(())
}

/// Build the single-site client, preferring `--base-url` over the config file
fn build_client(args: &Args, config: &Config) -> anyhow::Result<LlmrClient> {
    let base_url = args
        .base_url
        .clone()
        .or_else(|| config.base_url.as_ref().map(ToString::to_string))
        .context("no base URL configured (pass --base-url or set base_url in the config file)")?;

    let client = LlmrClient::new(&base_url);

    match config.timeout() {
        Some(timeout) => Ok(client.with_timeout(timeout)?),
        None => Ok(client),
    }
}

fn site_directory(config: &Config) -> SiteDirectory {
    let directory: SiteDirectory = config
        .sites
        .iter()
        .map(|(id, site)| {
            let site = Site {
                name: site.name.clone(),
                url: site.url.to_string(),
                tags: site.tags.clone(),
            };
            (id.clone(), site)
        })
        .collect();

    match config.timeout() {
        Some(timeout) => directory.with_timeout(timeout),
        None => directory,
    }
}

/// Write a value as pretty JSON followed by a newline
fn print_json(out: &mut impl Write, value: &Value) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
