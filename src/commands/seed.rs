use std::time::Duration;

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use colored::Colorize;

use crate::api::{instance_origin, normalize_base_url, OpenProjectClient};
use crate::cli::Cli;
use crate::config::Config;
use crate::seed::{
    choose_types, demo_plan, SeedContext, EPICS, PROJECT_DESCRIPTION, TASKS_PER_EPIC,
};

const DRY_RUN_URL: &str = "https://openproject.example.com";

#[derive(Debug, Default)]
pub struct SeedArgs {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub project_name: Option<String>,
    pub project_identifier: Option<String>,
    pub dry_run: bool,
}

/// What one seeding run created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub project_id: u64,
    pub epic_ids: Vec<u64>,
    pub task_count: usize,
}

pub async fn run(cli: &Cli, args: SeedArgs) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let project_name = args.project_name.unwrap_or(config.seed.project_name);
    let project_identifier = args
        .project_identifier
        .unwrap_or(config.seed.project_identifier);

    let url = args
        .url
        .or(config.seed.url)
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());
    let api_key = args
        .api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    if args.dry_run {
        let base = normalize_base_url(url.as_deref().unwrap_or(DRY_RUN_URL))?;
        println!("{} API base: {}", "ℹ".blue(), base);
        println!("{} Project: {} ({})", "ℹ".blue(), project_name, project_identifier);
        println!("{} Epics: {}", "ℹ".blue(), EPICS.len());
        println!("{} Tasks per epic: {}", "ℹ".blue(), TASKS_PER_EPIC.len());
        println!("\n{} Dry run: no API calls made.", "ℹ".blue());
        return Ok(());
    }

    let (Some(url), Some(api_key)) = (url, api_key) else {
        bail!(
            "OPENPROJECT_URL and OPENPROJECT_API_KEY are required.\n\
             Set them in the environment or pass --url ... --api-key ..."
        );
    };

    let base = normalize_base_url(&url)?;
    let client = OpenProjectClient::new(
        base.clone(),
        api_key,
        Duration::from_secs(config.seed.timeout_secs),
    )?;

    let today = Local::now().date_naive();
    let summary = seed_demo(&client, &project_name, &project_identifier, today).await?;

    let origin = instance_origin(&base);
    println!("\n{} Done. When connecting from the mobile app:", "✓".green());
    println!("  Instance: {origin}");
    println!("  Default project: {} (id={})", project_name, summary.project_id);
    println!("  Project URL: {origin}/projects/{project_identifier}");
    Ok(())
}

/// Creates the demo project and its epics/tasks. Any failed request aborts
/// the run; items created before it are left in place.
pub async fn seed_demo(
    client: &OpenProjectClient,
    project_name: &str,
    project_identifier: &str,
    today: NaiveDate,
) -> Result<SeedSummary> {
    let project = client
        .create_project(project_name, project_identifier, PROJECT_DESCRIPTION)
        .await?;
    println!(
        "{} Created project: {} (id={})",
        "✓".green(),
        project.name.as_deref().unwrap_or(project_name),
        project.id
    );

    let types = client.list_project_types(project.id).await?;
    let choice = choose_types(&types)?;
    tracing::debug!(epic = choice.epic, task = choice.task, "chose work package types");

    let status_id = client.list_statuses().await?.first().map(|s| s.id);
    let priority_id = client.list_priorities().await?.first().map(|p| p.id);

    let ctx = SeedContext {
        project_id: project.id,
        status_id,
        priority_id,
    };

    let mut summary = SeedSummary {
        project_id: project.id,
        epic_ids: Vec::new(),
        task_count: 0,
    };

    for epic in demo_plan(today) {
        let created = client
            .create_work_package(&ctx.work_package(&epic.item, choice.epic, None))
            .await?;
        println!("  Epic: {} (id={})", epic.item.subject, created.id);
        summary.epic_ids.push(created.id);

        for task in &epic.tasks {
            let child = client
                .create_work_package(&ctx.work_package(task, choice.task, Some(created.id)))
                .await?;
            println!("    Task: {} (id={})", task.subject, child.id);
            summary.task_count += 1;
        }
    }

    Ok(summary)
}
