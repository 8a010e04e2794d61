use brandkit::api::models::{Collection, Status, WorkPackageType};
use brandkit::api::{instance_origin, normalize_base_url};
use brandkit::cli::{Cli, Commands};
use brandkit::commands::seed::{run, SeedArgs};
use brandkit::seed::{choose_types, demo_plan, SeedContext, TypeChoice, EPICS, TASKS_PER_EPIC};
use chrono::NaiveDate;

fn ty(id: u64, name: &str) -> WorkPackageType {
    WorkPackageType {
        id: Some(id),
        name: Some(name.to_string()),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn cli_in(dir: &std::path::Path) -> Cli {
    Cli {
        command: Commands::Init,
        config: dir.join("brandkit.toml"),
        verbose: false,
    }
}

#[test]
fn base_url_gets_api_suffix() {
    assert_eq!(
        normalize_base_url("https://op.example.com").unwrap(),
        "https://op.example.com/api/v3"
    );
    assert_eq!(
        normalize_base_url("  https://op.example.com///  ").unwrap(),
        "https://op.example.com/api/v3"
    );
    assert_eq!(
        normalize_base_url("https://op.example.com/api/v3/").unwrap(),
        "https://op.example.com/api/v3"
    );
    assert_eq!(
        normalize_base_url("https://op.example.com/api/v3/projects/1").unwrap(),
        "https://op.example.com/api/v3"
    );
    assert!(normalize_base_url("   ").is_err());
}

#[test]
fn origin_strips_api_path() {
    assert_eq!(
        instance_origin("https://op.example.com/api/v3"),
        "https://op.example.com"
    );
}

#[test]
fn types_chosen_by_name() {
    let types = [ty(1, "Task"), ty(2, "Milestone"), ty(5, " Epic ")];
    assert_eq!(
        choose_types(&types).unwrap(),
        TypeChoice { epic: 5, task: 1 }
    );

    let localized = [ty(3, "Phase"), ty(4, "Görev")];
    assert_eq!(
        choose_types(&localized).unwrap(),
        TypeChoice { epic: 3, task: 4 }
    );
}

#[test]
fn types_fall_back_to_available_ones() {
    // No epic: the first type is the epic, the next other one the task.
    let types = [ty(7, "Bug"), ty(8, "Feature")];
    assert_eq!(
        choose_types(&types).unwrap(),
        TypeChoice { epic: 7, task: 8 }
    );

    // A single type serves both roles.
    assert_eq!(
        choose_types(&[ty(9, "Bug")]).unwrap(),
        TypeChoice { epic: 9, task: 9 }
    );
}

#[test]
fn no_types_is_an_error() {
    let err = choose_types(&[]).unwrap_err();
    assert!(err.to_string().contains("No usable work package type"));

    let nameless = [WorkPackageType {
        id: None,
        name: None,
    }];
    assert!(choose_types(&nameless).is_err());
}

#[test]
fn plan_spaces_epics_and_tasks() {
    let plan = demo_plan(date("2026-03-01"));

    assert_eq!(plan.len(), EPICS.len());
    for epic in &plan {
        assert_eq!(epic.tasks.len(), TASKS_PER_EPIC.len());
    }

    assert_eq!(plan[0].item.start, date("2026-03-01"));
    assert_eq!(plan[0].item.due, date("2026-03-11"));
    assert_eq!(plan[1].item.start, date("2026-03-15"));
    assert_eq!(plan[2].item.due, date("2026-04-08"));

    let tasks = &plan[1].tasks;
    assert_eq!(tasks[0].start, date("2026-03-15"));
    assert_eq!(tasks[0].due, date("2026-03-16"));
    assert_eq!(tasks[4].start, date("2026-03-23"));
    assert_eq!(tasks[4].due, date("2026-03-24"));
}

#[test]
fn work_package_body_links_references() {
    let plan = demo_plan(date("2026-03-01"));
    let ctx = SeedContext {
        project_id: 3,
        status_id: Some(1),
        priority_id: None,
    };

    let body = serde_json::to_value(ctx.work_package(&plan[0].tasks[1], 2, Some(40))).unwrap();

    assert_eq!(body["subject"], TASKS_PER_EPIC[1].0);
    assert_eq!(body["description"]["raw"], TASKS_PER_EPIC[1].1);
    assert_eq!(body["startDate"], "2026-03-03");
    assert_eq!(body["dueDate"], "2026-03-04");
    assert_eq!(body["_links"]["project"]["href"], "/api/v3/projects/3");
    assert_eq!(body["_links"]["type"]["href"], "/api/v3/types/2");
    assert_eq!(body["_links"]["status"]["href"], "/api/v3/statuses/1");
    assert_eq!(body["_links"]["parent"]["href"], "/api/v3/work_packages/40");
    assert!(body["_links"].get("priority").is_none());
}

#[test]
fn collections_tolerate_missing_elements() {
    let full: Collection<Status> = serde_json::from_str(
        r#"{ "_embedded": { "elements": [{ "id": 1, "name": "New" }, { "id": 2 }] } }"#,
    )
    .unwrap();
    let ids: Vec<u64> = full.into_elements().iter().map(|s| s.id).collect();
    assert_eq!(ids, [1, 2]);

    let empty: Collection<Status> = serde_json::from_str(r#"{ "_embedded": {} }"#).unwrap();
    assert!(empty.into_elements().is_empty());

    let bare: Collection<Status> = serde_json::from_str(r#"{ "total": 0 }"#).unwrap();
    assert!(bare.into_elements().is_empty());
}

#[tokio::test]
async fn dry_run_needs_no_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let args = SeedArgs {
        dry_run: true,
        ..Default::default()
    };
    run(&cli_in(dir.path()), args).await.unwrap();

    // An unreachable URL is fine too: nothing is sent.
    let args = SeedArgs {
        url: Some("http://127.0.0.1:1".into()),
        dry_run: true,
        ..Default::default()
    };
    run(&cli_in(dir.path()), args).await.unwrap();
}

#[tokio::test]
async fn missing_credentials_are_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let args = SeedArgs {
        url: Some("https://op.example.com".into()),
        ..Default::default()
    };
    let err = run(&cli_in(dir.path()), args).await.unwrap_err();
    assert!(err.to_string().contains("OPENPROJECT_URL and OPENPROJECT_API_KEY"));

    let args = SeedArgs {
        url: Some("  ".into()),
        api_key: Some("secret".into()),
        ..Default::default()
    };
    assert!(run(&cli_in(dir.path()), args).await.is_err());
}
