//! Demo content for the mobile app's OpenProject test instance: one project
//! with a few epics, each holding the same set of tasks.

use std::collections::HashMap;

use anyhow::{bail, Result};
use chrono::{Days, NaiveDate};

use crate::api::models::{Formattable, Link, NewWorkPackage, WorkPackageLinks, WorkPackageType};

pub const DEFAULT_PROJECT_NAME: &str = "Mobile Demo";
pub const DEFAULT_PROJECT_IDENTIFIER: &str = "mobile-demo";
pub const PROJECT_DESCRIPTION: &str =
    "Test environment for the mobile OpenProject app. Contains sample epics and tasks.";

/// Days between the start of consecutive epics.
const EPIC_SPACING: u64 = 14;
const EPIC_LENGTH: u64 = 10;
const TASK_SPACING: u64 = 2;
const TASK_LENGTH: u64 = 1;

pub const EPICS: &[(&str, &str)] = &[
    (
        "Mobile app v1 - Core flows",
        "Finish login, project selection, the work package list and detail screens. \
         Notifications and time tracking are in scope for this epic.",
    ),
    (
        "Notifications and working-hours reminders",
        "Show OpenProject notifications on mobile, working-hours reminder preferences and \
         integration with the device notification settings.",
    ),
    (
        "Quick work package updates",
        "Update status, assignee, dates and priority quickly from mobile; \
         add comments and follow the activity stream.",
    ),
];

pub const TASKS_PER_EPIC: &[(&str, &str)] = &[
    (
        "Clarify requirements and acceptance criteria",
        "Define them in the product and technical docs.",
    ),
    ("Design / mockup approval", "Get sign-off on screen flows and UI."),
    ("Development and unit tests", "Write the code and tests."),
    ("Code review and QA", "Review and manual testing."),
    ("Demo and documentation", "Stakeholder demo and usage notes."),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedItem {
    pub subject: String,
    pub description: String,
    pub start: NaiveDate,
    pub due: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEpic {
    pub item: PlannedItem,
    pub tasks: Vec<PlannedItem>,
}

fn offset(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Schedules the fixed epics and tasks relative to `today`.
pub fn demo_plan(today: NaiveDate) -> Vec<PlannedEpic> {
    EPICS
        .iter()
        .enumerate()
        .map(|(i, (subject, description))| {
            let epic_start = i as u64 * EPIC_SPACING;
            let tasks = TASKS_PER_EPIC
                .iter()
                .enumerate()
                .map(|(j, (task_subject, task_description))| {
                    let task_start = epic_start + j as u64 * TASK_SPACING;
                    PlannedItem {
                        subject: task_subject.to_string(),
                        description: task_description.to_string(),
                        start: offset(today, task_start),
                        due: offset(today, task_start + TASK_LENGTH),
                    }
                })
                .collect();

            PlannedEpic {
                item: PlannedItem {
                    subject: subject.to_string(),
                    description: description.to_string(),
                    start: offset(today, epic_start),
                    due: offset(today, epic_start + EPIC_LENGTH),
                },
                tasks,
            }
        })
        .collect()
}

/// Type ids used for epics and for their child tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeChoice {
    pub epic: u64,
    pub task: u64,
}

/// Picks the epic and task types from whatever the project has enabled,
/// falling back to other types when the named ones are missing.
pub fn choose_types(types: &[WorkPackageType]) -> Result<TypeChoice> {
    let by_name: HashMap<String, u64> = types
        .iter()
        .filter_map(|t| {
            let id = t.id?;
            let name = t.name.as_deref()?.trim();
            (!name.is_empty()).then(|| (name.to_lowercase(), id))
        })
        .collect();
    let first = types.first().and_then(|t| t.id);

    let mut epic = by_name
        .get("epic")
        .or_else(|| by_name.get("phase"))
        .copied()
        .or(first);

    let task = by_name
        .get("task")
        .or_else(|| by_name.get("görev"))
        .copied()
        .or_else(|| types.iter().filter_map(|t| t.id).find(|&id| Some(id) != epic))
        .or(first);

    if epic.is_none() {
        epic = task;
    }

    match (epic, task) {
        (Some(epic), Some(task)) => Ok(TypeChoice { epic, task }),
        _ => bail!(
            "No usable work package type in this project. Enable at least one type in the project settings."
        ),
    }
}

/// References shared by every work package created in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedContext {
    pub project_id: u64,
    pub status_id: Option<u64>,
    pub priority_id: Option<u64>,
}

impl SeedContext {
    pub fn work_package(
        &self,
        item: &PlannedItem,
        type_id: u64,
        parent_id: Option<u64>,
    ) -> NewWorkPackage {
        NewWorkPackage {
            subject: item.subject.clone(),
            description: (!item.description.is_empty()).then(|| Formattable {
                raw: item.description.clone(),
            }),
            start_date: Some(item.start.format("%Y-%m-%d").to_string()),
            due_date: Some(item.due.format("%Y-%m-%d").to_string()),
            links: WorkPackageLinks {
                project: Link::to("projects", self.project_id),
                work_package_type: Link::to("types", type_id),
                status: self.status_id.map(|id| Link::to("statuses", id)),
                priority: self.priority_id.map(|id| Link::to("priorities", id)),
                parent: parent_id.map(|id| Link::to("work_packages", id)),
            },
        }
    }
}
