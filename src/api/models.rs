use serde::{Deserialize, Serialize};

// ── HAL collections ──

#[derive(Debug, Deserialize)]
pub struct Collection<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded<T>>,
}

#[derive(Debug, Deserialize)]
pub struct Embedded<T> {
    pub elements: Option<Vec<T>>,
}

impl<T> Collection<T> {
    /// Embedded elements; a missing `_embedded` or `elements` is empty.
    pub fn into_elements(self) -> Vec<T> {
        self.embedded.and_then(|e| e.elements).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formattable {
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn to(kind: &str, id: u64) -> Self {
        Self {
            href: format!("/api/v3/{kind}/{id}"),
        }
    }
}

// ── Projects ──

#[derive(Debug, Serialize)]
pub struct NewProject<'a> {
    pub name: &'a str,
    pub identifier: &'a str,
    pub description: Formattable,
    pub active: bool,
    pub public: bool,
}

#[derive(Debug, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: Option<String>,
    pub identifier: Option<String>,
}

// ── Types, statuses, priorities ──

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkPackageType {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: u64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Priority {
    pub id: u64,
    pub name: Option<String>,
}

// ── Work packages ──

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkPackageLinks {
    pub project: Link,
    #[serde(rename = "type")]
    pub work_package_type: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWorkPackage {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Formattable>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(rename = "_links")]
    pub links: WorkPackageLinks,
}

#[derive(Debug, Deserialize)]
pub struct WorkPackage {
    pub id: u64,
    pub subject: Option<String>,
}
