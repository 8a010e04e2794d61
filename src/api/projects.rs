use anyhow::Result;

use super::models::{Collection, Formattable, NewProject, Project, WorkPackageType};
use super::OpenProjectClient;

impl OpenProjectClient {
    pub async fn create_project(
        &self,
        name: &str,
        identifier: &str,
        description: &str,
    ) -> Result<Project> {
        let body = NewProject {
            name,
            identifier,
            description: Formattable {
                raw: description.to_string(),
            },
            active: true,
            public: false,
        };

        tracing::debug!(name, identifier, "creating project");
        self.execute_json(self.post("/projects").json(&body), "Creating project")
            .await
    }

    /// Work package types enabled in the project.
    pub async fn list_project_types(&self, project_id: u64) -> Result<Vec<WorkPackageType>> {
        let path = format!("/projects/{project_id}/types");
        let list: Collection<WorkPackageType> = self
            .execute_json(self.get(&path), "Listing project types")
            .await?;
        Ok(list.into_elements())
    }
}
