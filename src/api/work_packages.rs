use anyhow::Result;

use super::models::{Collection, NewWorkPackage, Priority, Status, WorkPackage};
use super::OpenProjectClient;

impl OpenProjectClient {
    pub async fn list_statuses(&self) -> Result<Vec<Status>> {
        let list: Collection<Status> = self
            .execute_json(self.get("/statuses"), "Listing statuses")
            .await?;
        Ok(list.into_elements())
    }

    pub async fn list_priorities(&self) -> Result<Vec<Priority>> {
        let list: Collection<Priority> = self
            .execute_json(self.get("/priorities"), "Listing priorities")
            .await?;
        Ok(list.into_elements())
    }

    pub async fn create_work_package(&self, work_package: &NewWorkPackage) -> Result<WorkPackage> {
        let subject: String = work_package.subject.chars().take(40).collect();
        let action = format!("Creating work package '{subject}'");

        tracing::debug!(subject = %work_package.subject, "creating work package");
        self.execute_json(self.post("/work_packages").json(work_package), &action)
            .await
    }
}
