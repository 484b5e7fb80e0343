use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use models::validation::Validate;

use crate::errors::ServiceError;
use crate::repository::Repository;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resource service shared by every controller: validates payloads before
/// they reach the repository and reports absence as `Ok(None)`/`Ok(false)`.
pub struct CrudService<R: Repository> {
    repo: Arc<R>,
    entity: &'static str,
    today: fn() -> NaiveDate,
}

impl<R> CrudService<R>
where
    R: Repository,
    R::Input: Validate,
{
    pub fn new(repo: Arc<R>, entity: &'static str) -> Self { Self { repo, entity, today: local_today } }

    /// Override the date used for "not in the future" checks.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn repository(&self) -> &Arc<R> { &self.repo }

    pub fn entity(&self) -> &'static str { self.entity }

    #[instrument(skip_all, fields(entity = self.entity))]
    pub async fn create(&self, input: R::Input) -> Result<R::Record, ServiceError> {
        input.validate((self.today)())?;
        let created = self.repo.insert(input).await?;
        info!("record_created");
        Ok(created)
    }

    pub async fn list_all(&self) -> Result<Vec<R::Record>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(entity = self.entity, count = all.len(), "records_listed");
        Ok(all)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<R::Record>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self, input), fields(entity = self.entity))]
    pub async fn update(&self, id: i32, input: R::Input) -> Result<Option<R::Record>, ServiceError> {
        input.validate((self.today)())?;
        let updated = self.repo.update(id, input).await?;
        if updated.is_some() {
            info!("record_updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self), fields(entity = self.entity))]
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            info!("record_deleted");
        }
        Ok(deleted)
    }
}
