use super::{next_id, same_crop, InMemoryMiddleware, Tables};
use crate::{
    models::{
        CompositeTarget, Page, SearchComposite, StudyInstance, StudyInstanceSearch,
        StudyTransaction, StudyTransactionsSearch, TransactionStatus,
    },
    services::{
        study_instance::MAX_INSTANCES_PER_REQUEST, StudyInstanceService, StudyTransactionsService,
    },
    Error, Result,
};
use async_trait::async_trait;

impl Tables {
    fn instances_of<'a>(
        &'a self,
        crop: &'a str,
        study_id: i32,
    ) -> impl Iterator<Item = &'a StudyInstance> + 'a {
        self.study_instances
            .values()
            .filter(move |i| i.study_id == study_id && same_crop(&i.crop_name, crop))
    }

    fn transactions_of<'a>(
        &'a self,
        crop: &'a str,
        study_id: i32,
    ) -> impl Iterator<Item = &'a StudyTransaction> + 'a {
        self.study_transactions
            .values()
            .filter(move |t| t.study_id == study_id && same_crop(&t.crop_name, crop))
    }
}

#[async_trait]
impl StudyInstanceService for InMemoryMiddleware {
    async fn count_instances(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyInstanceSearch,
    ) -> Result<u64> {
        let tables = self.read()?;
        let count = tables
            .instances_of(crop, study_id)
            .filter(|i| search.matches(i))
            .count();
        Ok(count as u64)
    }

    async fn search_instances(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyInstanceSearch,
        page: Page,
    ) -> Result<Vec<StudyInstance>> {
        let tables = self.read()?;
        let matching = tables
            .instances_of(crop, study_id)
            .filter(|i| search.matches(i))
            .cloned()
            .collect();
        Ok(page.slice(matching))
    }

    async fn get_instance(
        &self,
        crop: &str,
        study_id: i32,
        instance_id: i32,
    ) -> Result<Option<StudyInstance>> {
        let tables = self.read()?;
        let found = tables
            .instances_of(crop, study_id)
            .find(|i| i.instance_id == instance_id)
            .cloned();
        Ok(found)
    }

    async fn create_instances(
        &self,
        crop: &str,
        study_id: i32,
        count: u32,
    ) -> Result<Vec<StudyInstance>> {
        if count == 0 || count > MAX_INSTANCES_PER_REQUEST {
            return Err(Error::invalid(
                "study.instance.count.invalid",
                format!(
                    "Number of instances must be between 1 and {}",
                    MAX_INSTANCES_PER_REQUEST
                ),
            ));
        }

        let mut tables = self.write()?;
        let last_number = tables
            .instances_of(crop, study_id)
            .map(|i| i.instance_number)
            .max()
            .unwrap_or(0);
        let first_id = next_id(&tables.study_instances);

        let created: Vec<StudyInstance> = (0..count as i32)
            .map(|n| StudyInstance {
                instance_id: first_id + n,
                crop_name: crop.to_lowercase(),
                study_id,
                instance_number: last_number + n + 1,
                location_id: None,
                location_name: None,
                has_field_layout: false,
                has_experimental_design: false,
                has_measurements: false,
            })
            .collect();
        for instance in &created {
            tables
                .study_instances
                .insert(instance.instance_id, instance.clone());
        }

        tracing::info!(crop, study_id, count, "Study instances created");
        Ok(created)
    }

    async fn delete_instances(&self, crop: &str, study_id: i32, instance_ids: &[i32]) -> Result<()> {
        let mut tables = self.write()?;
        for id in instance_ids {
            let instance = tables
                .instances_of(crop, study_id)
                .find(|i| i.instance_id == *id)
                .ok_or_else(|| {
                    Error::NotFound(format!("Instance {} in study {}", id, study_id))
                })?;
            if instance.has_measurements {
                return Err(Error::Conflict(format!(
                    "Instance {} has measurements and cannot be deleted",
                    id
                )));
            }
        }

        for id in instance_ids {
            tables.study_instances.remove(id);
        }
        tracing::info!(crop, study_id, count = instance_ids.len(), "Study instances deleted");
        Ok(())
    }
}

#[async_trait]
impl StudyTransactionsService for InMemoryMiddleware {
    async fn count_transactions(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyTransactionsSearch,
    ) -> Result<u64> {
        let tables = self.read()?;
        let count = tables
            .transactions_of(crop, study_id)
            .filter(|t| search.matches(t))
            .count();
        Ok(count as u64)
    }

    async fn search_transactions(
        &self,
        crop: &str,
        study_id: i32,
        search: &StudyTransactionsSearch,
        page: Page,
    ) -> Result<Vec<StudyTransaction>> {
        let tables = self.read()?;
        let matching = tables
            .transactions_of(crop, study_id)
            .filter(|t| search.matches(t))
            .cloned()
            .collect();
        Ok(page.slice(matching))
    }

    async fn cancel_pending_transactions(
        &self,
        crop: &str,
        study_id: i32,
        composite: SearchComposite<StudyTransactionsSearch, i32>,
    ) -> Result<()> {
        let target = composite.into_target()?;
        let mut tables = self.write()?;

        let selected: Vec<&StudyTransaction> = match &target {
            CompositeTarget::Ids(ids) => {
                let found: Vec<&StudyTransaction> = tables
                    .transactions_of(crop, study_id)
                    .filter(|t| ids.contains(&t.transaction_id))
                    .collect();
                if found.len() != ids.len() {
                    let missing: Vec<String> = ids
                        .iter()
                        .filter(|id| !found.iter().any(|t| t.transaction_id == **id))
                        .map(|id| id.to_string())
                        .collect();
                    return Err(Error::NotFound(format!(
                        "Transactions {} in study {}",
                        missing.join(", "),
                        study_id
                    )));
                }
                found
            }
            CompositeTarget::Search(search) => {
                let found: Vec<&StudyTransaction> = tables
                    .transactions_of(crop, study_id)
                    .filter(|t| search.matches(t))
                    .collect();
                if found.is_empty() {
                    return Err(Error::invalid(
                        "study.transactions.none.selected",
                        "No transactions match the search request",
                    ));
                }
                found
            }
        };

        if let Some(tx) = selected
            .iter()
            .find(|t| t.status != TransactionStatus::Pending)
        {
            return Err(Error::Conflict(format!(
                "Transaction {} is not pending",
                tx.transaction_id
            )));
        }

        let ids: Vec<i32> = selected.iter().map(|t| t.transaction_id).collect();
        for id in &ids {
            if let Some(tx) = tables.study_transactions.get_mut(id) {
                tx.status = TransactionStatus::Cancelled;
            }
        }

        tracing::info!(crop, study_id, count = ids.len(), "Pending transactions cancelled");
        Ok(())
    }
}
