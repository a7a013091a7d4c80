use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::core::error::Result;
use crate::features::pandals::dtos::{CreatePandalDto, PandalResponseDto};
use crate::features::pandals::models::{InsertAck, Pandal};
use crate::features::pandals::query::PandalFilter;
use crate::modules::store::PandalStore;
use crate::shared::deadline::Deadline;

/// Service for cataloging pandals
pub struct PandalService {
    store: Arc<dyn PandalStore>,
    operation_timeout: Duration,
}

impl PandalService {
    pub fn new(store: Arc<dyn PandalStore>, operation_timeout: Duration) -> Self {
        Self {
            store,
            operation_timeout,
        }
    }

    /// Assemble and persist a new pandal
    pub async fn create(&self, dto: CreatePandalDto) -> Result<InsertAck> {
        let pandal = Pandal::assemble(dto, Utc::now());
        let deadline = Deadline::after(self.operation_timeout);

        let ack = self
            .store
            .insert(&pandal, deadline)
            .await
            .map_err(|e| e.context("Error while inserting data"))?;

        tracing::info!("Pandal created: id={}, name={}", ack.inserted_id, pandal.name);

        Ok(ack)
    }

    /// List pandals matching `filter`; nearest first for proximity filters
    pub async fn list(&self, filter: &PandalFilter) -> Result<Vec<PandalResponseDto>> {
        let deadline = Deadline::after(self.operation_timeout);
        let mut cursor = self.store.find(filter, deadline);

        let mut pandals = Vec::new();
        while let Some(pandal) = cursor.try_next().await? {
            pandals.push(pandal.into());
        }

        tracing::debug!("Listed {} pandals with filter {:?}", pandals.len(), filter);

        Ok(pandals)
    }
}
