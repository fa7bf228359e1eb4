use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::holidays_model::{AggregationResult, DateCheck};
use hungarian_holidays_sources::{Holiday, WorkDay};

/// Trait for holiday lookup operations.
///
/// Lookups never fail: when no source yields data the result is empty and
/// carries sentinel provenance. `None` means the current calendar year.
#[async_trait]
pub trait HolidayServiceTrait: Send + Sync {
    fn current_year(&self) -> i32;
    async fn get_aggregation(&self, year: Option<i32>) -> Arc<AggregationResult>;
    async fn get_holidays(&self, year: Option<i32>) -> Vec<Holiday>;
    async fn get_workdays(&self, year: Option<i32>) -> Vec<WorkDay>;
    async fn is_holiday(&self, date: NaiveDate) -> bool;
    async fn is_weekend_workday(&self, date: NaiveDate) -> bool;
    async fn check_date(&self, date: NaiveDate) -> DateCheck;
    fn clear_cache(&self);
}
