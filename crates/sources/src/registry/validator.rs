//! Candidate validation.
//!
//! Sources return candidates; only records that pass these checks reach an
//! aggregation result:
//! - the date lies in the requested year
//! - no other record in the same list has the same date (first one wins)
//! - workdays fall on a Saturday or Sunday

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use log::debug;
use thiserror::Error;

use crate::models::{is_weekend, Holiday, WorkDay};

/// Why a candidate was discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CandidateIssue {
    #[error("{date} is outside {year}")]
    OutOfYear { date: NaiveDate, year: i32 },

    #[error("{0} is listed more than once")]
    DuplicateDate(NaiveDate),

    #[error("{0} is not a Saturday or Sunday")]
    NotWeekend(NaiveDate),
}

/// Filters malformed candidates out of source results.
#[derive(Clone, Copy, Debug, Default)]
pub struct CandidateValidator;

impl CandidateValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a date against the requested year.
    pub fn check_year(&self, date: NaiveDate, year: i32) -> Result<(), CandidateIssue> {
        if date.year() == year {
            Ok(())
        } else {
            Err(CandidateIssue::OutOfYear { date, year })
        }
    }

    /// Check a workday candidate's year and weekday.
    pub fn check_workday(&self, workday: &WorkDay, year: i32) -> Result<(), CandidateIssue> {
        self.check_year(workday.date, year)?;
        if is_weekend(workday.date) {
            Ok(())
        } else {
            Err(CandidateIssue::NotWeekend(workday.date))
        }
    }

    /// Holidays of `year`, one per date, sorted by date.
    pub fn sanitize_holidays(
        &self,
        source_name: &str,
        year: i32,
        holidays: Vec<Holiday>,
    ) -> Vec<Holiday> {
        let mut seen = HashSet::new();
        let mut valid: Vec<Holiday> = holidays
            .into_iter()
            .filter(|holiday| {
                let check = self.check_year(holiday.date, year).and_then(|_| {
                    if seen.insert(holiday.date) {
                        Ok(())
                    } else {
                        Err(CandidateIssue::DuplicateDate(holiday.date))
                    }
                });
                log_discard(source_name, "holiday", check)
            })
            .collect();
        valid.sort_by_key(|h| h.date);
        valid
    }

    /// Weekend workdays of `year`, one per date, sorted by date.
    pub fn sanitize_workdays(
        &self,
        source_name: &str,
        year: i32,
        workdays: Vec<WorkDay>,
    ) -> Vec<WorkDay> {
        let mut seen = HashSet::new();
        let mut valid: Vec<WorkDay> = workdays
            .into_iter()
            .filter(|workday| {
                let check = self.check_workday(workday, year).and_then(|_| {
                    if seen.insert(workday.date) {
                        Ok(())
                    } else {
                        Err(CandidateIssue::DuplicateDate(workday.date))
                    }
                });
                log_discard(source_name, "workday", check)
            })
            .collect();
        valid.sort_by_key(|w| w.date);
        valid
    }
}

fn log_discard(source_name: &str, kind: &str, check: Result<(), CandidateIssue>) -> bool {
    match check {
        Ok(()) => true,
        Err(issue) => {
            debug!("{}: discarding {} candidate: {}", source_name, kind, issue);
            false
        }
    }
}
