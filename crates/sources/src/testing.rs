//! Configurable stub source shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::SourceError;
use crate::models::{Holiday, SourceCapabilities, SourceDescriptor, WorkDay, YearWindow};
use crate::source::HolidaySource;

pub(crate) enum Reply<T> {
    Items(Vec<T>),
    Fail,
    Hang,
}

pub(crate) struct StubSource {
    name: &'static str,
    window: YearWindow,
    capabilities: SourceCapabilities,
    holidays: Reply<Holiday>,
    workdays: Reply<WorkDay>,
    pub holiday_calls: AtomicUsize,
    pub workday_calls: AtomicUsize,
}

impl StubSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            window: YearWindow::new(-1, 1),
            capabilities: SourceCapabilities::BOTH,
            holidays: Reply::Items(Vec::new()),
            workdays: Reply::Items(Vec::new()),
            holiday_calls: AtomicUsize::new(0),
            workday_calls: AtomicUsize::new(0),
        }
    }

    pub fn window(mut self, min_offset: i32, max_offset: i32) -> Self {
        self.window = YearWindow::new(min_offset, max_offset);
        self
    }

    pub fn capabilities(mut self, capabilities: SourceCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn holidays(mut self, reply: Reply<Holiday>) -> Self {
        self.holidays = reply;
        self
    }

    pub fn workdays(mut self, reply: Reply<WorkDay>) -> Self {
        self.workdays = reply;
        self
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    async fn reply<T: Clone>(&self, reply: &Reply<T>) -> Result<Vec<T>, SourceError> {
        match reply {
            Reply::Items(items) => Ok(items.clone()),
            Reply::Fail => Err(SourceError::HttpStatus {
                source_name: self.name.to_string(),
                status: 503,
            }),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl HolidaySource for StubSource {
    fn descriptor(&self) -> SourceDescriptor {
        SourceDescriptor::new(self.name, self.window, self.capabilities)
    }

    fn url_for(&self, year: i32) -> String {
        format!("https://{}.example/{}", self.name.to_lowercase(), year)
    }

    async fn fetch_holidays(&self, _year: i32) -> Result<Vec<Holiday>, SourceError> {
        self.holiday_calls.fetch_add(1, Ordering::SeqCst);
        self.reply(&self.holidays).await
    }

    async fn fetch_workdays(&self, _year: i32) -> Result<Vec<WorkDay>, SourceError> {
        self.workday_calls.fetch_add(1, Ordering::SeqCst);
        self.reply(&self.workdays).await
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn holiday(year: i32, month: u32, day: u32, name: &str) -> Holiday {
    Holiday::national(date(year, month, day), name, name)
}

pub(crate) fn workday(year: i32, month: u32, day: u32, reason: &str) -> WorkDay {
    WorkDay::new(date(year, month, day), reason)
}
