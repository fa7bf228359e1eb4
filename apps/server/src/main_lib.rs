use std::sync::Arc;

use crate::config::Config;
use hungarian_holidays_core::{default_registry, HolidayService, HolidayServiceTrait};
use hungarian_holidays_sources::SourceRegistry;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub holiday_service: Arc<dyn HolidayServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("HH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// State backed by the production source registry.
pub fn build_state(config: &Config) -> Arc<AppState> {
    build_state_with_registry(config, default_registry(&config.registry_options()))
}

pub fn build_state_with_registry(config: &Config, registry: SourceRegistry) -> Arc<AppState> {
    tracing::info!("Holiday sources: {:?}", registry.holiday_source_names());
    tracing::info!("Workday sources: {:?}", registry.workday_source_names());

    let holiday_service: Arc<dyn HolidayServiceTrait> =
        Arc::new(HolidayService::new(registry, config.service_config()));

    Arc::new(AppState { holiday_service })
}
