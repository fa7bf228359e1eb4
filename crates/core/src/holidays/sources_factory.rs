//! Default source registration.

use std::sync::Arc;

use hungarian_holidays_sources::{
    hungary_2025, hungary_2025_bridge_days, DailyNewsHungarySource, HolidaySource, KnownDataSource, MfaGovSource,
    OfficeHolidaysSource, PageFetcher, PontosIdoSource, PublicHolidaysSource, SourceRegistry,
    SzakmaiKamaraSource, TimeAndDateSource, UnnepnapokSource,
};

/// Optional sources to register alongside the defaults.
#[derive(Clone, Debug, Default)]
pub struct SourceRegistryOptions {
    /// Also merge workdays from PublicHolidays.hu.
    pub include_publicholidays_for_workdays: bool,
    /// Register Unnepnapok.com last in both lists.
    pub include_unnepnapok: bool,
}

/// Builds the production registry.
///
/// Holidays: PontosIdo (completed from the 2025 calendar), MFA (completed
/// with the 2025 bridge days), SzakmaiKamara,
/// PublicHolidays, TimeAndDate, OfficeHolidays.
/// Workdays: PontosIdo, MFA, SzakmaiKamara, DailyNewsHungary.
pub fn default_registry(options: &SourceRegistryOptions) -> SourceRegistry {
    let fetcher = PageFetcher::new();
    let pontosido: Arc<dyn HolidaySource> = Arc::new(KnownDataSource::new(
        PontosIdoSource::new(fetcher.clone()),
        hungary_2025(),
    ));
    // MFA lists the statutory days itself; only the bridge days are added
    let mfa: Arc<dyn HolidaySource> = Arc::new(KnownDataSource::supplementing(
        MfaGovSource::new(fetcher.clone()),
        hungary_2025_bridge_days(),
    ));
    let szakmaikamara: Arc<dyn HolidaySource> =
        Arc::new(SzakmaiKamaraSource::new(fetcher.clone()));
    let publicholidays: Arc<dyn HolidaySource> =
        Arc::new(PublicHolidaysSource::new(fetcher.clone()));

    let mut holiday_sources: Vec<Arc<dyn HolidaySource>> = vec![
        Arc::clone(&pontosido),
        Arc::clone(&mfa),
        Arc::clone(&szakmaikamara),
        Arc::clone(&publicholidays),
        Arc::new(TimeAndDateSource::new(fetcher.clone())),
        Arc::new(OfficeHolidaysSource::new(fetcher.clone())),
    ];

    let mut workday_sources: Vec<Arc<dyn HolidaySource>> = vec![
        pontosido,
        mfa,
        szakmaikamara,
        Arc::new(DailyNewsHungarySource::new(fetcher.clone())),
    ];

    if options.include_publicholidays_for_workdays {
        workday_sources.push(publicholidays);
    }

    if options.include_unnepnapok {
        let unnepnapok: Arc<dyn HolidaySource> = Arc::new(UnnepnapokSource::new(fetcher));
        holiday_sources.push(Arc::clone(&unnepnapok));
        workday_sources.push(unnepnapok);
    }

    SourceRegistry::new(holiday_sources, workday_sources)
}
