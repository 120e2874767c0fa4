use crate::config::Config;
use crate::datasources::WeatherApiClient;
use crate::error::Result;
use crate::logic::daily::RecommendationEngine;
use crate::models::{DailyRecommendation, Forecast, MonthLunarData};

/// Fetches provider data and turns it into per-day recommendation bundles.
/// Holds no cache: every refresh recomputes from fresh observations.
pub struct DataSyncService {
    client: WeatherApiClient,
    engine: RecommendationEngine,
    forecast_days: u8,
}

/// One completed forecast refresh.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub forecast: Forecast,
    pub recommendations: Vec<DailyRecommendation>,
}

impl DataSyncService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: WeatherApiClient::new(config.weatherapi.clone()),
            engine: RecommendationEngine::new(),
            forecast_days: config.weatherapi.forecast_days,
        }
    }

    /// Fetch the forecast and derive one recommendation bundle per day.
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let forecast = self.client.fetch_forecast(self.forecast_days).await?;

        let recommendations = forecast
            .days
            .iter()
            .map(|d| self.engine.daily(&d.lunar, &d.weather))
            .collect();

        tracing::debug!(days = forecast.days.len(), "forecast refreshed");

        Ok(RefreshOutcome {
            forecast,
            recommendations,
        })
    }

    /// Fetch the lunar observations for a whole month (calendar grid).
    pub async fn fetch_month(&self, year: i32, month: u32) -> Result<MonthLunarData> {
        self.client.fetch_month_astronomy(year, month).await
    }

    /// Best-effort connectivity probe for the `check` subcommand.
    pub async fn check_connection(&self) -> bool {
        match self.client.test_connection().await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!("weather provider unreachable: {}", e);
                false
            }
        }
    }
}
