use super::lunar::LunarObservation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at the configured location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: String,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub humidity: f64,
    pub uv: f64,
}

/// Aggregated daily observation from the forecast provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub date: NaiveDate,
    pub avg_temp_c: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub total_precip_mm: f64,
    /// Daily average humidity; older provider plans omit it
    pub avg_humidity: Option<f64>,
    pub condition: String,
    pub astro: AstroTimes,
}

/// Rise/set times as local-time strings, passed through for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AstroTimes {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
}

/// One forecast day: the daily weather observation paired with the lunar
/// observation derived from the same provider record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub weather: WeatherObservation,
    pub lunar: LunarObservation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Everything one forecast fetch yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub fetched_at: DateTime<Utc>,
    pub location: ForecastLocation,
    pub current: CurrentWeather,
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    pub fn day(&self, date: NaiveDate) -> Option<&ForecastDay> {
        self.days.iter().find(|d| d.weather.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LunarPhase;

    fn sample_day(date: NaiveDate) -> ForecastDay {
        ForecastDay {
            weather: WeatherObservation {
                date,
                avg_temp_c: 27.0,
                min_temp_c: 22.0,
                max_temp_c: 31.0,
                total_precip_mm: 4.2,
                avg_humidity: Some(78.0),
                condition: "Parcialmente nublado".to_string(),
                astro: AstroTimes::default(),
            },
            lunar: LunarObservation {
                date,
                phase: LunarPhase::WaxingCrescent,
                illumination: 22,
            },
        }
    }

    #[test]
    fn forecast_day_lookup() {
        let d1 = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let forecast = Forecast {
            fetched_at: Utc::now(),
            location: ForecastLocation {
                name: "Salitre".to_string(),
                region: "Guayas".to_string(),
                country: "Ecuador".to_string(),
            },
            current: CurrentWeather {
                temp_c: 28.0,
                feelslike_c: 31.0,
                condition: "Soleado".to_string(),
                wind_kph: 9.0,
                wind_dir: "SW".to_string(),
                pressure_mb: 1012.0,
                precip_mm: 0.0,
                humidity: 75.0,
                uv: 9.0,
            },
            days: vec![sample_day(d1), sample_day(d2)],
        };

        assert_eq!(forecast.day(d2).map(|d| d.weather.date), Some(d2));
        assert!(forecast
            .day(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap())
            .is_none());
    }
}
