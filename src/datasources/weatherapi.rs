use crate::config::WeatherApiConfig;
use crate::error::{LunarioError, Result};
use crate::models::{
    AstroTimes, CurrentWeather, Forecast, ForecastDay, ForecastLocation, LunarObservation,
    LunarPhase, MonthLunarData, WeatherObservation,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use tokio::task::JoinSet;

const API_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Parallel astronomy requests per wave when filling a month grid.
const MONTH_FETCH_CONCURRENCY: usize = 4;

#[derive(Clone)]
pub struct WeatherApiClient {
    client: reqwest::Client,
    config: WeatherApiConfig,
}

// weatherapi.com response structures
#[derive(Debug, Deserialize)]
struct WApiForecastResponse {
    location: WApiLocation,
    current: WApiCurrent,
    forecast: WApiForecast,
}

#[derive(Debug, Deserialize)]
struct WApiLocation {
    name: String,
    #[serde(default)]
    region: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WApiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    condition: WApiCondition,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    precip_mm: f64,
    humidity: f64,
    #[serde(default)]
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct WApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WApiForecast {
    forecastday: Vec<WApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WApiForecastDay {
    date: NaiveDate,
    day: WApiDay,
    astro: WApiAstro,
}

#[derive(Debug, Deserialize)]
struct WApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avgtemp_c: f64,
    totalprecip_mm: f64,
    #[serde(default)]
    avghumidity: Option<f64>,
    condition: WApiCondition,
}

#[derive(Debug, Deserialize)]
struct WApiAstro {
    #[serde(default)]
    sunrise: String,
    #[serde(default)]
    sunset: String,
    #[serde(default)]
    moonrise: String,
    #[serde(default)]
    moonset: String,
    moon_phase: String,
    #[serde(deserialize_with = "deserialize_illumination")]
    moon_illumination: u8,
}

#[derive(Debug, Deserialize)]
struct WApiAstronomyResponse {
    astronomy: WApiAstronomy,
}

#[derive(Debug, Deserialize)]
struct WApiAstronomy {
    astro: WApiAstro,
}

/// The provider has shipped illumination both as a bare number and as a
/// quoted string across API revisions.
fn deserialize_illumination<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        Raw::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("invalid moon_illumination '{}'", s))
        })?,
    };
    Ok(value.round().clamp(0.0, 100.0) as u8)
}

impl WeatherApiClient {
    pub fn new(config: WeatherApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch current conditions plus the daily forecast in one call. Each
    /// forecast day carries its own astro block, so this also yields the
    /// lunar observation per day.
    pub async fn fetch_forecast(&self, days: u8) -> Result<Forecast> {
        let days_param = days.to_string();
        let response = self
            .client
            .get(format!("{}/forecast.json", API_BASE_URL))
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", self.config.location.as_str()),
                ("days", days_param.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .map_err(|e| LunarioError::DataSourceUnavailable(format!("WeatherAPI: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LunarioError::DataSourceUnavailable(format!(
                "WeatherAPI returned {}: {}",
                status, body
            )));
        }

        let payload: WApiForecastResponse = response.json().await.map_err(|e| {
            LunarioError::DataSourceUnavailable(format!(
                "Failed to parse WeatherAPI forecast response: {}",
                e
            ))
        })?;

        Ok(convert_forecast(payload))
    }

    /// Fetch the astronomy record for one date.
    pub async fn fetch_astronomy(&self, date: NaiveDate) -> Result<LunarObservation> {
        let date_param = date.format("%Y-%m-%d").to_string();
        let response = self
            .client
            .get(format!("{}/astronomy.json", API_BASE_URL))
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", self.config.location.as_str()),
                ("dt", date_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LunarioError::DataSourceUnavailable(format!("WeatherAPI: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(LunarioError::DataSourceUnavailable(format!(
                "WeatherAPI astronomy returned {} for {}",
                status, date
            )));
        }

        let payload: WApiAstronomyResponse = response.json().await.map_err(|e| {
            LunarioError::DataSourceUnavailable(format!(
                "Failed to parse WeatherAPI astronomy response: {}",
                e
            ))
        })?;

        Ok(convert_astro_observation(date, &payload.astronomy.astro))
    }

    /// Fetch lunar observations for every day of a month. The provider has
    /// no month endpoint, so this fans out per-day requests in bounded
    /// waves instead of one request per day in sequence.
    pub async fn fetch_month_astronomy(&self, year: i32, month: u32) -> Result<MonthLunarData> {
        let dates = month_dates(year, month)
            .ok_or_else(|| LunarioError::InvalidData(format!("invalid month {}-{}", year, month)))?;

        let mut days: Vec<LunarObservation> = Vec::with_capacity(dates.len());
        for wave in dates.chunks(MONTH_FETCH_CONCURRENCY) {
            let mut set = JoinSet::new();
            for date in wave {
                let client = self.clone();
                let date = *date;
                set.spawn(async move { client.fetch_astronomy(date).await });
            }
            while let Some(joined) = set.join_next().await {
                let observation = joined.map_err(|e| {
                    LunarioError::DataSourceUnavailable(format!("astronomy task failed: {}", e))
                })??;
                days.push(observation);
            }
        }

        days.sort_by_key(|d| d.date);

        Ok(MonthLunarData { year, month, days })
    }

    /// Test connection to the weather provider
    pub async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/current.json", API_BASE_URL))
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", self.config.location.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

fn month_dates(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let count = next_month.pred_opt()?.day();

    Some(
        (0..count)
            .filter_map(|offset| first.checked_add_days(chrono::Days::new(offset as u64)))
            .collect(),
    )
}

fn convert_forecast(response: WApiForecastResponse) -> Forecast {
    let location = ForecastLocation {
        name: response.location.name,
        region: response.location.region,
        country: response.location.country,
    };

    let current = CurrentWeather {
        temp_c: response.current.temp_c,
        feelslike_c: response.current.feelslike_c,
        condition: response.current.condition.text,
        wind_kph: response.current.wind_kph,
        wind_dir: response.current.wind_dir,
        pressure_mb: response.current.pressure_mb,
        precip_mm: response.current.precip_mm,
        humidity: response.current.humidity,
        uv: response.current.uv,
    };

    let days = response
        .forecast
        .forecastday
        .into_iter()
        .map(convert_forecast_day)
        .collect();

    Forecast {
        fetched_at: Utc::now(),
        location,
        current,
        days,
    }
}

fn convert_forecast_day(item: WApiForecastDay) -> ForecastDay {
    let lunar = convert_astro_observation(item.date, &item.astro);

    let weather = WeatherObservation {
        date: item.date,
        avg_temp_c: item.day.avgtemp_c,
        min_temp_c: item.day.mintemp_c,
        max_temp_c: item.day.maxtemp_c,
        total_precip_mm: item.day.totalprecip_mm,
        avg_humidity: item.day.avghumidity,
        condition: item.day.condition.text,
        astro: AstroTimes {
            sunrise: item.astro.sunrise,
            sunset: item.astro.sunset,
            moonrise: item.astro.moonrise,
            moonset: item.astro.moonset,
        },
    };

    ForecastDay { weather, lunar }
}

fn convert_astro_observation(date: NaiveDate, astro: &WApiAstro) -> LunarObservation {
    LunarObservation {
        date,
        phase: LunarPhase::from_provider(&astro.moon_phase),
        illumination: astro.moon_illumination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_JSON: &str = r#"{
        "location": {"name": "Salitre", "region": "Guayas", "country": "Ecuador"},
        "current": {
            "temp_c": 28.3, "feelslike_c": 32.1,
            "condition": {"text": "Parcialmente nublado", "icon": "", "code": 1003},
            "wind_kph": 11.2, "wind_dir": "SW", "pressure_mb": 1011.0,
            "precip_mm": 0.1, "humidity": 74, "uv": 8.0
        },
        "forecast": {
            "forecastday": [{
                "date": "2025-06-15",
                "day": {
                    "maxtemp_c": 31.0, "mintemp_c": 22.4, "avgtemp_c": 26.7,
                    "totalprecip_mm": 4.8, "avghumidity": 79.0,
                    "condition": {"text": "Lluvia moderada", "icon": "", "code": 1189}
                },
                "astro": {
                    "sunrise": "06:12 AM", "sunset": "06:21 PM",
                    "moonrise": "09:44 PM", "moonset": "09:03 AM",
                    "moon_phase": "Waxing Crescent", "moon_illumination": "22"
                }
            }]
        }
    }"#;

    const ASTRONOMY_JSON: &str = r#"{
        "location": {"name": "Salitre", "region": "Guayas", "country": "Ecuador"},
        "astronomy": {
            "astro": {
                "sunrise": "06:12 AM", "sunset": "06:21 PM",
                "moonrise": "No moonrise", "moonset": "10:15 AM",
                "moon_phase": "Full Moon", "moon_illumination": 100
            }
        }
    }"#;

    #[test]
    fn parses_and_converts_forecast_response() {
        let payload: WApiForecastResponse = serde_json::from_str(FORECAST_JSON).unwrap();
        let forecast = convert_forecast(payload);

        assert_eq!(forecast.location.name, "Salitre");
        assert_eq!(forecast.current.condition, "Parcialmente nublado");
        assert_eq!(forecast.days.len(), 1);

        let day = &forecast.days[0];
        assert_eq!(day.weather.date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert_eq!(day.weather.avg_temp_c, 26.7);
        assert_eq!(day.weather.total_precip_mm, 4.8);
        assert_eq!(day.weather.avg_humidity, Some(79.0));
        assert_eq!(day.lunar.phase, LunarPhase::WaxingCrescent);
        assert_eq!(day.lunar.illumination, 22);
    }

    #[test]
    fn parses_astronomy_response_with_numeric_illumination() {
        let payload: WApiAstronomyResponse = serde_json::from_str(ASTRONOMY_JSON).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let observation = convert_astro_observation(date, &payload.astronomy.astro);

        assert_eq!(observation.phase, LunarPhase::FullMoon);
        assert_eq!(observation.illumination, 100);
        assert_eq!(observation.date, date);
    }

    #[test]
    fn unknown_moon_phase_label_is_preserved_as_other() {
        let json = r#"{
            "sunrise": "", "sunset": "", "moonrise": "", "moonset": "",
            "moon_phase": "Super Blood Moon", "moon_illumination": "87.4"
        }"#;
        let astro: WApiAstro = serde_json::from_str(json).unwrap();
        let observation =
            convert_astro_observation(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &astro);
        assert_eq!(observation.phase, LunarPhase::Other);
        assert_eq!(observation.illumination, 87);
    }

    #[test]
    fn month_dates_cover_whole_month() {
        let june = month_dates(2025, 6).unwrap();
        assert_eq!(june.len(), 30);
        assert_eq!(june[0], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(june[29], NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        // leap February and year rollover
        assert_eq!(month_dates(2024, 2).unwrap().len(), 29);
        assert_eq!(month_dates(2025, 12).unwrap().len(), 31);
        assert!(month_dates(2025, 13).is_none());
    }
}
