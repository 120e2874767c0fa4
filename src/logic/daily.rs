use super::rules::{DayConditions, RulesEngine};
use super::scoring;
use crate::models::{
    crop, CropRecommendation, DailyRecommendation, LunarObservation, WeatherObservation,
};

/// Average humidity assumed when the provider omits a daily value.
pub const DEFAULT_HUMIDITY: f64 = 70.0;

/// A crop is called recommended strictly above this level.
const RECOMMENDED_LEVEL: u8 = 60;

/// Builds the recommendation bundle for one calendar day: six activity
/// verdicts in fixed order plus a ranking of every catalog crop.
pub struct RecommendationEngine {
    rules: RulesEngine,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            rules: RulesEngine::new(),
        }
    }

    /// Stateless per-day transform; identical inputs yield identical output.
    pub fn daily(
        &self,
        lunar: &LunarObservation,
        weather: &WeatherObservation,
    ) -> DailyRecommendation {
        let humidity = weather.avg_humidity.unwrap_or(DEFAULT_HUMIDITY);
        let day = DayConditions {
            phase: lunar.phase,
            temperature_c: weather.avg_temp_c,
            precipitation_mm: weather.total_precip_mm,
        };

        let activities = self.rules.evaluate(&day);

        let mut crops: Vec<CropRecommendation> = crop::CATALOG
            .iter()
            .map(|c| {
                let level = scoring::score(
                    c,
                    lunar.phase,
                    weather.avg_temp_c,
                    humidity,
                    weather.total_precip_mm,
                );
                CropRecommendation {
                    crop_id: c.id.to_string(),
                    crop_name: c.name.to_string(),
                    is_recommended: level > RECOMMENDED_LEVEL,
                    recommendation_level: level,
                    reason: scoring::reason(c, lunar.phase, weather.avg_temp_c, weather.total_precip_mm),
                }
            })
            .collect();

        // stable sort keeps catalog order for equal levels
        crops.sort_by(|a, b| b.recommendation_level.cmp(&a.recommendation_level));

        DailyRecommendation {
            date: weather.date,
            lunar_phase: lunar.phase,
            weather_condition: weather.condition.clone(),
            temperature_c: weather.avg_temp_c,
            humidity,
            precipitation_mm: weather.total_precip_mm,
            activities,
            crops,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, AstroTimes, LunarPhase};
    use chrono::NaiveDate;

    fn observations(
        phase: LunarPhase,
        temp_c: f64,
        precip_mm: f64,
        humidity: Option<f64>,
    ) -> (LunarObservation, WeatherObservation) {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        (
            LunarObservation {
                date,
                phase,
                illumination: 40,
            },
            WeatherObservation {
                date,
                avg_temp_c: temp_c,
                min_temp_c: temp_c - 4.0,
                max_temp_c: temp_c + 4.0,
                total_precip_mm: precip_mm,
                avg_humidity: humidity,
                condition: "Lluvia moderada".to_string(),
                astro: AstroTimes::default(),
            },
        )
    }

    #[test]
    fn bundle_has_six_activities_in_order_and_one_entry_per_crop() {
        let (lunar, weather) = observations(LunarPhase::WaxingCrescent, 27.0, 6.0, None);
        let daily = RecommendationEngine::new().daily(&lunar, &weather);

        let order: Vec<Activity> = daily.activities.iter().map(|a| a.activity).collect();
        assert_eq!(order, Activity::ALL);

        assert_eq!(daily.crops.len(), crop::CATALOG.len());
        let mut ids: Vec<&str> = daily.crops.iter().map(|c| c.crop_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), crop::CATALOG.len());
    }

    #[test]
    fn crops_sorted_descending_with_catalog_order_tiebreak() {
        let (lunar, weather) = observations(LunarPhase::WaxingCrescent, 27.0, 6.0, None);
        let daily = RecommendationEngine::new().daily(&lunar, &weather);

        for pair in daily.crops.windows(2) {
            assert!(pair[0].recommendation_level >= pair[1].recommendation_level);
        }

        // equal levels keep catalog definition order
        let catalog_pos =
            |id: &str| crop::CATALOG.iter().position(|c| c.id == id).unwrap();
        for pair in daily.crops.windows(2) {
            if pair[0].recommendation_level == pair[1].recommendation_level {
                assert!(catalog_pos(&pair[0].crop_id) < catalog_pos(&pair[1].crop_id));
            }
        }
    }

    #[test]
    fn recommended_flag_matches_level_threshold() {
        let cases = [
            (LunarPhase::WaxingCrescent, 27.0, 6.0),
            (LunarPhase::FullMoon, 40.0, 0.0),
            (LunarPhase::NewMoon, 20.0, 3.0),
            (LunarPhase::LastQuarter, 30.0, 12.0),
        ];
        let engine = RecommendationEngine::new();
        for (phase, temp, precip) in cases {
            let (lunar, weather) = observations(phase, temp, precip, None);
            let daily = engine.daily(&lunar, &weather);
            for c in &daily.crops {
                assert_eq!(c.is_recommended, c.recommendation_level > 60, "{}", c.crop_id);
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let (lunar, weather) = observations(LunarPhase::WaningGibbous, 24.0, 2.0, Some(81.0));
        let engine = RecommendationEngine::new();
        assert_eq!(engine.daily(&lunar, &weather), engine.daily(&lunar, &weather));
    }

    #[test]
    fn humidity_defaults_when_provider_omits_it() {
        let engine = RecommendationEngine::new();

        let (lunar, weather) = observations(LunarPhase::WaxingCrescent, 27.0, 6.0, None);
        assert_eq!(engine.daily(&lunar, &weather).humidity, DEFAULT_HUMIDITY);

        let (lunar, weather) = observations(LunarPhase::WaxingCrescent, 27.0, 6.0, Some(83.0));
        assert_eq!(engine.daily(&lunar, &weather).humidity, 83.0);
    }

    #[test]
    fn carries_observation_fields_through() {
        let (lunar, weather) = observations(LunarPhase::FullMoon, 29.5, 8.0, Some(77.0));
        let daily = RecommendationEngine::new().daily(&lunar, &weather);
        assert_eq!(daily.date, weather.date);
        assert_eq!(daily.lunar_phase, LunarPhase::FullMoon);
        assert_eq!(daily.weather_condition, "Lluvia moderada");
        assert_eq!(daily.temperature_c, 29.5);
        assert_eq!(daily.precipitation_mm, 8.0);
    }

    #[test]
    fn harvest_recommended_at_eight_millimeters_under_full_moon() {
        let (lunar, weather) = observations(LunarPhase::FullMoon, 26.0, 8.0, None);
        let daily = RecommendationEngine::new().daily(&lunar, &weather);
        let harvest = daily
            .activities
            .iter()
            .find(|a| a.activity == Activity::Harvest)
            .unwrap();
        assert!(harvest.is_recommended);
    }
}
