use super::{ActivityRule, DayConditions};
use crate::models::{Activity, LunarPhase};

/// Planting rule
///
/// Waxing phases are tied to germination and root development in the local
/// tradition. Seedlings also need mild temperatures and soil that is not
/// waterlogged.
///
/// Block conditions:
/// - precipitation >= 10 mm
/// - temperature < 18°C or > 32°C
/// - phase outside {Luna Creciente, Cuarto Creciente}
pub struct PlantRule;

const GOOD_PHASES: [LunarPhase; 2] = [LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter];

const MIN_TEMP_C: f64 = 18.0;
const MAX_TEMP_C: f64 = 32.0;
const MAX_PRECIP_MM: f64 = 10.0;

impl ActivityRule for PlantRule {
    fn activity(&self) -> Activity {
        Activity::Plant
    }

    fn is_recommended(&self, day: &DayConditions) -> bool {
        GOOD_PHASES.contains(&day.phase)
            && day.temperature_c >= MIN_TEMP_C
            && day.temperature_c <= MAX_TEMP_C
            && day.precipitation_mm < MAX_PRECIP_MM
    }

    fn reason(&self, day: &DayConditions) -> String {
        if day.precipitation_mm >= MAX_PRECIP_MM {
            return "Exceso de lluvia puede afectar la germinación de semillas.".to_string();
        }
        if day.temperature_c < MIN_TEMP_C {
            return "Temperatura demasiado baja para la mayoría de cultivos.".to_string();
        }
        if day.temperature_c > MAX_TEMP_C {
            return "Temperatura demasiado alta puede estresar las plántulas nuevas.".to_string();
        }
        if !GOOD_PHASES.contains(&day.phase) {
            return format!(
                "La fase {} no es óptima para sembrar. Mejor esperar hasta Luna Creciente.",
                day.phase
            );
        }
        "Excelentes condiciones para sembrar. La fase lunar favorece el crecimiento y desarrollo de raíces."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(phase: LunarPhase, temperature_c: f64, precipitation_mm: f64) -> DayConditions {
        DayConditions {
            phase,
            temperature_c,
            precipitation_mm,
        }
    }

    #[test]
    fn recommended_on_mild_waxing_day() {
        assert!(PlantRule.is_recommended(&day(LunarPhase::WaxingCrescent, 25.0, 0.0)));
        assert!(PlantRule.is_recommended(&day(LunarPhase::FirstQuarter, 18.0, 9.9)));
    }

    #[test]
    fn heavy_rain_blocks_and_reason_cites_rain() {
        let d = day(LunarPhase::WaxingCrescent, 25.0, 12.0);
        assert!(!PlantRule.is_recommended(&d));
        assert!(PlantRule.reason(&d).contains("Exceso de lluvia"));
    }

    #[test]
    fn precipitation_boundary_is_exclusive() {
        // exactly 10 mm is already too wet
        let d = day(LunarPhase::WaxingCrescent, 25.0, 10.0);
        assert!(!PlantRule.is_recommended(&d));
        assert!(PlantRule.reason(&d).contains("Exceso de lluvia"));
    }

    #[test]
    fn temperature_boundaries_are_inclusive() {
        assert!(PlantRule.is_recommended(&day(LunarPhase::WaxingCrescent, 18.0, 0.0)));
        assert!(PlantRule.is_recommended(&day(LunarPhase::WaxingCrescent, 32.0, 0.0)));
        assert!(!PlantRule.is_recommended(&day(LunarPhase::WaxingCrescent, 17.9, 0.0)));
        assert!(!PlantRule.is_recommended(&day(LunarPhase::WaxingCrescent, 32.1, 0.0)));
    }

    #[test]
    fn cold_and_hot_reasons() {
        assert!(PlantRule
            .reason(&day(LunarPhase::WaxingCrescent, 10.0, 0.0))
            .contains("demasiado baja"));
        assert!(PlantRule
            .reason(&day(LunarPhase::WaxingCrescent, 38.0, 0.0))
            .contains("demasiado alta"));
    }

    #[test]
    fn wrong_phase_blocks_with_phase_reason() {
        let d = day(LunarPhase::FullMoon, 25.0, 0.0);
        assert!(!PlantRule.is_recommended(&d));
        assert!(PlantRule.reason(&d).contains("Luna Llena"));
    }
}
