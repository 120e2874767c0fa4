use super::{ActivityRule, DayConditions};
use crate::models::{Activity, LunarPhase};

/// Weeding rule
///
/// Pulling weeds in the waning phases is held to slow their regrowth.
/// Saturated soil compacts under foot traffic and makes extraction harder,
/// so only very heavy rain blocks.
///
/// Block conditions:
/// - precipitation > 15 mm
/// - phase outside {Luna Menguante, Cuarto Menguante}
pub struct WeedRule;

const GOOD_PHASES: [LunarPhase; 2] = [LunarPhase::WaningCrescent, LunarPhase::LastQuarter];

const MAX_PRECIP_MM: f64 = 15.0;

impl ActivityRule for WeedRule {
    fn activity(&self) -> Activity {
        Activity::Weed
    }

    fn is_recommended(&self, day: &DayConditions) -> bool {
        day.precipitation_mm <= MAX_PRECIP_MM && GOOD_PHASES.contains(&day.phase)
    }

    fn reason(&self, day: &DayConditions) -> String {
        if day.precipitation_mm > MAX_PRECIP_MM {
            return "El suelo mojado dificulta la eliminación de malas hierbas y puede compactar el terreno."
                .to_string();
        }
        if !GOOD_PHASES.contains(&day.phase) {
            return format!(
                "En fase {}, las malas hierbas vuelven a crecer más rápido si se arrancan.",
                day.phase
            );
        }
        "Excelente momento para eliminar malas hierbas. Arrancarlas en esta fase lunar reduce su regeneración."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(phase: LunarPhase, precipitation_mm: f64) -> DayConditions {
        DayConditions {
            phase,
            temperature_c: 26.0,
            precipitation_mm,
        }
    }

    #[test]
    fn recommended_on_waning_day() {
        assert!(WeedRule.is_recommended(&day(LunarPhase::WaningCrescent, 0.0)));
        assert!(WeedRule.is_recommended(&day(LunarPhase::LastQuarter, 15.0)));
    }

    #[test]
    fn saturated_soil_blocks() {
        let d = day(LunarPhase::WaningCrescent, 15.1);
        assert!(!WeedRule.is_recommended(&d));
        assert!(WeedRule.reason(&d).contains("suelo mojado"));
    }

    #[test]
    fn waxing_phase_not_recommended() {
        let d = day(LunarPhase::WaxingGibbous, 0.0);
        assert!(!WeedRule.is_recommended(&d));
        assert!(WeedRule.reason(&d).contains("Gibosa Creciente"));
    }
}
