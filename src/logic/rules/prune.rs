use super::{ActivityRule, DayConditions};
use crate::models::{Activity, LunarPhase};

/// Pruning rule
///
/// Cut during the waning phases, when sap flow is lower and wounds close
/// better. Wet foliage spreads fungal disease, so the rain threshold is the
/// tightest of all activities.
///
/// Block conditions:
/// - precipitation > 2 mm (fungal risk)
/// - phase outside {Luna Menguante, Cuarto Menguante}
pub struct PruneRule;

const GOOD_PHASES: [LunarPhase; 2] = [LunarPhase::WaningCrescent, LunarPhase::LastQuarter];

const MAX_PRECIP_MM: f64 = 2.0;

impl ActivityRule for PruneRule {
    fn activity(&self) -> Activity {
        Activity::Prune
    }

    fn is_recommended(&self, day: &DayConditions) -> bool {
        day.precipitation_mm <= MAX_PRECIP_MM && GOOD_PHASES.contains(&day.phase)
    }

    fn reason(&self, day: &DayConditions) -> String {
        if day.precipitation_mm > MAX_PRECIP_MM {
            return "Evite podar con lluvia para prevenir enfermedades fungosas.".to_string();
        }
        if !GOOD_PHASES.contains(&day.phase) {
            return format!(
                "En fase {}, la poda puede debilitar la planta. Mejor esperar a Luna Menguante.",
                day.phase
            );
        }
        "Excelente momento para podar. La planta sangrará menos y cicatrizará mejor.".to_string()
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
    fn recommended_on_dry_waning_day() {
        assert!(PruneRule.is_recommended(&day(LunarPhase::WaningCrescent, 0.0)));
        assert!(PruneRule.is_recommended(&day(LunarPhase::LastQuarter, 2.0)));
    }

    #[test]
    fn rain_blocks_for_fungal_risk() {
        let d = day(LunarPhase::LastQuarter, 2.1);
        assert!(!PruneRule.is_recommended(&d));
        assert!(PruneRule.reason(&d).contains("enfermedades fungosas"));
    }

    #[test]
    fn waxing_phase_not_recommended() {
        let d = day(LunarPhase::WaxingCrescent, 0.0);
        assert!(!PruneRule.is_recommended(&d));
        assert!(PruneRule.reason(&d).contains("Luna Creciente"));
    }
}
