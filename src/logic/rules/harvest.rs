use super::{ActivityRule, DayConditions};
use crate::models::{Activity, LunarPhase};

/// Harvesting rule
///
/// Full and just-past-full phases are held to give better flavor and longer
/// storage. Heavy rain degrades produce quality in the field.
///
/// Block conditions:
/// - precipitation > 8 mm
/// - phase outside {Luna Llena, Gibosa Menguante}
pub struct HarvestRule;

const GOOD_PHASES: [LunarPhase; 2] = [LunarPhase::FullMoon, LunarPhase::WaningGibbous];

const MAX_PRECIP_MM: f64 = 8.0;

impl ActivityRule for HarvestRule {
    fn activity(&self) -> Activity {
        Activity::Harvest
    }

    fn is_recommended(&self, day: &DayConditions) -> bool {
        day.precipitation_mm <= MAX_PRECIP_MM && GOOD_PHASES.contains(&day.phase)
    }

    fn reason(&self, day: &DayConditions) -> String {
        if day.precipitation_mm > MAX_PRECIP_MM {
            return "Evite cosechar con lluvia fuerte para mantener la calidad del producto."
                .to_string();
        }
        if !GOOD_PHASES.contains(&day.phase) {
            return format!(
                "En fase {}, los cultivos pueden tener menos sabor y menor tiempo de almacenamiento.",
                day.phase
            );
        }
        "Excelente momento para cosechar. Los cultivos tendrán mejor sabor y durarán más tiempo almacenados."
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
    fn recommended_under_full_moon() {
        assert!(HarvestRule.is_recommended(&day(LunarPhase::FullMoon, 0.0)));
        assert!(HarvestRule.is_recommended(&day(LunarPhase::WaningGibbous, 3.0)));
    }

    #[test]
    fn eight_millimeters_is_still_acceptable() {
        assert!(HarvestRule.is_recommended(&day(LunarPhase::FullMoon, 8.0)));
        assert!(!HarvestRule.is_recommended(&day(LunarPhase::FullMoon, 8.1)));
    }

    #[test]
    fn heavy_rain_reason() {
        let d = day(LunarPhase::FullMoon, 12.0);
        assert!(HarvestRule.reason(&d).contains("lluvia fuerte"));
    }

    #[test]
    fn new_moon_not_recommended() {
        let d = day(LunarPhase::NewMoon, 0.0);
        assert!(!HarvestRule.is_recommended(&d));
        assert!(HarvestRule.reason(&d).contains("Luna Nueva"));
    }
}
