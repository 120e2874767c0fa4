use super::{ActivityRule, DayConditions};
use crate::models::{Activity, LunarPhase};

/// Fertilizing rule
///
/// Nutrient uptake is held to peak during the waxing phases. Heavy rain
/// washes applied nutrients out of the root zone before plants take them.
///
/// Block conditions:
/// - precipitation > 10 mm (leaching)
/// - phase outside {Luna Creciente, Cuarto Creciente}
pub struct FertilizeRule;

const GOOD_PHASES: [LunarPhase; 2] = [LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter];

const MAX_PRECIP_MM: f64 = 10.0;

impl ActivityRule for FertilizeRule {
    fn activity(&self) -> Activity {
        Activity::Fertilize
    }

    fn is_recommended(&self, day: &DayConditions) -> bool {
        day.precipitation_mm <= MAX_PRECIP_MM && GOOD_PHASES.contains(&day.phase)
    }

    fn reason(&self, day: &DayConditions) -> String {
        if day.precipitation_mm > MAX_PRECIP_MM {
            return "Demasiada lluvia lavará los nutrientes. Mejor esperar a que esté más seco."
                .to_string();
        }
        if !GOOD_PHASES.contains(&day.phase) {
            return format!(
                "En fase {}, las plantas absorben menos nutrientes. Mejor esperar a Luna Creciente.",
                day.phase
            );
        }
        "Buen momento para fertilizar. Las plantas absorberán los nutrientes eficientemente."
            .to_string()
    }
}
