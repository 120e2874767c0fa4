use super::{ActivityRule, DayConditions};
use crate::models::{Activity, LunarPhase};

/// Watering rule
///
/// Skip irrigation when rain already covers the day; otherwise the waxing
/// phases are held to improve water uptake.
///
/// Block conditions:
/// - precipitation > 5 mm (rain is sufficient)
/// - phase outside {Luna Creciente, Cuarto Creciente, Gibosa Creciente}
pub struct WaterRule;

const GOOD_PHASES: [LunarPhase; 3] = [
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
];

const MAX_PRECIP_MM: f64 = 5.0;

impl ActivityRule for WaterRule {
    fn activity(&self) -> Activity {
        Activity::Water
    }

    fn is_recommended(&self, day: &DayConditions) -> bool {
        day.precipitation_mm <= MAX_PRECIP_MM && GOOD_PHASES.contains(&day.phase)
    }

    fn reason(&self, day: &DayConditions) -> String {
        if day.precipitation_mm > MAX_PRECIP_MM {
            return "Hay suficiente lluvia natural, no es necesario regar.".to_string();
        }
        if !GOOD_PHASES.contains(&day.phase) {
            return format!(
                "En fase {}, regar moderadamente para evitar pudrición.",
                day.phase
            );
        }
        "Buen momento para regar. Las plantas absorben agua más eficientemente en esta fase lunar."
            .to_string()
    }
}
