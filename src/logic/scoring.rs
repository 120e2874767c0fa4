use crate::models::{Crop, LunarPhase};

/// Waxing phases that still help most crops when the preferred set misses.
const FALLBACK_PHASES: [LunarPhase; 2] = [LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter];

/// Belt around the optimal temperature range that earns partial credit.
const TEMP_TOLERANCE_C: f64 = 3.0;

/// Suitability of a crop under one day's conditions, 0-100.
///
/// Three independently capped bands, summed:
/// - lunar phase: 30 preferred / 15 generic waxing fallback / 0
/// - temperature: 40 in range / 20 within ±3°C / 0
/// - water needs vs precipitation: 30 ideal window / 15 acceptable / 0
///
/// Humidity is part of the published signature but no band reads it yet;
/// the crop model's humidity range is informational only.
pub fn score(
    crop: &Crop,
    phase: LunarPhase,
    temperature_c: f64,
    _humidity: f64,
    precipitation_mm: f64,
) -> u8 {
    let mut score = 0u8;

    if crop.optimal_phases.contains(&phase) {
        score += 30;
    } else if FALLBACK_PHASES.contains(&phase) {
        score += 15;
    }

    if crop.optimal_temperature.contains(temperature_c) {
        score += 40;
    } else if crop
        .optimal_temperature
        .contains_with_tolerance(temperature_c, TEMP_TOLERANCE_C)
    {
        score += 20;
    }

    if crop.water_needs.ideal(precipitation_mm) {
        score += 30;
    } else if crop.water_needs.acceptable(precipitation_mm) {
        score += 15;
    }

    score
}

/// Rationale paired with the score.
///
/// Classifies precipitation against the ideal window only, so a day in a
/// tier's acceptable-but-not-ideal belt reads as unfavorable here even
/// though the score granted partial credit. Kept for parity with the
/// published behavior.
pub fn reason(crop: &Crop, phase: LunarPhase, temperature_c: f64, precipitation_mm: f64) -> String {
    let good_phase = crop.optimal_phases.contains(&phase);
    let good_temperature = crop.optimal_temperature.contains(temperature_c);
    let good_precipitation = crop.water_needs.ideal(precipitation_mm);

    match (good_phase, good_temperature, good_precipitation) {
        (true, true, true) => format!(
            "Condiciones ideales para {}. Fase lunar, temperatura y humedad óptimas.",
            crop.name
        ),
        (false, true, true) => format!(
            "Temperatura y humedad ideales para {}, pero mejor fase lunar sería {}.",
            crop.name,
            preferred_phases(crop)
        ),
        (true, false, true) => format!(
            "Fase lunar y humedad buenas para {}, pero la temperatura está fuera del rango óptimo ({}°C - {}°C).",
            crop.name, crop.optimal_temperature.min, crop.optimal_temperature.max
        ),
        (true, true, false) => format!(
            "Fase lunar y temperatura ideales para {}, pero las condiciones de humedad no son óptimas.",
            crop.name
        ),
        (false, false, false) => format!(
            "Condiciones no favorables para {}. Considere esperar a mejores condiciones.",
            crop.name
        ),
        _ => format!(
            "Condiciones parcialmente favorables para {}. Algunos factores no son óptimos.",
            crop.name
        ),
    }
}

fn preferred_phases(crop: &Crop) -> String {
    crop.optimal_phases
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" o ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::crop;

    fn rice() -> &'static Crop {
        crop::find("arroz").unwrap()
    }

    fn cacao() -> &'static Crop {
        crop::find("cacao").unwrap()
    }

    #[test]
    fn rice_scores_perfect_on_ideal_waxing_day() {
        // preferred phase + in-range temperature + ideal precipitation
        assert_eq!(score(rice(), LunarPhase::WaxingCrescent, 27.0, 70.0, 6.0), 100);
    }

    #[test]
    fn rice_scores_zero_on_hostile_day() {
        // Full Moon is neither preferred for rice nor a fallback phase,
        // 40°C is beyond the tolerance belt, 0 mm misses even the
        // acceptable window of a high-need crop
        assert_eq!(score(rice(), LunarPhase::FullMoon, 40.0, 70.0, 0.0), 0);
    }

    #[test]
    fn score_is_always_at_most_100() {
        let phases = [
            LunarPhase::NewMoon,
            LunarPhase::WaxingCrescent,
            LunarPhase::FirstQuarter,
            LunarPhase::WaxingGibbous,
            LunarPhase::FullMoon,
            LunarPhase::WaningGibbous,
            LunarPhase::LastQuarter,
            LunarPhase::WaningCrescent,
            LunarPhase::Other,
        ];
        for c in crop::CATALOG {
            for phase in phases {
                for temp in [-10.0, 0.0, 18.0, 25.0, 32.0, 45.0] {
                    for precip in [0.0, 1.0, 3.0, 5.0, 8.0, 12.0, 30.0] {
                        let s = score(c, phase, temp, 70.0, precip);
                        assert!(s <= 100, "{} scored {} over 100", c.id, s);
                    }
                }
            }
        }
    }

    #[test]
    fn phase_band_varies_independently() {
        // hold temperature and precipitation fixed at zero-band values
        let base = score(rice(), LunarPhase::NewMoon, 40.0, 70.0, 0.0);
        let fallback = score(rice(), LunarPhase::FirstQuarter, 40.0, 70.0, 0.0);
        let preferred = score(rice(), LunarPhase::WaxingCrescent, 40.0, 70.0, 0.0);
        assert_eq!(base, 0);
        assert_eq!(fallback, 15);
        assert_eq!(preferred, 30);
    }

    #[test]
    fn temperature_band_has_tolerance_belt() {
        // rice optimal is 22-32; 19-21.9 and 32.1-35 earn partial credit
        let inside = score(rice(), LunarPhase::NewMoon, 22.0, 70.0, 0.0);
        let belt = score(rice(), LunarPhase::NewMoon, 19.0, 70.0, 0.0);
        let outside = score(rice(), LunarPhase::NewMoon, 18.9, 70.0, 0.0);
        assert_eq!(inside, 40);
        assert_eq!(belt, 20);
        assert_eq!(outside, 0);
    }

    #[test]
    fn water_band_partial_credit() {
        // rice is a high-need crop: ideal >= 5, acceptable >= 2
        let ideal = score(rice(), LunarPhase::NewMoon, 40.0, 70.0, 5.0);
        let acceptable = score(rice(), LunarPhase::NewMoon, 40.0, 70.0, 2.0);
        let dry = score(rice(), LunarPhase::NewMoon, 40.0, 70.0, 1.9);
        assert_eq!(ideal, 30);
        assert_eq!(acceptable, 15);
        assert_eq!(dry, 0);
    }

    #[test]
    fn humidity_does_not_move_the_score() {
        for humidity in [0.0, 35.0, 70.0, 100.0] {
            assert_eq!(
                score(rice(), LunarPhase::WaxingCrescent, 27.0, humidity, 6.0),
                100
            );
        }
    }

    #[test]
    fn reason_templates_cover_all_patterns() {
        // all three good
        assert!(reason(rice(), LunarPhase::WaxingCrescent, 27.0, 6.0).contains("Condiciones ideales"));
        // phase off
        assert!(reason(rice(), LunarPhase::NewMoon, 27.0, 6.0).contains("mejor fase lunar"));
        // temperature off
        assert!(reason(rice(), LunarPhase::WaxingCrescent, 40.0, 6.0)
            .contains("fuera del rango óptimo"));
        // precipitation off
        assert!(reason(rice(), LunarPhase::WaxingCrescent, 27.0, 0.0)
            .contains("condiciones de humedad no son óptimas"));
        // all three off
        assert!(reason(rice(), LunarPhase::NewMoon, 40.0, 0.0).contains("no favorables"));
        // mixed patterns fall back to the partial template
        assert!(reason(rice(), LunarPhase::NewMoon, 40.0, 6.0).contains("parcialmente favorables"));
    }

    #[test]
    fn reason_lists_all_preferred_phases() {
        let text = reason(cacao(), LunarPhase::NewMoon, 25.0, 3.0);
        assert!(text.contains("Luna Llena o Cuarto Creciente"));
    }

    #[test]
    fn acceptable_window_scores_while_reason_reads_unfavorable() {
        // 3 mm on rice: acceptable (+15) but not ideal, so the rationale
        // still reports humidity as not optimal
        let s = score(rice(), LunarPhase::WaxingCrescent, 27.0, 70.0, 3.0);
        assert_eq!(s, 85);
        assert!(reason(rice(), LunarPhase::WaxingCrescent, 27.0, 3.0)
            .contains("condiciones de humedad no son óptimas"));
    }
}
