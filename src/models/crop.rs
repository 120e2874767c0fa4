use super::lunar::LunarPhase;
use serde::Serialize;

/// Inclusive optimal range in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempRange {
    pub min: f64,
    pub max: f64,
}

impl TempRange {
    pub fn contains(&self, temp_c: f64) -> bool {
        temp_c >= self.min && temp_c <= self.max
    }

    pub fn contains_with_tolerance(&self, temp_c: f64, tolerance: f64) -> bool {
        temp_c >= self.min - tolerance && temp_c <= self.max + tolerance
    }
}

/// Inclusive optimal range in % relative humidity. Informational: shown on
/// the crop detail screen, not consulted by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HumidityRange {
    pub min: f64,
    pub max: f64,
}

/// Water demand tier driving the precipitation-fitness band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WaterNeed {
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
}

impl WaterNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterNeed::Low => "baja",
            WaterNeed::MediumLow => "media-baja",
            WaterNeed::Medium => "media",
            WaterNeed::MediumHigh => "media-alta",
            WaterNeed::High => "alta",
        }
    }

    /// Precipitation window where this tier is fully satisfied.
    pub fn ideal(&self, precip_mm: f64) -> bool {
        match self {
            WaterNeed::High => precip_mm >= 5.0,
            WaterNeed::MediumHigh => precip_mm >= 3.0 && precip_mm <= 10.0,
            WaterNeed::Medium => precip_mm >= 1.0 && precip_mm <= 7.0,
            WaterNeed::MediumLow => precip_mm >= 0.0 && precip_mm <= 5.0,
            WaterNeed::Low => precip_mm < 3.0,
        }
    }

    /// Wider window that still keeps the crop viable.
    pub fn acceptable(&self, precip_mm: f64) -> bool {
        match self {
            WaterNeed::High => precip_mm >= 2.0,
            WaterNeed::MediumHigh => precip_mm >= 1.0,
            WaterNeed::Medium => precip_mm <= 10.0,
            WaterNeed::MediumLow => precip_mm <= 7.0,
            WaterNeed::Low => precip_mm <= 5.0,
        }
    }
}

impl std::fmt::Display for WaterNeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A crop definition from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crop {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub optimal_temperature: TempRange,
    pub optimal_humidity: HumidityRange,
    pub optimal_phases: &'static [LunarPhase],
    pub water_needs: WaterNeed,
    pub description: &'static str,
}

/// The fixed crop catalog for the Salitre growing region. Catalog order is
/// the tie-break order for equal recommendation levels.
pub const CATALOG: &[Crop] = &[
    Crop {
        id: "arroz",
        name: "Arroz",
        icon: "🌾",
        optimal_temperature: TempRange { min: 22.0, max: 32.0 },
        optimal_humidity: HumidityRange { min: 60.0, max: 85.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent],
        water_needs: WaterNeed::High,
        description: "Cereal básico en la alimentación ecuatoriana. En Salitre se cultiva principalmente en tierras bajas inundables.",
    },
    Crop {
        id: "banano",
        name: "Banano",
        icon: "🍌",
        optimal_temperature: TempRange { min: 20.0, max: 35.0 },
        optimal_humidity: HumidityRange { min: 70.0, max: 90.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter],
        water_needs: WaterNeed::MediumHigh,
        description: "Fruta tropical de gran importancia económica. Requiere suelos bien drenados y ricos en nutrientes.",
    },
    Crop {
        id: "cacao",
        name: "Cacao",
        icon: "🍫",
        optimal_temperature: TempRange { min: 18.0, max: 32.0 },
        optimal_humidity: HumidityRange { min: 70.0, max: 100.0 },
        optimal_phases: &[LunarPhase::FullMoon, LunarPhase::FirstQuarter],
        water_needs: WaterNeed::Medium,
        description: "El cacao fino de aroma ecuatoriano es reconocido mundialmente. Prefiere sombra parcial y suelos fértiles.",
    },
    Crop {
        id: "sandia",
        name: "Sandía",
        icon: "🍉",
        optimal_temperature: TempRange { min: 23.0, max: 35.0 },
        optimal_humidity: HumidityRange { min: 65.0, max: 75.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent],
        water_needs: WaterNeed::Medium,
        description: "Fruta refrescante que crece bien en climas cálidos. Necesita espacio para expandirse y suelos bien drenados.",
    },
    Crop {
        id: "soya",
        name: "Soya",
        icon: "🫘",
        optimal_temperature: TempRange { min: 20.0, max: 30.0 },
        optimal_humidity: HumidityRange { min: 60.0, max: 80.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter],
        water_needs: WaterNeed::MediumLow,
        description: "Leguminosa rica en proteínas. Mejora la calidad del suelo fijando nitrógeno.",
    },
    Crop {
        id: "mango",
        name: "Mango",
        icon: "🥭",
        optimal_temperature: TempRange { min: 24.0, max: 35.0 },
        optimal_humidity: HumidityRange { min: 40.0, max: 60.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter],
        water_needs: WaterNeed::Medium,
        description: "Fruta tropical dulce muy apreciada. Los árboles pueden vivir más de 100 años produciendo frutos.",
    },
    Crop {
        id: "maiz",
        name: "Maíz",
        icon: "🌽",
        optimal_temperature: TempRange { min: 18.0, max: 32.0 },
        optimal_humidity: HumidityRange { min: 50.0, max: 75.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent],
        water_needs: WaterNeed::Medium,
        description: "Cereal básico en la alimentación ecuatoriana. Versátil en su uso, desde alimentación hasta forraje.",
    },
    Crop {
        id: "verde",
        name: "Plátano Verde",
        icon: "🍌",
        optimal_temperature: TempRange { min: 20.0, max: 35.0 },
        optimal_humidity: HumidityRange { min: 70.0, max: 90.0 },
        optimal_phases: &[LunarPhase::WaxingCrescent, LunarPhase::FirstQuarter],
        water_needs: WaterNeed::High,
        description: "Variedad de plátano consumido principalmente cocinado. Base de platos tradicionales como el bolón.",
    },
];

pub fn find(id: &str) -> Option<&'static Crop> {
    CATALOG.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn catalog_ranges_are_ordered() {
        for crop in CATALOG {
            assert!(
                crop.optimal_temperature.min < crop.optimal_temperature.max,
                "{} temperature range inverted",
                crop.id
            );
            assert!(
                crop.optimal_humidity.min < crop.optimal_humidity.max,
                "{} humidity range inverted",
                crop.id
            );
            assert!(!crop.optimal_phases.is_empty(), "{} has no phases", crop.id);
            assert!(!crop.description.is_empty());
        }
    }

    #[test]
    fn temp_range_boundaries_inclusive() {
        let range = TempRange { min: 22.0, max: 32.0 };
        assert!(range.contains(22.0));
        assert!(range.contains(32.0));
        assert!(!range.contains(21.9));
        assert!(!range.contains(32.1));

        assert!(range.contains_with_tolerance(19.0, 3.0));
        assert!(range.contains_with_tolerance(35.0, 3.0));
        assert!(!range.contains_with_tolerance(18.9, 3.0));
        assert!(!range.contains_with_tolerance(35.1, 3.0));
    }

    #[test]
    fn water_need_ideal_windows() {
        assert!(WaterNeed::High.ideal(5.0));
        assert!(!WaterNeed::High.ideal(4.9));

        assert!(WaterNeed::MediumHigh.ideal(3.0));
        assert!(WaterNeed::MediumHigh.ideal(10.0));
        assert!(!WaterNeed::MediumHigh.ideal(10.1));

        assert!(WaterNeed::Medium.ideal(1.0));
        assert!(WaterNeed::Medium.ideal(7.0));
        assert!(!WaterNeed::Medium.ideal(0.5));

        assert!(WaterNeed::MediumLow.ideal(0.0));
        assert!(WaterNeed::MediumLow.ideal(5.0));
        assert!(!WaterNeed::MediumLow.ideal(5.5));

        assert!(WaterNeed::Low.ideal(2.9));
        assert!(!WaterNeed::Low.ideal(3.0));
    }

    #[test]
    fn water_need_acceptable_windows() {
        assert!(WaterNeed::High.acceptable(2.0));
        assert!(!WaterNeed::High.acceptable(1.9));

        assert!(WaterNeed::MediumHigh.acceptable(1.0));
        assert!(WaterNeed::Medium.acceptable(10.0));
        assert!(!WaterNeed::Medium.acceptable(10.1));

        assert!(WaterNeed::MediumLow.acceptable(7.0));
        assert!(WaterNeed::Low.acceptable(5.0));
        assert!(!WaterNeed::Low.acceptable(5.1));
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("arroz").map(|c| c.name), Some("Arroz"));
        assert!(find("quinua").is_none());
    }
}
