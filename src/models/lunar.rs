use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lunar phase as reported by the astronomy provider.
///
/// `Other` absorbs any provider label outside the 8 canonical phases. It is
/// a member of no preferred-phase set, so rules and scoring treat it as
/// unfavorable rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
    Other,
}

impl LunarPhase {
    pub fn from_provider(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "new moon" => LunarPhase::NewMoon,
            "waxing crescent" => LunarPhase::WaxingCrescent,
            "first quarter" => LunarPhase::FirstQuarter,
            "waxing gibbous" => LunarPhase::WaxingGibbous,
            "full moon" => LunarPhase::FullMoon,
            "waning gibbous" => LunarPhase::WaningGibbous,
            "last quarter" => LunarPhase::LastQuarter,
            "waning crescent" => LunarPhase::WaningCrescent,
            _ => LunarPhase::Other,
        }
    }

    /// Display name in Spanish, as shown to the Salitre community.
    pub fn as_str(&self) -> &'static str {
        match self {
            LunarPhase::NewMoon => "Luna Nueva",
            LunarPhase::WaxingCrescent => "Luna Creciente",
            LunarPhase::FirstQuarter => "Cuarto Creciente",
            LunarPhase::WaxingGibbous => "Gibosa Creciente",
            LunarPhase::FullMoon => "Luna Llena",
            LunarPhase::WaningGibbous => "Gibosa Menguante",
            LunarPhase::LastQuarter => "Cuarto Menguante",
            LunarPhase::WaningCrescent => "Luna Menguante",
            LunarPhase::Other => "Fase Desconocida",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LunarPhase::NewMoon => "🌑",
            LunarPhase::WaxingCrescent => "🌒",
            LunarPhase::FirstQuarter => "🌓",
            LunarPhase::WaxingGibbous => "🌔",
            LunarPhase::FullMoon => "🌕",
            LunarPhase::WaningGibbous => "🌖",
            LunarPhase::LastQuarter => "🌗",
            LunarPhase::WaningCrescent => "🌘",
            LunarPhase::Other => "?",
        }
    }

    pub fn is_waxing(&self) -> bool {
        matches!(
            self,
            LunarPhase::WaxingCrescent | LunarPhase::FirstQuarter | LunarPhase::WaxingGibbous
        )
    }

    pub fn is_waning(&self) -> bool {
        matches!(
            self,
            LunarPhase::WaningGibbous | LunarPhase::LastQuarter | LunarPhase::WaningCrescent
        )
    }
}

impl std::fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One day's lunar observation from the astronomy provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarObservation {
    pub date: NaiveDate,
    pub phase: LunarPhase,
    /// Illuminated fraction of the disc, 0-100
    pub illumination: u8,
}

/// A full month of lunar observations for the calendar grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLunarData {
    pub year: i32,
    pub month: u32,
    pub days: Vec<LunarObservation>,
}

impl MonthLunarData {
    pub fn for_date(&self, date: NaiveDate) -> Option<&LunarObservation> {
        self.days.iter().find(|d| d.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_from_provider_labels() {
        assert_eq!(
            LunarPhase::from_provider("Waxing Crescent"),
            LunarPhase::WaxingCrescent
        );
        assert_eq!(LunarPhase::from_provider("full moon"), LunarPhase::FullMoon);
        assert_eq!(
            LunarPhase::from_provider("LAST QUARTER"),
            LunarPhase::LastQuarter
        );
        assert_eq!(
            LunarPhase::from_provider(" new moon "),
            LunarPhase::NewMoon
        );
    }

    #[test]
    fn unknown_label_maps_to_other() {
        assert_eq!(LunarPhase::from_provider("Blood Moon"), LunarPhase::Other);
        assert_eq!(LunarPhase::from_provider(""), LunarPhase::Other);
    }

    #[test]
    fn spanish_display_names() {
        assert_eq!(LunarPhase::WaxingCrescent.as_str(), "Luna Creciente");
        assert_eq!(LunarPhase::FirstQuarter.as_str(), "Cuarto Creciente");
        assert_eq!(LunarPhase::FullMoon.as_str(), "Luna Llena");
        assert_eq!(LunarPhase::WaningCrescent.as_str(), "Luna Menguante");
    }

    #[test]
    fn waxing_and_waning_are_disjoint() {
        let all = [
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
        for phase in all {
            assert!(!(phase.is_waxing() && phase.is_waning()));
        }
    }

    #[test]
    fn month_lookup_by_date() {
        let month = MonthLunarData {
            year: 2025,
            month: 3,
            days: vec![LunarObservation {
                date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
                phase: LunarPhase::FullMoon,
                illumination: 100,
            }],
        };

        let hit = month.for_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(hit.map(|d| d.phase), Some(LunarPhase::FullMoon));
        assert!(month
            .for_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
            .is_none());
    }
}
