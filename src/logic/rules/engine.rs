use super::{
    fertilize::FertilizeRule, harvest::HarvestRule, plant::PlantRule, prune::PruneRule,
    water::WaterRule, weed::WeedRule, ActivityRule, DayConditions,
};
use crate::models::{Activity, ActivityRecommendation};

pub struct RulesEngine {
    rules: Vec<Box<dyn ActivityRule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        // Display order is fixed: plant, water, prune, harvest, fertilize, weed
        let rules: Vec<Box<dyn ActivityRule>> = vec![
            Box::new(PlantRule),
            Box::new(WaterRule),
            Box::new(PruneRule),
            Box::new(HarvestRule),
            Box::new(FertilizeRule),
            Box::new(WeedRule),
        ];

        Self { rules }
    }

    /// Evaluate every rule for one day, in display order.
    pub fn evaluate(&self, day: &DayConditions) -> Vec<ActivityRecommendation> {
        self.rules
            .iter()
            .map(|rule| ActivityRecommendation {
                activity: rule.activity(),
                is_recommended: rule.is_recommended(day),
                reason: rule.reason(day),
            })
            .collect()
    }

    pub fn evaluate_activity(
        &self,
        activity: Activity,
        day: &DayConditions,
    ) -> Option<ActivityRecommendation> {
        self.rules
            .iter()
            .find(|r| r.activity() == activity)
            .map(|rule| ActivityRecommendation {
                activity: rule.activity(),
                is_recommended: rule.is_recommended(day),
                reason: rule.reason(day),
            })
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
