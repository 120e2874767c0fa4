pub mod daily;
pub mod data_sync;
pub mod rules;
pub mod scoring;

pub use daily::RecommendationEngine;
pub use data_sync::DataSyncService;
pub use rules::RulesEngine;
