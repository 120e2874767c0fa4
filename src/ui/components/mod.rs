pub mod calendar;
pub mod gauge;

pub use calendar::{month_name, LunarCalendarWidget, PhaseLegend};
pub use gauge::{humidity_gauge, illumination_gauge, precipitation_gauge, temperature_gauge};
