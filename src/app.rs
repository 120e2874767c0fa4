use crate::config::Config;
use crate::logic::data_sync::RefreshOutcome;
use crate::models::{DailyRecommendation, Forecast, MonthLunarData};
use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Calendar,
    Weather,
    Crops,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Home),
            '2' => Some(Screen::Calendar),
            '3' => Some(Screen::Weather),
            '4' => Some(Screen::Crops),
            _ => None,
        }
    }
}

pub struct CalendarState {
    pub year: i32,
    pub month: u32,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            selected_date: Some(now.date_naive()),
        }
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
        self.selected_date = NaiveDate::from_ymd_opt(self.year, self.month, 1);
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
        self.selected_date = NaiveDate::from_ymd_opt(self.year, self.month, 1);
    }

    pub fn select_prev_day(&mut self) {
        if let Some(date) = self.selected_date {
            if let Some(prev) = date.pred_opt() {
                if prev.month() == self.month {
                    self.selected_date = Some(prev);
                }
            }
        }
    }

    pub fn select_next_day(&mut self) {
        if let Some(date) = self.selected_date {
            if let Some(next) = date.succ_opt() {
                if next.month() == self.month {
                    self.selected_date = Some(next);
                }
            }
        }
    }
}

pub struct CropsState {
    pub selected_index: usize,
}

impl CropsState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    // Data
    pub forecast: Option<Forecast>,
    pub recommendations: Vec<DailyRecommendation>,
    pub month_data: Option<MonthLunarData>,

    // Screen states
    pub calendar_state: CalendarState,
    pub crops_state: CropsState,

    // UI state
    pub status_message: Option<String>,
    pub refreshing: bool,
    pub needs_refresh: bool,
    pub needs_month_fetch: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            screen: Screen::Home,
            should_quit: false,
            config,
            forecast: None,
            recommendations: Vec::new(),
            month_data: None,
            calendar_state: CalendarState::new(),
            crops_state: CropsState::new(),
            status_message: None,
            refreshing: false,
            needs_refresh: false,
            needs_month_fetch: false,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        if screen == Screen::Calendar && !self.month_is_loaded() {
            self.needs_month_fetch = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Actualizando datos...");
    }

    pub fn update_forecast(&mut self, outcome: RefreshOutcome) {
        self.forecast = Some(outcome.forecast);
        self.recommendations = outcome.recommendations;
    }

    pub fn update_month(&mut self, data: MonthLunarData) {
        self.month_data = Some(data);
    }

    /// Whether the loaded month grid matches the month being viewed.
    pub fn month_is_loaded(&self) -> bool {
        self.month_data
            .as_ref()
            .map(|m| m.year == self.calendar_state.year && m.month == self.calendar_state.month)
            .unwrap_or(false)
    }

    pub fn calendar_prev_month(&mut self) {
        self.calendar_state.prev_month();
        if !self.month_is_loaded() {
            self.needs_month_fetch = true;
        }
    }

    pub fn calendar_next_month(&mut self) {
        self.calendar_state.next_month();
        if !self.month_is_loaded() {
            self.needs_month_fetch = true;
        }
    }

    pub fn recommendation_for(&self, date: NaiveDate) -> Option<&DailyRecommendation> {
        self.recommendations.iter().find(|r| r.date == date)
    }

    pub fn today_recommendation(&self) -> Option<&DailyRecommendation> {
        self.recommendation_for(Local::now().date_naive())
    }

    pub fn selected_recommendation(&self) -> Option<&DailyRecommendation> {
        self.calendar_state
            .selected_date
            .and_then(|d| self.recommendation_for(d))
    }
}
