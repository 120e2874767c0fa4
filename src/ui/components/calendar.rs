use crate::models::{LunarObservation, LunarPhase, MonthLunarData};
use crate::ui::Theme;
use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        12 => "Diciembre",
        _ => "",
    }
}

/// Month grid of lunar phases: one cell per day with its phase symbol.
pub struct LunarCalendarWidget<'a> {
    year: i32,
    month: u32,
    month_data: Option<&'a MonthLunarData>,
    selected_date: Option<NaiveDate>,
}

const CELL_WIDTH: u16 = 6;

impl<'a> LunarCalendarWidget<'a> {
    pub fn new(year: i32, month: u32, month_data: Option<&'a MonthLunarData>) -> Self {
        Self {
            year,
            month,
            month_data,
            selected_date: None,
        }
    }

    pub fn selected(mut self, date: Option<NaiveDate>) -> Self {
        self.selected_date = date;
        self
    }

    fn observation_for(&self, date: NaiveDate) -> Option<&LunarObservation> {
        self.month_data.and_then(|m| m.for_date(date))
    }

    fn days_in_month(&self) -> u32 {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };

        next_month
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(30)
    }

    fn first_weekday(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    fn phase_style(phase: LunarPhase) -> Style {
        if phase.is_waxing() {
            Style::default().fg(Theme::WAXING)
        } else if phase.is_waning() {
            Style::default().fg(Theme::WANING)
        } else {
            Style::default().fg(Theme::MOON)
        }
    }
}

impl Widget for LunarCalendarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("{} {}", month_name(self.month), self.year);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 7 * CELL_WIDTH || inner.height < 8 {
            return;
        }

        // Day-of-week headers
        let headers: String = ["Do", "Lu", "Ma", "Mi", "Ju", "Vi", "Sá"]
            .iter()
            .map(|d| format!("{:<width$}", d, width = CELL_WIDTH as usize))
            .collect();
        let header_line = Line::from(Span::styled(headers, Theme::dim()));
        buf.set_line(inner.x, inner.y, &header_line, inner.width);

        let today = Local::now().date_naive();
        let days_in_month = self.days_in_month();
        let first_weekday = self.first_weekday();

        let mut day = 1u32;
        let mut row = 1u16;

        while day <= days_in_month {
            let mut x = inner.x;

            for col in 0..7 {
                if (row == 1 && col < first_weekday) || day > days_in_month {
                    x += CELL_WIDTH;
                    continue;
                }

                let date = NaiveDate::from_ymd_opt(self.year, self.month, day);
                let observation = date.and_then(|d| self.observation_for(d));

                let is_today = date.map(|d| d == today).unwrap_or(false);
                let is_selected = date.is_some() && self.selected_date == date;

                let day_style = if is_selected {
                    Theme::selected()
                } else if is_today {
                    Theme::highlight()
                } else {
                    Theme::normal()
                };

                let symbol_style = match observation {
                    Some(o) if !is_selected => Self::phase_style(o.phase),
                    _ => day_style,
                };
                let symbol = observation.map(|o| o.phase.symbol()).unwrap_or("·");

                let cell = Line::from(vec![
                    Span::styled(format!("{:>2}", day), day_style),
                    Span::styled(format!(" {}", symbol), symbol_style),
                ]);

                if inner.y + row < inner.y + inner.height {
                    buf.set_line(x, inner.y + row, &cell, CELL_WIDTH);
                }

                x += CELL_WIDTH;
                day += 1;
            }

            row += 1;
        }
    }
}

/// Color key for the phase symbols in the grid.
pub struct PhaseLegend;

impl Widget for PhaseLegend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = [
            ("Creciente", Theme::WAXING),
            ("Menguante", Theme::WANING),
            ("Nueva/Llena", Theme::MOON),
        ];

        let mut y = area.y;
        for (label, color) in entries {
            if y >= area.y + area.height {
                break;
            }

            let line = Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(label, Theme::dim()),
            ]);

            buf.set_line(area.x, y, &line, area.width);
            y += 1;
        }
    }
}
