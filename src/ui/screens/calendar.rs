use crate::models::{DailyRecommendation, MonthLunarData};
use crate::ui::components::{LunarCalendarWidget, PhaseLegend};
use crate::ui::Theme;
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct CalendarScreen<'a> {
    pub year: i32,
    pub month: u32,
    pub month_data: Option<&'a MonthLunarData>,
    pub selected_date: Option<NaiveDate>,
    pub selected_recommendation: Option<&'a DailyRecommendation>,
    pub loading: bool,
}

impl<'a> CalendarScreen<'a> {
    pub fn new(year: i32, month: u32, month_data: Option<&'a MonthLunarData>) -> Self {
        Self {
            year,
            month,
            month_data,
            selected_date: None,
            selected_recommendation: None,
            loading: false,
        }
    }

    pub fn selected(mut self, date: Option<NaiveDate>) -> Self {
        self.selected_date = date;
        self
    }

    pub fn with_recommendation(mut self, rec: Option<&'a DailyRecommendation>) -> Self {
        self.selected_recommendation = rec;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for CalendarScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Grid and day detail
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = if self.loading {
            Line::from(vec![
                Span::styled("Calendario Lunar", Theme::title()),
                Span::styled(" (cargando fases...)", Theme::dim()),
            ])
        } else {
            Line::from(Span::styled("Calendario Lunar", Theme::title()))
        };
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(46), Constraint::Min(30)])
            .split(chunks[1]);

        self.render_grid(content[0], buf);
        self.render_day_detail(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Mes ", Theme::nav_label()),
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Día ", Theme::nav_label()),
            Span::styled("[1-4]", Theme::nav_key()),
            Span::styled("Pantallas ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Volver", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl CalendarScreen<'_> {
    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(9), Constraint::Length(3)])
            .split(area);

        LunarCalendarWidget::new(self.year, self.month, self.month_data)
            .selected(self.selected_date)
            .render(chunks[0], buf);

        PhaseLegend.render(chunks[1], buf);
    }

    fn render_day_detail(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.selected_date {
            Some(date) => format!("Día {}", date.format("%d/%m/%Y")),
            None => "Día".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let observation = self
            .selected_date
            .and_then(|d| self.month_data.and_then(|m| m.for_date(d)));

        let mut lines: Vec<Line> = Vec::new();

        if let Some(obs) = observation {
            lines.push(Line::from(vec![
                Span::styled("Fase: ", Theme::dim()),
                Span::styled(
                    format!("{} {}", obs.phase.symbol(), obs.phase),
                    Theme::highlight(),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Iluminación: ", Theme::dim()),
                Span::styled(format!("{}%", obs.illumination), Theme::normal()),
            ]));
            lines.push(Line::from(vec![]));
        }

        match self.selected_recommendation {
            Some(rec) => {
                lines.push(Line::from(vec![
                    Span::styled("Clima: ", Theme::dim()),
                    Span::styled(rec.weather_condition.as_str(), Theme::normal()),
                    Span::styled(
                        format!("  {:.0}°C  {:.1} mm", rec.temperature_c, rec.precipitation_mm),
                        Theme::normal(),
                    ),
                ]));
                lines.push(Line::from(vec![]));

                lines.push(Line::from(Span::styled("Actividades:", Theme::header())));
                for a in &rec.activities {
                    let verdict = if a.is_recommended { "✓" } else { "✗" };
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", verdict),
                            Theme::verdict_style(a.is_recommended),
                        ),
                        Span::styled(a.activity.as_str(), Style::default().fg(a.activity.color())),
                    ]));
                }
                lines.push(Line::from(vec![]));

                lines.push(Line::from(Span::styled("Mejores cultivos:", Theme::header())));
                for c in rec.top_crops(3) {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{:>3}% ", c.recommendation_level),
                            Style::default().fg(Theme::level_color(c.recommendation_level)),
                        ),
                        Span::styled(c.crop_name.as_str(), Theme::normal()),
                    ]));
                }
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "Sin pronóstico para este día. Las recomendaciones solo cubren los días del pronóstico.",
                    Theme::dim(),
                )));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
