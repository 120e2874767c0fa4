use crate::models::{CurrentWeather, DailyRecommendation, LunarObservation};
use crate::ui::components::{
    humidity_gauge, illumination_gauge, precipitation_gauge, temperature_gauge,
};
use crate::ui::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct HomeScreen<'a> {
    pub community: &'a str,
    pub current: Option<&'a CurrentWeather>,
    pub today_lunar: Option<&'a LunarObservation>,
    pub today: Option<&'a DailyRecommendation>,
    pub last_updated: Option<DateTime<Utc>>,
    pub status_message: Option<&'a str>,
}

impl<'a> HomeScreen<'a> {
    pub fn new(
        community: &'a str,
        current: Option<&'a CurrentWeather>,
        today_lunar: Option<&'a LunarObservation>,
        today: Option<&'a DailyRecommendation>,
    ) -> Self {
        Self {
            community,
            current,
            today_lunar,
            today,
            last_updated: None,
            status_message: None,
        }
    }

    pub fn updated_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_updated = at;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Gauges row
                Constraint::Min(8),    // Activities and crops
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);

        self.render_activities(middle[0], buf);
        self.render_top_crops(middle[1], buf);

        self.render_status_message(chunks[3], buf);
        self.render_nav(chunks[4], buf);
    }
}

impl HomeScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let phase_info = match self.today_lunar {
            Some(lunar) => format!(
                " | {} {} ({}%)",
                lunar.phase.symbol(),
                lunar.phase,
                lunar.illumination
            ),
            None => String::new(),
        };
        let title = format!("Lunario - {}{}", self.community, phase_info);

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let last_updated = self
            .last_updated
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "Nunca".to_string());

        let info = format!("Última actualización: {}", last_updated);
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let temp = self.current.map(|c| c.temp_c);
        temperature_gauge("Temperatura", temp).render(gauge_chunks[0], buf);

        let humidity = self.current.map(|c| c.humidity);
        humidity_gauge("Humedad", humidity).render(gauge_chunks[1], buf);

        let precip = self.current.map(|c| c.precip_mm);
        precipitation_gauge("Lluvia", precip).render(gauge_chunks[2], buf);

        let illumination = self.today_lunar.map(|l| l.illumination as f64);
        illumination_gauge("Iluminación", illumination).render(gauge_chunks[3], buf);
    }

    fn render_activities(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Actividades de Hoy", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let today = match self.today {
            Some(t) => t,
            None => {
                Paragraph::new(Span::styled("Sin datos del pronóstico", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let items: Vec<ListItem> = today
            .activities
            .iter()
            .map(|a| {
                let verdict = if a.is_recommended { "✓" } else { "✗" };
                let title_line = Line::from(vec![
                    Span::styled(format!("{} ", verdict), Theme::verdict_style(a.is_recommended)),
                    Span::styled(
                        format!("{} {}", a.activity.icon(), a.activity),
                        Style::default().fg(a.activity.color()),
                    ),
                ]);
                let reason_line = Line::from(vec![
                    Span::raw("  "),
                    Span::styled(a.reason.as_str(), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, reason_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_top_crops(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Cultivos Recomendados", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let today = match self.today {
            Some(t) => t,
            None => {
                Paragraph::new(Span::styled("Sin datos del pronóstico", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let items: Vec<ListItem> = today
            .top_crops(5)
            .iter()
            .map(|c| {
                let icon = crate::models::crop::find(&c.crop_id)
                    .map(|def| def.icon)
                    .unwrap_or("");
                let level_style = Style::default().fg(Theme::level_color(c.recommendation_level));
                let line = Line::from(vec![
                    Span::styled(format!("{:>3}% ", c.recommendation_level), level_style),
                    Span::styled(format!("{} {}", icon, c.crop_name), Theme::normal()),
                ]);
                ListItem::new(line)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("No se pudo") || msg.contains("Error") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Inicio ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Calendario ", Theme::nav_label()),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled("Clima ", Theme::nav_label()),
            Span::styled("[4]", Theme::nav_key()),
            Span::styled("Cultivos ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Actualizar ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Salir", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}
