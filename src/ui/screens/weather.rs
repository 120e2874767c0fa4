use crate::models::Forecast;
use crate::ui::components::{humidity_gauge, precipitation_gauge, temperature_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

pub struct WeatherScreen<'a> {
    pub forecast: Option<&'a Forecast>,
}

impl<'a> WeatherScreen<'a> {
    pub fn new(forecast: Option<&'a Forecast>) -> Self {
        Self { forecast }
    }
}

impl Widget for WeatherScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(5), // Current gauges
                Constraint::Length(4), // Current details
                Constraint::Min(6),    // Forecast table
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = match self.forecast {
            Some(f) => Line::from(vec![
                Span::styled("Clima", Theme::title()),
                Span::styled(
                    format!(
                        " - {}, {} - {}",
                        f.location.name,
                        f.location.country,
                        f.fetched_at.format("%Y-%m-%d %H:%M UTC")
                    ),
                    Theme::dim(),
                ),
            ]),
            None => Line::from(Span::styled("Clima", Theme::title())),
        };
        Paragraph::new(title).render(chunks[0], buf);

        self.render_current_gauges(chunks[1], buf);
        self.render_current_details(chunks[2], buf);
        self.render_forecast_table(chunks[3], buf);

        let nav = Line::from(vec![
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Actualizar ", Theme::nav_label()),
            Span::styled("[1-4]", Theme::nav_key()),
            Span::styled("Pantallas ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Volver", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl WeatherScreen<'_> {
    fn render_current_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let current = self.forecast.map(|f| &f.current);

        temperature_gauge("Temperatura", current.map(|c| c.temp_c)).render(gauge_chunks[0], buf);
        temperature_gauge("Sensación", current.map(|c| c.feelslike_c)).render(gauge_chunks[1], buf);
        humidity_gauge("Humedad", current.map(|c| c.humidity)).render(gauge_chunks[2], buf);
        precipitation_gauge("Lluvia", current.map(|c| c.precip_mm)).render(gauge_chunks[3], buf);
    }

    fn render_current_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Condiciones Actuales")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let current = match self.forecast.map(|f| &f.current) {
            Some(c) => c,
            None => {
                Paragraph::new(Span::styled("Sin datos disponibles", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Condición: ", Theme::dim()),
                Span::styled(current.condition.as_str(), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled("Viento: ", Theme::dim()),
                Span::styled(
                    format!("{:.1} km/h {}", current.wind_kph, current.wind_dir),
                    Theme::normal(),
                ),
                Span::styled("  Presión: ", Theme::dim()),
                Span::styled(format!("{:.0} mb", current.pressure_mb), Theme::normal()),
                Span::styled("  UV: ", Theme::dim()),
                Span::styled(format!("{:.0}", current.uv), Theme::normal()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_forecast_table(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Pronóstico")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let forecast = match self.forecast {
            Some(f) => f,
            None => {
                Paragraph::new(Span::styled("Sin datos disponibles", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let header = Row::new(vec![
            Cell::from("Fecha"),
            Cell::from("Mín"),
            Cell::from("Máx"),
            Cell::from("Prom"),
            Cell::from("Lluvia"),
            Cell::from("Humedad"),
            Cell::from("Luna"),
            Cell::from("Condición"),
        ])
        .style(Theme::header());

        let rows: Vec<Row> = forecast
            .days
            .iter()
            .map(|day| {
                let w = &day.weather;
                let humidity = w
                    .avg_humidity
                    .map(|h| format!("{:.0}%", h))
                    .unwrap_or_else(|| "-".to_string());

                Row::new(vec![
                    Cell::from(w.date.format("%d/%m").to_string()),
                    Cell::from(format!("{:.0}°", w.min_temp_c))
                        .style(Style::default().fg(Theme::temp_color(w.min_temp_c))),
                    Cell::from(format!("{:.0}°", w.max_temp_c))
                        .style(Style::default().fg(Theme::temp_color(w.max_temp_c))),
                    Cell::from(format!("{:.1}°", w.avg_temp_c))
                        .style(Style::default().fg(Theme::temp_color(w.avg_temp_c))),
                    Cell::from(format!("{:.1} mm", w.total_precip_mm))
                        .style(Style::default().fg(Theme::precip_color(w.total_precip_mm))),
                    Cell::from(humidity),
                    Cell::from(format!(
                        "{} {}%",
                        day.lunar.phase.symbol(),
                        day.lunar.illumination
                    )),
                    Cell::from(w.condition.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(12),
        ];

        Table::new(rows, widths).header(header).render(inner, buf);
    }
}
