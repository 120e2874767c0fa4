use crate::models::{crop, Crop, DailyRecommendation};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct CropsScreen<'a> {
    pub selected_index: usize,
    pub today: Option<&'a DailyRecommendation>,
}

impl<'a> CropsScreen<'a> {
    pub fn new(today: Option<&'a DailyRecommendation>) -> Self {
        Self {
            selected_index: 0,
            today,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    fn selected_crop(&self) -> Option<&'static Crop> {
        crop::CATALOG.get(self.selected_index)
    }

    fn today_entry(&self, crop_id: &str) -> Option<&crate::models::CropRecommendation> {
        self.today
            .and_then(|t| t.crops.iter().find(|c| c.crop_id == crop_id))
    }
}

impl Widget for CropsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Cultivos", Theme::title()),
            Span::styled(
                format!(" ({} en el catálogo)", crop::CATALOG.len()),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_detail(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navegar ", Theme::nav_label()),
            Span::styled("[1-4]", Theme::nav_key()),
            Span::styled("Pantallas ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Volver", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl CropsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Catálogo")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = crop::CATALOG
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let level = self
                    .today_entry(c.id)
                    .map(|e| format!("{:>3}%", e.recommendation_level))
                    .unwrap_or_else(|| "  - ".to_string());
                let level_color = self
                    .today_entry(c.id)
                    .map(|e| Theme::level_color(e.recommendation_level))
                    .unwrap_or(Theme::DIM);

                let line = Line::from(vec![
                    Span::styled(format!("{} ", level), Style::default().fg(level_color)),
                    Span::styled(format!("{} {}", c.icon, c.name), Theme::normal()),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Detalle")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let crop = match self.selected_crop() {
            Some(c) => c,
            None => {
                Paragraph::new(Span::styled("Seleccione un cultivo", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("{} {}", crop.icon, crop.name),
            Theme::header(),
        )));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(Span::styled(crop.description, Theme::normal())));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![
            Span::styled("Temperatura óptima: ", Theme::dim()),
            Span::styled(
                format!(
                    "{}°C - {}°C",
                    crop.optimal_temperature.min, crop.optimal_temperature.max
                ),
                Theme::normal(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Humedad óptima: ", Theme::dim()),
            Span::styled(
                format!(
                    "{}% - {}%",
                    crop.optimal_humidity.min, crop.optimal_humidity.max
                ),
                Theme::normal(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Necesidad de agua: ", Theme::dim()),
            Span::styled(crop.water_needs.as_str(), Theme::normal()),
        ]));

        let phases = crop
            .optimal_phases
            .iter()
            .map(|p| format!("{} {}", p.symbol(), p))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(vec![
            Span::styled("Fases favorables: ", Theme::dim()),
            Span::styled(phases, Theme::highlight()),
        ]));
        lines.push(Line::from(vec![]));

        match self.today_entry(crop.id) {
            Some(entry) => {
                lines.push(Line::from(Span::styled("Hoy:", Theme::header())));
                lines.push(Line::from(vec![
                    Span::styled("Nivel: ", Theme::dim()),
                    Span::styled(
                        format!("{}%", entry.recommendation_level),
                        Style::default().fg(Theme::level_color(entry.recommendation_level)),
                    ),
                    Span::styled(
                        if entry.is_recommended {
                            "  (recomendado)"
                        } else {
                            "  (no recomendado)"
                        },
                        Theme::dim(),
                    ),
                ]));
                lines.push(Line::from(Span::styled(entry.reason.as_str(), Theme::normal())));
            }
            None => {
                lines.push(Line::from(Span::styled(
                    "Sin evaluación para hoy (no hay datos del pronóstico).",
                    Theme::dim(),
                )));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
