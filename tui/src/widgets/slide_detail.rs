use finpre_common::Slide;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// "index+1 / total" positional indicator.
pub fn position_indicator(index: usize, total: usize) -> String {
    format!("{} / {}", index + 1, total)
}

/// Full projection of the selected slide: title, ordered bullets, the
/// visual suggestion as a placeholder caption (no chart is ever rendered),
/// and the speaker script with line breaks preserved.
pub struct SlideDetail<'a> {
    slide: &'a Slide,
    index: usize,
    total: usize,
}

impl<'a> SlideDetail<'a> {
    pub fn new(slide: &'a Slide, index: usize, total: usize) -> Self {
        Self {
            slide,
            index,
            total,
        }
    }
}

impl<'a> ratatui::widgets::Widget for SlideDetail<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Slide");
        let inner = block.inner(area);
        block.render(area, buf);

        let bullet_rows = (self.slide.bullet_points.len() as u16).saturating_add(1);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),           // title + position/duration
                Constraint::Length(bullet_rows), // bullets
                Constraint::Length(3),           // visual placeholder
                Constraint::Min(3),              // speaker notes
            ])
            .split(inner);

        let header = vec![
            Line::from(Span::styled(
                self.slide.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    position_indicator(self.index, self.total),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("   "),
                Span::styled(
                    format!(" {} ", self.slide.estimated_duration),
                    Style::default().fg(Color::Black).bg(Color::Yellow),
                ),
            ]),
        ];
        Paragraph::new(header).render(chunks[0], buf);

        let bullets: Vec<Line> = self
            .slide
            .bullet_points
            .iter()
            .map(|point| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Cyan)),
                    Span::raw(point.clone()),
                ])
            })
            .collect();
        Paragraph::new(bullets)
            .wrap(Wrap { trim: false })
            .render(chunks[1], buf);

        let visual = Paragraph::new(Line::from(Span::styled(
            self.slide.visual_suggestion.clone(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Visual suggestion"),
        )
        .wrap(Wrap { trim: true });
        visual.render(chunks[2], buf);

        // Text::from keeps the script's own line breaks; Wrap reflows long
        // lines inside them.
        let notes = Paragraph::new(Text::from(self.slide.speaker_notes.clone()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Speaker notes (~{} read)", self.slide.estimated_duration)),
            )
            .wrap(Wrap { trim: false });
        notes.render(chunks[3], buf);
    }
}
