use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Topic input block in the sidebar. Editable whenever no generation is in
/// flight; frozen and dimmed while one is.
pub struct TopicComposer<'a> {
    topic: &'a str,
    active: bool,
    generating: bool,
}

impl<'a> TopicComposer<'a> {
    pub fn new(topic: &'a str, active: bool, generating: bool) -> Self {
        Self {
            topic,
            active,
            generating,
        }
    }
}

impl<'a> ratatui::widgets::Widget for TopicComposer<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let mut lines: Vec<Line> = Vec::new();
        if self.topic.is_empty() {
            lines.push(Line::from(Span::styled(
                "Enter your financial topic here…",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            for l in self.topic.lines() {
                lines.push(Line::from(l.to_string()));
            }
        }

        let title = if self.generating {
            "Presentation Topic (locked)"
        } else if self.active {
            "Presentation Topic (INSERT)"
        } else {
            "Presentation Topic"
        };
        let border_style = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let text_style = if self.generating {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let widget = Paragraph::new(Text::from(lines))
            .style(text_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(title),
            )
            .wrap(Wrap { trim: false });
        widget.render(area, buf);
    }
}
