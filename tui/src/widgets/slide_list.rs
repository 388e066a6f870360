use finpre_common::{Presentation, Slide};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Separator between bullet points in a list-entry preview.
pub const BULLET_SEPARATOR: &str = " • ";

/// Projection of one slide into its list-entry strings. Pure, so the list
/// contents can be checked without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// 1-based ordinal, e.g. "#3".
    pub ordinal: String,
    pub duration: String,
    pub title: String,
    pub preview: String,
}

pub fn list_entry(slide: &Slide, index: usize, width: usize) -> ListEntry {
    ListEntry {
        ordinal: format!("#{}", index + 1),
        duration: slide.estimated_duration.clone(),
        title: truncate_to_width(&slide.title, width),
        preview: truncate_to_width(&slide.bullet_points.join(BULLET_SEPARATOR), width),
    }
}

/// All entries of the deck, in presentation order.
pub fn list_entries(deck: &Presentation, width: usize) -> Vec<ListEntry> {
    deck.slides
        .iter()
        .enumerate()
        .map(|(index, slide)| list_entry(slide, index, width))
        .collect()
}

/// Truncate to at most `max_width` display columns, appending an ellipsis
/// when anything was cut. Width-aware so CJK titles do not overflow.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

const ROWS_PER_ENTRY: usize = 4; // ordinal/duration, title, preview, gap

/// Sidebar list over the deck. The selected entry is highlighted; entries
/// scroll so the selection stays visible.
pub struct SlideList<'a> {
    deck: &'a Presentation,
    selected: usize,
}

impl<'a> SlideList<'a> {
    pub fn new(deck: &'a Presentation, selected: usize) -> Self {
        Self { deck, selected }
    }
}

impl<'a> ratatui::widgets::Widget for SlideList<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::ALL).title("Slides");
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = (inner.height as usize / ROWS_PER_ENTRY).max(1);
        let first = if self.selected >= visible {
            self.selected + 1 - visible
        } else {
            0
        };

        let text_width = inner.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for (index, slide) in self
            .deck
            .slides
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
        {
            let entry = list_entry(slide, index, text_width);
            let selected = index == self.selected;
            let marker_style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let title_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", entry.ordinal), marker_style),
                Span::raw(" "),
                Span::styled(entry.duration, Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(Span::styled(entry.title, title_style)));
            lines.push(Line::from(Span::styled(
                entry.preview,
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Placeholder shown in the list area before a deck exists.
pub struct SlideListPlaceholder;

impl ratatui::widgets::Widget for SlideListPlaceholder {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let widget = Paragraph::new(Line::from(Span::styled(
            "Slides will appear here",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(Block::default().borders(Borders::ALL).title("Slides"));
        widget.render(area, buf);
    }
}
