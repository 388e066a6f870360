use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// ASCII banner rendered on the idle screen. ASCII-only for compatibility
/// with our lint rules.
pub const STARTUP_BANNER: &str = r" ___ _      ___
| __(_)_ _ | _ \_ _ ___
| _|| | ' \|  _/ '_/ -_)
|_| |_|_||_|_| |_| \___|
";

/// Welcome copy shown in the main pane before the first generation.
pub fn welcome_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = STARTUP_BANNER
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::Cyan),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Financial Presentation Generator",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(
        "Designed for high-stakes 45-minute presentations.",
    ));
    lines.push(Line::from(
        "Input your topic and generate a structured slide deck complete with",
    ));
    lines.push(Line::from(
        "bullet points, visual suggestions, and a detailed speaker script.",
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("45m", Style::default().fg(Color::Yellow)),
        Span::raw(" optimized structure   "),
        Span::styled("Script", Style::default().fg(Color::Cyan)),
        Span::raw(" full speaker notes   "),
        Span::styled("JSON", Style::default().fg(Color::Green)),
        Span::raw(" structured data"),
    ]));
    lines
}
