use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the single status line: score, high score, length, and speed.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    let interval_ms = state.tick_interval().as_millis();

    let line = status_line(
        state.score,
        info.high_score.max(state.score),
        state.snake.len(),
        interval_ms,
        info.theme,
    );

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.theme.hud_fg)),
        area,
    );
}

fn status_line(
    score: u32,
    high_score: u32,
    length: usize,
    interval_ms: u128,
    theme: &Theme,
) -> Line<'static> {
    let value_style = Style::default().fg(theme.hud_accent);
    let sep = Span::raw("  │  ");

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(score.to_string(), value_style),
        sep.clone(),
        Span::raw("Hi: "),
        Span::styled(high_score.to_string(), value_style),
        sep.clone(),
        Span::raw("Length: "),
        Span::styled(length.to_string(), value_style),
        sep,
        Span::raw("Tick: "),
        Span::styled(format!("{interval_ms}ms"), value_style),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::THEME_CLASSIC;

    use super::status_line;

    #[test]
    fn status_line_contains_all_values() {
        let line = status_line(7, 12, 9, 88, &THEME_CLASSIC);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert!(text.contains("Score: 7"));
        assert!(text.contains("Hi: 12"));
        assert!(text.contains("Length: 9"));
        assert!(text.contains("Tick: 88ms"));
    }
}
