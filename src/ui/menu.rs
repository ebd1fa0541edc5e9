use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;

/// Draws the pre-game hint as a centered popup over the board.
pub fn render_start_hint(frame: &mut Frame<'_>, area: Rect, high_score: u32, theme: &Theme) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(format!("High score: {high_score}")),
        Line::from(""),
        Line::from("Press an arrow key to start"),
        Line::from("[P] Pause  [R] Restart  [Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Arrows or WASD to steer, [T] cycles themes"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P]/[Space] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_title))
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let is_new_high = score > high_score;
    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!(
            "High score: {}",
            if is_new_high { score } else { high_score }
        )),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("[R] Play Again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_title))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
