use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD,
};
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_hint};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: &HudInfo<'_>) {
    let area = frame.area();
    let [board_region, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    render_hud(frame, hud_row, state, info);

    let play_area = centered_board(board_region, state.bounds());
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(info.theme.border_fg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, info.theme);
    render_snake(frame, inner, state, info.theme);

    if state.awaiting_first_move() && state.status == GameStatus::Running {
        render_start_hint(frame, play_area, info.high_score, info.theme);
        return;
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, info.theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, play_area, state.score, info.high_score, info.theme);
        }
        GameStatus::Running => {}
    }
}

/// Centers a bordered board of `bounds` cells inside `region`, clamped to
/// whatever space the terminal actually has.
fn centered_board(region: Rect, bounds: GridSize) -> Rect {
    let wanted_width = bounds.width.saturating_add(2).min(region.width);
    let wanted_height = bounds.height.saturating_add(2).min(region.height);

    Rect {
        x: region.x + (region.width - wanted_width) / 2,
        y: region.y + (region.height - wanted_height) / 2,
        width: wanted_width,
        height: wanted_height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{centered_board, logical_to_terminal};

    #[test]
    fn board_is_centered_with_room_for_the_border() {
        let region = Rect::new(0, 0, 80, 24);
        let board = centered_board(
            region,
            GridSize {
                width: 20,
                height: 20,
            },
        );

        assert_eq!(board.width, 22);
        assert_eq!(board.height, 22);
        assert_eq!(board.x, 29);
        assert_eq!(board.y, 1);
    }

    #[test]
    fn board_clamps_to_small_terminals() {
        let region = Rect::new(0, 0, 10, 6);
        let board = centered_board(region, GridSize::square(20));

        assert_eq!(board.width, 10);
        assert_eq!(board.height, 6);
    }

    #[test]
    fn out_of_grid_positions_are_not_drawn() {
        let inner = Rect::new(1, 1, 20, 20);
        let bounds = GridSize::square(20);

        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: -1, y: 0 }),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, bounds, Position { x: 20, y: 0 }),
            None
        );
    }
}
