use snake_tty::config::GridSize;
use snake_tty::game::{GameEvent, GameState, GameStatus};
use snake_tty::input::Direction;
use snake_tty::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_then_wall_collision() {
    let mut state = GameState::new_with_seed(GridSize::square(20), 42);
    state.snake = Snake::new(Position { x: 1, y: 1 });
    state.food = Position { x: 2, y: 1 };
    state.set_direction(Direction::Right);

    // One step east onto the food: grow, score, relocate the food.
    let events = state.step();
    assert_eq!(events, vec![GameEvent::Ate]);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    assert!(state.snake.occupies(Position { x: 1, y: 1 }));
    assert!(!state.snake.occupies(state.food));
    assert!(state.food.is_within_bounds(state.bounds()));

    // Turn north and walk off the top edge.
    state.set_direction(Direction::Up);
    let events = state.step();
    assert!(events.is_empty());
    assert_eq!(state.snake.head(), Position { x: 2, y: 0 });

    let events = state.step();
    assert_eq!(events, vec![GameEvent::GameOver]);
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.snake.head(), Position { x: 2, y: -1 });
}

#[test]
fn seeded_sessions_replay_identically() {
    let script = [
        (3_u32, Direction::Down),
        (7, Direction::Right),
        (11, Direction::Up),
        (15, Direction::Left),
        (19, Direction::Down),
    ];

    let mut runs = Vec::new();
    for _ in 0..2 {
        let mut state = GameState::new_with_seed(GridSize::square(12), 1337);
        state.set_direction(Direction::Right);

        let mut trace = Vec::new();
        for tick in 0..400_u32 {
            for (at, direction) in script {
                if tick % 23 == at {
                    state.set_direction(direction);
                }
            }
            let events = state.step();
            trace.push((state.snake.head(), state.food, state.score, events));
            if state.status == GameStatus::GameOver {
                break;
            }
        }
        runs.push(trace);
    }

    assert_eq!(runs[0], runs[1]);
}
