use rand::Rng;

use crate::config::{GridSize, FOOD_PLACEMENT_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Picks a uniformly random free cell for the next food.
///
/// Samples random cells for a bounded number of attempts, then falls back to
/// enumerating the free cells and picking one of those. The fallback keeps
/// placement terminating on a densely filled board, where rejection sampling
/// would retry nearly forever. Returns `None` when the snake covers the whole
/// grid.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Position> = free_cells(bounds, snake).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}

fn free_cells(bounds: GridSize, snake: &Snake) -> impl Iterator<Item = Position> + '_ {
    (0..i32::from(bounds.height)).flat_map(move |y| {
        (0..i32::from(bounds.width)).filter_map(move |x| {
            let position = Position { x, y };
            (!snake.occupies(position)).then_some(position)
        })
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::place;

    #[test]
    fn placement_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..200 {
            let food = place(&mut rng, bounds, &snake).expect("free cells exist");
            assert!(!snake.occupies(food));
            assert!(food.is_within_bounds(bounds));
        }
    }

    #[test]
    fn placement_finds_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        // 2x2 board with three cells occupied; only (1,1) is free.
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 1 },
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
        ]);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        for _ in 0..20 {
            assert_eq!(
                place(&mut rng, bounds, &snake),
                Some(Position { x: 1, y: 1 })
            );
        }
    }

    #[test]
    fn full_board_yields_no_placement() {
        let mut rng = StdRng::seed_from_u64(13);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
            Position { x: 0, y: 1 },
        ]);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        assert_eq!(place(&mut rng, bounds, &snake), None);
    }

    #[test]
    fn seeded_placement_is_deterministic() {
        let snake = Snake::new(Position { x: 1, y: 1 });
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(
                place(&mut first, bounds, &snake),
                place(&mut second, bounds, &snake)
            );
        }
    }
}
