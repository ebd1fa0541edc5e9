use std::collections::VecDeque;

use crate::config::GridSize;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so that a head pushed past the top or left edge is
/// representable; bounds checking happens in the game step, after movement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the position translated by `(dx, dy)` cells.
    #[must_use]
    pub fn translated(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }
}

/// Snake body as an ordered cell sequence, head first.
///
/// The body never holds duplicate cells except transiently inside the game
/// step, between the head prepend and the self-collision check.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);
        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty; a snake always has a head.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake requires at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Prepends a new head cell.
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Removes the tail cell, keeping at least the head.
    pub fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
