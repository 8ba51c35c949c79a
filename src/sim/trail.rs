//! Slicing trail
//!
//! Bounded history of pointer positions. The newest two points form the
//! blade segment used for slice tests.

use std::collections::VecDeque;

use glam::Vec2;

/// Fixed-capacity ring of recent pointer positions, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a pointer position, evicting the oldest when full
    pub fn push(&mut self, point: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Blade segment (previous point, newest point), if two points exist
    pub fn active_segment(&self) -> Option<(Vec2, Vec2)> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        Some((self.points[n - 2], self.points[n - 1]))
    }

    /// Points oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Vec2> + '_ {
        self.points.iter()
    }

    /// Consecutive point pairs, oldest first
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| (*a, *b))
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
