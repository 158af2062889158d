use std::collections::{HashSet, VecDeque};

use super::types::{GridSize, Point};

/// Snake body, head first. A parallel set mirrors the deque so occupancy
/// checks stay O(1) as the snake grows.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Horizontal starting body facing right: head in the middle of the
    /// grid, two segments trailing to the left. Callers must have checked
    /// that the grid can hold it.
    pub fn spawn(grid: &GridSize, length: usize) -> Self {
        let head_x = (grid.width / 2).max(length - 1);
        let y = grid.height / 2;

        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);
        for i in 0..length {
            let segment = Point::new(head_x - i, y);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: &Point) -> bool {
        self.body_set.contains(pos)
    }

    pub fn push_head(&mut self, pos: Point) {
        self.body.push_front(pos);
        self.body_set.insert(pos);
    }

    pub fn pop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    #[cfg(test)]
    pub fn from_segments(segments: Vec<Point>) -> Self {
        let body_set = segments.iter().copied().collect();
        Self {
            body: segments.into(),
            body_set,
        }
    }
}
