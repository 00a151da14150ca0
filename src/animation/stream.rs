// src/animation/stream.rs
//
// An AnimationStream keeps the last few states of one figure, newest first.
// Each tick derives a new head from the previous head and pushes it on the
// front; the oldest state falls off the back once the trail is full.

use crate::models::{Boundaries, Figure, CORNER_COUNT};
use crate::utilities::RandomSource;
use std::collections::VecDeque;

/// Figure states kept per stream.
pub const TRAIL_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Empty,
    Populated,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationStream {
    trail: VecDeque<Figure>,
}

impl AnimationStream {
    pub fn new() -> Self {
        Self {
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Returns the stream one tick later. An empty stream spawns its
    /// first figure here.
    pub fn step<R: RandomSource + ?Sized>(&self, boundaries: &Boundaries, rng: &mut R) -> Self {
        let head = match self.trail.front() {
            Some(head) => head.step(boundaries, rng),
            None => {
                log::debug!(
                    "spawning figure on {}x{} surface",
                    boundaries.width,
                    boundaries.height
                );
                Figure::create(CORNER_COUNT, boundaries, rng).step(boundaries, rng)
            }
        };

        let mut trail = VecDeque::with_capacity(TRAIL_LENGTH + 1);
        trail.push_back(head);
        trail.extend(self.trail.iter().take(TRAIL_LENGTH - 1).cloned());

        Self { trail }
    }

    pub fn state(&self) -> StreamState {
        if self.trail.is_empty() {
            StreamState::Empty
        } else {
            StreamState::Populated
        }
    }

    pub fn head(&self) -> Option<&Figure> {
        self.trail.front()
    }

    /// Trail states, newest first.
    pub fn figures(&self) -> impl ExactSizeIterator<Item = &Figure> {
        self.trail.iter()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}
