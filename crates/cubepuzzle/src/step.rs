//! Primitive face turns and the FIFO queue of pending turns.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

use crate::{Direction, Face};

/// Quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    /// Face to turn.
    pub face: Face,
    /// Direction to turn it.
    pub direction: Direction,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.name_char(), self.direction)
    }
}

/// Error returned when parsing a [`Step`] from notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid step {0:?}; expected a face letter optionally followed by '")]
pub struct ParseStepError(pub String);

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseStepError(s.to_owned());
        let mut chars = s.trim().chars();
        let face = chars.next().and_then(Face::from_name_char).ok_or_else(err)?;
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => return Err(err()),
        };
        Ok(Step { face, direction })
    }
}

impl Step {
    /// Constructs a step.
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }
    /// Constructs a clockwise step.
    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }
    /// Constructs a counterclockwise step.
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// Returns the step that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }

    /// Parses a whitespace-separated sequence of steps, such as `R U R' U'`.
    pub fn parse_sequence(s: &str) -> Result<Vec<Step>, ParseStepError> {
        s.split_whitespace().map(str::parse).collect()
    }
    /// Formats a sequence of steps separated by spaces.
    pub fn format_sequence<'a>(steps: impl IntoIterator<Item = &'a Step>) -> String {
        steps.into_iter().join(" ")
    }
}

/// FIFO queue of pending steps.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepQueue {
    steps: VecDeque<Step>,
}

impl StepQueue {
    /// Constructs an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a step to the back of the queue.
    pub fn enqueue(&mut self, step: Step) {
        self.steps.push_back(step);
    }
    /// Adds several steps to the back of the queue, in order.
    pub fn enqueue_all(&mut self, steps: impl IntoIterator<Item = Step>) {
        self.steps.extend(steps);
    }
    /// Adds `count` copies of a step to the back of the queue.
    pub fn enqueue_repeated(&mut self, step: Step, count: usize) {
        self.steps.extend(std::iter::repeat_n(step, count));
    }
    /// Removes and returns the step at the front of the queue.
    pub fn dequeue(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }
    /// Returns the step at the front of the queue without removing it.
    pub fn peek(&self) -> Option<Step> {
        self.steps.front().copied()
    }

    /// Returns the number of queued steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    /// Removes all queued steps.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
    /// Iterates over the queued steps from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

impl fmt::Display for StepQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Step::format_sequence(&self.steps))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_step_notation() {
        assert_eq!(Step::cw(Face::Front).to_string(), "F");
        assert_eq!(Step::ccw(Face::Up).to_string(), "U'");
        assert_eq!("U'".parse::<Step>(), Ok(Step::ccw(Face::Up)));
        assert_eq!("r".parse::<Step>(), Ok(Step::cw(Face::Right)));
        assert!("X".parse::<Step>().is_err());
        assert!("U2".parse::<Step>().is_err());
        assert!("".parse::<Step>().is_err());
        assert_eq!(Step::cw(Face::Back).rev(), Step::ccw(Face::Back));
    }

    #[test]
    fn test_parse_sequence() {
        let steps = Step::parse_sequence("R U R' U'").unwrap();
        assert_eq!(Step::format_sequence(&steps), "R U R' U'");
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut q = StepQueue::new();
        assert_eq!(q.dequeue(), None);
        q.enqueue(Step::cw(Face::Left));
        q.enqueue_repeated(Step::ccw(Face::Down), 2);
        q.enqueue_all([Step::cw(Face::Up)]);
        assert_eq!(q.len(), 4);
        assert_eq!(q.to_string(), "L D' D' U");
        assert_eq!(q.peek(), Some(Step::cw(Face::Left)));
        assert_eq!(q.dequeue(), Some(Step::cw(Face::Left)));
        assert_eq!(q.dequeue(), Some(Step::ccw(Face::Down)));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }
}
