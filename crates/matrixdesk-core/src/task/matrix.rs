//! The Eisenhower matrix board.
//!
//! Holds tasks newest first. Completing a task removes it from the board.

use serde::{Deserialize, Serialize};

use super::{Quadrant, Task};

/// Per-quadrant task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantCounts {
    pub do_first: usize,
    pub schedule: usize,
    pub delegate: usize,
    pub eliminate: usize,
}

impl QuadrantCounts {
    pub fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::Do => self.do_first,
            Quadrant::Schedule => self.schedule,
            Quadrant::Delegate => self.delegate,
            Quadrant::Eliminate => self.eliminate,
        }
    }

    pub fn total(&self) -> usize {
        self.do_first + self.schedule + self.delegate + self.eliminate
    }
}

/// Ordered collection of open tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    tasks: Vec<Task>,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Add a task at the top of the board.
    pub fn add(&mut self, task: Task) {
        tracing::debug!(id = %task.id, quadrant = %task.quadrant, "task added");
        self.tasks.insert(0, task);
    }

    /// Remove a task by id, returning it if it was on the board.
    pub fn complete(&mut self, id: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        tracing::debug!(id = %task.id, "task completed");
        Some(task)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks in a quadrant, in board order.
    pub fn in_quadrant(&self, quadrant: Quadrant) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.quadrant == quadrant).collect()
    }

    pub fn counts(&self) -> QuadrantCounts {
        let mut counts = QuadrantCounts::default();
        for task in &self.tasks {
            match task.quadrant {
                Quadrant::Do => counts.do_first += 1,
                Quadrant::Schedule => counts.schedule += 1,
                Quadrant::Delegate => counts.delegate += 1,
                Quadrant::Eliminate => counts.eliminate += 1,
            }
        }
        counts
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{AssignMode, TaskInput};
    use chrono::Utc;

    fn task(title: &str, importance: u8, urgency: u8) -> Task {
        let input = TaskInput::new(title).with_ratings(importance, urgency, 2);
        Task::from_input(&input, Utc::now()).unwrap()
    }

    #[test]
    fn add_puts_newest_first() {
        let mut matrix = Matrix::new();
        matrix.add(task("first", 5, 5));
        matrix.add(task("second", 5, 5));
        let titles: Vec<_> = matrix.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn complete_removes_only_matching_task() {
        let mut matrix = Matrix::new();
        let a = task("a", 5, 5);
        let b = task("b", 1, 1);
        let a_id = a.id.clone();
        matrix.add(a);
        matrix.add(b);

        let done = matrix.complete(&a_id).unwrap();
        assert_eq!(done.title, "a");
        assert_eq!(matrix.len(), 1);
        assert!(matrix.get(&a_id).is_none());
        assert!(matrix.complete(&a_id).is_none());
    }

    #[test]
    fn tasks_are_grouped_by_quadrant() {
        let mut matrix = Matrix::new();
        matrix.add(task("do", 5, 4));
        matrix.add(task("schedule", 4, 1));
        matrix.add(task("delegate", 2, 5));
        matrix.add(task("eliminate", 1, 1));
        let manual = TaskInput::new("pinned")
            .with_ratings(1, 1, 1)
            .with_assign_mode(AssignMode::Manual(Quadrant::Do));
        matrix.add(Task::from_input(&manual, Utc::now()).unwrap());

        let q1: Vec<_> = matrix.in_quadrant(Quadrant::Do).iter().map(|t| t.title.clone()).collect();
        assert_eq!(q1, vec!["pinned", "do"]);
        assert_eq!(matrix.in_quadrant(Quadrant::Schedule).len(), 1);

        let counts = matrix.counts();
        assert_eq!(counts.get(Quadrant::Do), 2);
        assert_eq!(counts.get(Quadrant::Delegate), 1);
        assert_eq!(counts.get(Quadrant::Eliminate), 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn matrix_serializes_as_plain_task_array() {
        let mut matrix = Matrix::new();
        matrix.add(task("solo", 3, 3));
        let value = serde_json::to_value(&matrix).unwrap();
        assert!(value.is_array());
        let back: Matrix = serde_json::from_value(value).unwrap();
        assert_eq!(back, matrix);
    }
}
