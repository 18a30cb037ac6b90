// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::models::{TaskListModel, TaskModel};

#[derive(Clone)]
pub struct TaskListController {
    tasks: Rc<TaskListModel>,
}

impl TaskListController {
    pub fn new() -> Self {
        Self { tasks: Rc::new(TaskListModel::new()) }
    }

    /// Shared handle on the backing store, suitable for binding to a view.
    pub fn tasks(&self) -> ModelRc<TaskModel> {
        self.tasks.clone().into()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.row_count()
    }

    /// Appends a task unless `description` is the empty string.
    ///
    /// Whitespace is significant: `"  "` is a valid description. Returns
    /// whether a task was added.
    pub fn add_task(&self, description: &str) -> bool {
        if description.is_empty() {
            log::trace!("empty submission ignored");
            return false;
        }

        self.tasks.push_task(TaskModel::new(description));
        log::debug!("added task #{}: {:?}", self.tasks.row_count(), description);

        true
    }
}

impl Default for TaskListController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(controller: &TaskListController) -> Vec<String> {
        controller.tasks().iter().map(|task| task.description).collect()
    }

    #[test]
    fn test_add_task() {
        let controller = TaskListController::new();
        let tasks = controller.tasks();

        assert!(controller.add_task("Buy milk"));

        assert_eq!(tasks.row_count(), 1);
        assert_eq!(tasks.row_data(0), Some(TaskModel::new("Buy milk")));
    }

    #[test]
    fn test_empty_submission_is_ignored() {
        let controller = TaskListController::new();

        assert!(!controller.add_task(""));
        assert_eq!(controller.task_count(), 0);
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let controller = TaskListController::new();

        assert!(controller.add_task("  "));
        assert_eq!(descriptions(&controller), ["  "]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let controller = TaskListController::new();

        controller.add_task("Buy milk");
        controller.add_task("Buy milk");

        assert_eq!(descriptions(&controller), ["Buy milk", "Buy milk"]);
    }

    #[test]
    fn test_count_matches_non_empty_submissions() {
        let controller = TaskListController::new();
        let submissions = ["A", "B", "", "C", "", " "];

        let mut previous = 0;
        for text in submissions {
            controller.add_task(text);
            assert!(controller.task_count() >= previous);
            previous = controller.task_count();
        }

        assert_eq!(controller.task_count(), submissions.iter().filter(|s| !s.is_empty()).count());
        assert_eq!(descriptions(&controller), ["A", "B", "C", " "]);
    }

    #[test]
    fn test_new_starts_empty() {
        let controller = TaskListController::new();

        assert_eq!(controller.task_count(), 0);
        assert_eq!(controller.tasks().row_count(), 0);
        assert_eq!(TaskListController::default().task_count(), 0);
    }

    #[test]
    fn test_clones_share_the_store() {
        let controller = TaskListController::new();
        let view = controller.tasks();

        controller.clone().add_task("Item 1");

        assert_eq!(view.row_count(), 1);
        assert_eq!(controller.task_count(), 1);
    }
}
