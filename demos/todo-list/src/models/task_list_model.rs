// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

use slint::{Model, ModelNotify, ModelTracker};

use super::TaskModel;

/// Append-only backing store of the task list.
///
/// Views hold a [`slint::ModelRc`] to the same instance and are told about
/// new rows through the model tracker, so the list widget never keeps a copy.
#[derive(Default)]
pub struct TaskListModel {
    tasks: RefCell<Vec<TaskModel>>,
    notify: ModelNotify,
}

impl TaskListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_task(&self, task: TaskModel) {
        let row = {
            let mut tasks = self.tasks.borrow_mut();
            tasks.push(task);
            tasks.len() - 1
        };

        self.notify.row_added(row, 1);
    }
}

impl Model for TaskListModel {
    type Data = TaskModel;

    fn row_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.tasks.borrow().get(row).cloned()
    }

    fn set_row_data(&self, row: usize, _data: Self::Data) {
        // tasks are never edited in place
        log::warn!("ignoring edit of task at row {row}, the task list is append-only");
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        &self.notify
    }

    fn as_any(&self) -> &dyn core::any::Any {
        self
    }
}
