// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{controllers::TaskListController, models::TaskModel, ui};

// one place to implement connection between the view and the controller
pub fn connect(view_handle: &ui::MainWindow, controller: TaskListController) {
    view_handle.set_tasks(Rc::new(MapModel::new(controller.tasks(), map_task_to_item)).into());

    view_handle.on_add_task({
        let view_handle = view_handle.as_weak();

        move || {
            let Some(view_handle) = view_handle.upgrade() else {
                return;
            };

            if controller.add_task(view_handle.get_draft().as_str()) {
                view_handle.set_draft(SharedString::default());
            }
        }
    });
}

// maps a TaskModel (data) to a StandardListViewItem (ui)
fn map_task_to_item(task: TaskModel) -> StandardListViewItem {
    StandardListViewItem::from(task.to_string().as_str())
}
