// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! A single-window to-do list: a list of task descriptions above a text
//! field and an "Add Task" button.

use std::cell::Cell;

use slint::ComponentHandle;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

pub mod controllers;
pub mod models;
pub mod placement;

/// Visibility of the main window. There is no way back to `Hidden`: closing
/// the window ends the event loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Hidden,
    Visible,
}

/// Owns the main window, the task list controller and the connection between
/// the two.
pub struct App {
    view_handle: ui::MainWindow,
    controller: controllers::TaskListController,
    state: Cell<WindowState>,
}

impl App {
    /// Builds the window and wires the add action. The window is not shown.
    pub fn new() -> Result<Self, slint::PlatformError> {
        let view_handle = ui::MainWindow::new()?;

        let controller = controllers::TaskListController::new();
        task_list_adapter::connect(&view_handle, controller.clone());

        Ok(Self { view_handle, controller, state: Cell::new(WindowState::Hidden) })
    }

    pub fn show(&self) -> Result<(), slint::PlatformError> {
        if self.state.get() == WindowState::Visible {
            return Ok(());
        }

        self.view_handle.show()?;
        placement::center_when_created(self.view_handle.as_weak());
        self.state.set(WindowState::Visible);
        log::debug!("main window shown");

        Ok(())
    }

    /// Shows the window and dispatches events until it is closed.
    pub fn run(self) -> Result<(), slint::PlatformError> {
        self.show()?;
        slint::run_event_loop()?;
        self.view_handle.hide()
    }

    pub fn state(&self) -> WindowState {
        self.state.get()
    }

    pub fn window(&self) -> &ui::MainWindow {
        &self.view_handle
    }

    pub fn controller(&self) -> &controllers::TaskListController {
        &self.controller
    }
}
