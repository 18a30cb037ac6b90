// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! Window placement on the current monitor.

use std::time::Duration;

use slint::{ComponentHandle, PhysicalPosition, PhysicalSize};

// the winit window only exists once the event loop has resumed
const CENTERING_ATTEMPTS: u32 = 10;
const CENTERING_RETRY_DELAY: Duration = Duration::from_millis(16);

/// Top-left corner that centers a window of `window_size` on a monitor.
///
/// An axis on which the window does not fit keeps the monitor's origin, so
/// the title bar stays reachable.
pub fn centered_position(
    monitor_origin: PhysicalPosition,
    monitor_size: PhysicalSize,
    window_size: PhysicalSize,
) -> PhysicalPosition {
    let axis = |origin: i32, available: u32, needed: u32| {
        let free = available.saturating_sub(needed) / 2;
        origin.saturating_add(i32::try_from(free).unwrap_or(i32::MAX))
    };

    PhysicalPosition::new(
        axis(monitor_origin.x, monitor_size.width, window_size.width),
        axis(monitor_origin.y, monitor_size.height, window_size.height),
    )
}

/// Moves `window` to the middle of the monitor it is shown on.
///
/// Only the winit backend exposes monitor geometry; with any other backend
/// this returns `false` and the window keeps its platform placement.
pub fn center_on_current_monitor(window: &slint::Window) -> bool {
    use slint::winit_030::WinitWindowAccessor;

    let monitor = window
        .with_winit_window(|winit_window| {
            winit_window.current_monitor().map(|monitor| {
                let origin = monitor.position();
                let size = monitor.size();
                (PhysicalPosition::new(origin.x, origin.y), PhysicalSize::new(size.width, size.height))
            })
        })
        .flatten();

    let Some((origin, size)) = monitor else {
        log::trace!("no monitor geometry available yet");
        return false;
    };

    let position = centered_position(origin, size, window.size());
    log::debug!("centering window at {},{}", position.x, position.y);
    window.set_position(position);

    true
}

/// Centers the component's window from the event loop, once the backend has
/// created the native window.
///
/// Gives up after a few frames and keeps the platform placement, which is
/// what happens on backends without monitor geometry.
pub fn center_when_created<C: ComponentHandle + 'static>(handle: slint::Weak<C>) {
    schedule_centering(handle, CENTERING_ATTEMPTS, Duration::ZERO);
}

fn schedule_centering<C: ComponentHandle + 'static>(
    handle: slint::Weak<C>,
    attempts_left: u32,
    delay: Duration,
) {
    slint::Timer::single_shot(delay, move || {
        let Some(component) = handle.upgrade() else {
            return;
        };

        if center_on_current_monitor(component.window()) {
            return;
        }

        if attempts_left > 1 {
            schedule_centering(handle, attempts_left - 1, CENTERING_RETRY_DELAY);
        } else {
            log::debug!("no monitor geometry available, keeping platform placement");
        }
    });
}
