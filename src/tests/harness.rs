// Copyright 2023 The Lineal Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tools and infrastructure for testing widgets.

use std::cell::RefCell;
use std::time::Duration;

use piet::NullRenderContext;

use crate::*;

/// A window handle backed by a virtual clock.
///
/// Paint requests are counted, and timer requests are queued against the
/// virtual clock instead of being scheduled for real; the [`Harness`]
/// fires them by advancing the clock.
#[derive(Default)]
pub(crate) struct TestWindow {
    inner: RefCell<TestWindowState>,
}

#[derive(Default)]
struct TestWindowState {
    now: Duration,
    invalidations: usize,
    timers: Vec<(Duration, TimerToken)>,
}

impl WindowHandle for TestWindow {
    fn invalidate(&self) {
        self.inner.borrow_mut().invalidations += 1;
    }

    fn request_timer(&self, deadline: Duration) -> TimerToken {
        let mut state = self.inner.borrow_mut();
        let token = TimerToken::next();
        let fire_at = state.now + deadline;
        state.timers.push((fire_at, token));
        token
    }
}

/// A type that hosts a widget the way an embedding application would.
///
/// You create a `Harness` with some widget and its initial data; the
/// harness sends `WidgetAdded`, and from then on you can mutate the data
/// (which routes through `update`), advance the virtual clock (which
/// fires timers, in deadline order, as `Event::Timer`), and verify that
/// expected conditions are met.
///
/// Unlike a real host, layout and paint are not run automatically; call
/// [`layout`] and [`paint`] yourself when a test wants them.
///
/// [`layout`]: Harness::layout
/// [`paint`]: Harness::paint
pub(crate) struct Harness<T, W> {
    window: TestWindow,
    widget: W,
    data: T,
}

impl<T: Clone, W: Widget<T>> Harness<T, W> {
    /// Create a new `Harness` and deliver `LifeCycle::WidgetAdded`.
    pub fn new(data: T, widget: W) -> Harness<T, W> {
        let mut harness = Harness {
            window: TestWindow::default(),
            widget,
            data,
        };
        let mut ctx = LifeCycleCtx::new(&harness.window);
        harness
            .widget
            .lifecycle(&mut ctx, &LifeCycle::WidgetAdded, &harness.data);
        harness
    }

    /// Mutate the data, then route the change through the widget's
    /// `update` method.
    pub fn update_data(&mut self, f: impl FnOnce(&mut T)) {
        let old_data = self.data.clone();
        f(&mut self.data);
        let mut ctx = UpdateCtx::new(&self.window);
        self.widget.update(&mut ctx, &old_data, &self.data);
    }

    /// Advance the virtual clock, firing every due timer in deadline
    /// order as an `Event::Timer`.
    ///
    /// Timers requested while a firing is being handled land on the queue
    /// and fire in the same call if their deadline falls within the
    /// window. Returns the number of timer events delivered.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let target = self.window.inner.borrow().now + elapsed;
        let mut fired = 0;
        loop {
            let due = {
                let mut state = self.window.inner.borrow_mut();
                let next = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (fire_at, _))| *fire_at <= target)
                    .min_by_key(|(_, (fire_at, _))| *fire_at)
                    .map(|(idx, _)| idx);
                next.map(|idx| {
                    let (fire_at, token) = state.timers.remove(idx);
                    state.now = fire_at;
                    token
                })
            };
            match due {
                Some(token) => {
                    let mut ctx = EventCtx::new(&self.window);
                    self.widget
                        .event(&mut ctx, &Event::Timer(token), &mut self.data);
                    fired += 1;
                }
                None => break,
            }
        }
        self.window.inner.borrow_mut().now = target;
        fired
    }

    /// Run the widget's `layout` method and return the chosen size.
    pub fn layout(&mut self, bc: &BoxConstraints) -> Size {
        let mut ctx = LayoutCtx::new(&self.window);
        self.widget.layout(&mut ctx, bc, &self.data)
    }

    /// Run the widget's `paint` method against a null render context.
    pub fn paint(&mut self, size: Size) {
        let mut render_ctx = NullRenderContext::new();
        let mut ctx = PaintCtx::new(&self.window, &mut render_ctx, size);
        self.widget.paint(&mut ctx, &self.data);
    }

    /// The number of paint requests the window has seen.
    pub fn invalidation_count(&self) -> usize {
        self.window.inner.borrow().invalidations
    }

    /// The number of timers waiting on the queue.
    pub fn pending_timer_count(&self) -> usize {
        self.window.inner.borrow().timers.len()
    }

    /// The hosted widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// The current data.
    #[allow(dead_code)]
    pub fn data(&self) -> &T {
        &self.data
    }
}
