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

//! A paper-style progress bar widget.

use std::time::Duration;

use piet::Color;

use crate::theme;
use crate::widget::prelude::*;
use crate::{ProgressRenderer, ProgressState, TimerToken};

/// A progress bar, displaying determinate, buffered, and indeterminate
/// progress as lines along the widget's midline.
///
/// This widget implements `Widget<ProgressState>`; the progress values
/// arrive as data, while the colors are part of the widget and are set
/// with the builder methods.
///
/// While the data is in indeterminate mode the widget keeps a repeating
/// timer running, advancing the sweep by one step every
/// [`theme::ANIMATION_INTERVAL`] and repainting. Leaving indeterminate
/// mode drops the timer token, so a pending firing is ignored rather
/// than rescheduled.
pub struct ProgressBar {
    renderer: ProgressRenderer,
    timer_token: TimerToken,
}

impl ProgressBar {
    /// Return a new `ProgressBar`.
    pub fn new() -> ProgressBar {
        Self::default()
    }

    /// Builder-style method for setting the color of the primary fill
    /// and the indeterminate sweep.
    pub fn with_progress_color(mut self, color: Color) -> Self {
        self.renderer.set_progress_color(color);
        self
    }

    /// Builder-style method for setting the color of the buffered fill.
    ///
    /// If this is never called, the buffered fill is drawn in the primary
    /// color at half alpha.
    pub fn with_secondary_progress_color(mut self, color: Color) -> Self {
        self.renderer.set_secondary_progress_color(color);
        self
    }

    /// The color of the primary fill and the indeterminate sweep.
    pub fn progress_color(&self) -> Color {
        self.renderer.progress_color()
    }

    /// Set the color of the primary fill and the indeterminate sweep.
    ///
    /// If you change this outside of a widget method, you are responsible
    /// for requesting a repaint.
    pub fn set_progress_color(&mut self, color: Color) {
        self.renderer.set_progress_color(color);
    }

    /// The color of the buffered fill.
    pub fn secondary_progress_color(&self) -> Color {
        self.renderer.secondary_progress_color()
    }

    /// Set the color of the buffered fill.
    ///
    /// If you change this outside of a widget method, you are responsible
    /// for requesting a repaint.
    pub fn set_secondary_progress_color(&mut self, color: Color) {
        self.renderer.set_secondary_progress_color(color);
    }

    /// The renderer component backing this widget.
    pub fn renderer(&self) -> &ProgressRenderer {
        &self.renderer
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        ProgressBar {
            renderer: ProgressRenderer::new(),
            timer_token: TimerToken::INVALID,
        }
    }
}

impl Widget<ProgressState> for ProgressBar {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut ProgressState) {
        let Event::Timer(token) = event;
        if *token != self.timer_token {
            return;
        }
        self.renderer.tick();
        ctx.request_paint();
        if data.is_indeterminate() {
            self.timer_token = ctx.request_timer(theme::ANIMATION_INTERVAL);
        } else {
            self.timer_token = TimerToken::INVALID;
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &ProgressState) {
        match event {
            LifeCycle::WidgetAdded => {
                self.renderer.set_state(data.clone());
                if data.is_indeterminate() {
                    self.timer_token = ctx.request_timer(Duration::ZERO);
                }
                ctx.request_paint();
            }
            // Stroke thickness is height / 3, recomputed at paint time.
            LifeCycle::Size(_) => ctx.request_paint(),
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &ProgressState, data: &ProgressState) {
        self.renderer.set_state(data.clone());
        ctx.request_paint();

        if data.is_indeterminate() && !old_data.is_indeterminate() {
            self.timer_token = ctx.request_timer(Duration::ZERO);
        } else if !data.is_indeterminate() && old_data.is_indeterminate() {
            // Cancellation is "do not reschedule": the pending firing no
            // longer matches the remembered token and is dropped.
            self.timer_token = TimerToken::INVALID;
        }
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &ProgressState) -> Size {
        bc.debug_check("ProgressBar");
        bc.constrain((theme::WIDE_WIDGET_WIDTH, theme::BASIC_WIDGET_HEIGHT))
    }

    fn paint(&mut self, ctx: &mut PaintCtx<impl RenderContext>, _data: &ProgressState) {
        let size = ctx.size();
        for cmd in self.renderer.commands(size) {
            ctx.stroke(cmd.line, &cmd.color, cmd.stroke_width);
        }
    }
}
