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

//! The progress data model and the line-drawing renderer component.

use piet::Color;

use crate::kurbo::{Line, Size};
use crate::theme;

/// The peak fraction of the track covered by the indeterminate sweep,
/// reached at the midpoint of a cycle.
const SWEEP_MAX_SCALE: f64 = 0.3;

/// The number of ticks in one indeterminate sweep cycle.
const SWEEP_CYCLE: f64 = 100.0;

/// The progress values shown by a progress bar.
///
/// The setters clamp their arguments against the stored maximum, so a
/// `ProgressState` always satisfies `progress <= max`,
/// `secondary_progress <= max` and `max >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    progress: u32,
    secondary_progress: u32,
    max: u32,
    indeterminate: bool,
}

impl ProgressState {
    /// Create a state with no progress and a maximum of 100.
    pub fn new() -> ProgressState {
        ProgressState::default()
    }

    /// The determinate fill amount, in `0..=max`.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Set the determinate fill amount, clamping to `0..=max`.
    pub fn set_progress(&mut self, progress: u32) {
        self.progress = progress.min(self.max);
    }

    /// The buffered fill amount, in `0..=max`.
    pub fn secondary_progress(&self) -> u32 {
        self.secondary_progress
    }

    /// Set the buffered fill amount, clamping to `0..=max`.
    pub fn set_secondary_progress(&mut self, secondary_progress: u32) {
        self.secondary_progress = secondary_progress.min(self.max);
    }

    /// The maximum value of both progress fields.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Set the maximum value.
    ///
    /// A maximum of zero would make the fill fractions undefined, so it is
    /// rejected and clamped to 1, with a warning. Both progress fields are
    /// re-clamped against the new maximum.
    pub fn set_max(&mut self, max: u32) {
        if max == 0 {
            tracing::warn!("ProgressState maximum must be at least 1, got 0");
        }
        self.max = max.max(1);
        self.progress = self.progress.min(self.max);
        self.secondary_progress = self.secondary_progress.min(self.max);
    }

    /// Whether the bar is in indeterminate mode.
    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Switch between indeterminate and determinate rendering.
    ///
    /// In indeterminate mode the progress fields are ignored for drawing;
    /// they keep their values and reappear when the mode is switched off.
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        ProgressState {
            progress: 0,
            secondary_progress: 0,
            max: 100,
            indeterminate: false,
        }
    }
}

/// A single stroked line, in widget-local coordinates.
///
/// The output unit of a render pass; the embedding host (or the
/// [`ProgressBar`] widget) replays these against a [`piet::RenderContext`].
///
/// [`ProgressBar`]: crate::widget::ProgressBar
#[derive(Debug, Clone, PartialEq)]
pub struct LineCommand {
    /// The segment to stroke.
    pub line: Line,
    /// The stroke color.
    pub color: Color,
    /// The stroke thickness.
    pub stroke_width: f64,
}

/// A component for embedding in a widget to render progress as a short
/// list of horizontal line segments.
///
/// The renderer is pure: it owns the progress state, the colors, and the
/// sweep phase, and turns them into [`LineCommand`]s on demand. Paint
/// scheduling and the timer driving [`tick`] belong to the owning widget.
///
/// [`tick`]: ProgressRenderer::tick
#[derive(Debug, Clone)]
pub struct ProgressRenderer {
    state: ProgressState,
    phase: f64,
    progress_color: Color,
    secondary_progress_color: Option<Color>,
}

impl ProgressRenderer {
    /// Create a renderer with default state and the paper palette.
    pub fn new() -> ProgressRenderer {
        ProgressRenderer::default()
    }

    /// The progress state currently rendered.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Replace the progress state.
    pub fn set_state(&mut self, state: ProgressState) {
        self.state = state;
    }

    /// The color of the primary fill and the indeterminate sweep.
    pub fn progress_color(&self) -> Color {
        self.progress_color.clone()
    }

    /// Set the color of the primary fill and the indeterminate sweep.
    pub fn set_progress_color(&mut self, color: Color) {
        self.progress_color = color;
    }

    /// The color of the buffered fill.
    ///
    /// Unless a color has been set explicitly, this is the current primary
    /// color at half alpha, and it tracks later primary color changes.
    pub fn secondary_progress_color(&self) -> Color {
        match &self.secondary_progress_color {
            Some(color) => color.clone(),
            None => {
                let (r, g, b, _) = self.progress_color.as_rgba8();
                Color::rgba8(r, g, b, theme::SECONDARY_PROGRESS_ALPHA)
            }
        }
    }

    /// Set an explicit color for the buffered fill, overriding the
    /// half-alpha derivation.
    pub fn set_secondary_progress_color(&mut self, color: Color) {
        self.secondary_progress_color = Some(color);
    }

    /// The current sweep phase, in `[0, 100)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance the indeterminate sweep by one step, wrapping to 0 at the
    /// end of a cycle.
    ///
    /// Does nothing in determinate mode. The phase is not reset when
    /// leaving indeterminate mode; re-entering resumes the sweep where
    /// it stopped.
    pub fn tick(&mut self) {
        if !self.state.indeterminate {
            return;
        }
        self.phase += 1.0;
        if self.phase >= SWEEP_CYCLE {
            self.phase = 0.0;
        }
    }

    /// Produce the draw commands for the current state, for a widget of
    /// the given size.
    ///
    /// All lines run along the horizontal midline, with a stroke thickness
    /// of a third of the height, and are meant to be drawn in order: first
    /// the full-width track, then either the single sweep segment
    /// (indeterminate mode) or the buffered fill followed by the primary
    /// fill, so that later commands win where they overlap.
    pub fn commands(&self, size: Size) -> Vec<LineCommand> {
        let width = size.width;
        let y = size.height / 2.0;
        let stroke_width = size.height / 3.0;

        let mut cmds = vec![LineCommand {
            line: Line::new((0.0, y), (width, y)),
            color: theme::TRACK_COLOR,
            stroke_width,
        }];

        if self.state.indeterminate {
            // Triangular easing: the segment grows from nothing at the left
            // edge to SWEEP_MAX_SCALE of the track at mid-cycle, then
            // shrinks back to nothing at the right edge.
            let scale = SWEEP_MAX_SCALE * (50.0 - (self.phase - 50.0).abs()) / 50.0;
            let center_x = self.phase * width / SWEEP_CYCLE;
            let half_width = width * scale / 2.0;
            cmds.push(LineCommand {
                line: Line::new((center_x - half_width, y), (center_x + half_width, y)),
                color: self.progress_color.clone(),
                stroke_width,
            });
            return cmds;
        }

        let max = f64::from(self.state.max);
        if self.state.secondary_progress > 0 {
            let end_x = f64::from(self.state.secondary_progress) * width / max;
            cmds.push(LineCommand {
                line: Line::new((0.0, y), (end_x, y)),
                color: self.secondary_progress_color(),
                stroke_width,
            });
        }
        if self.state.progress > 0 {
            let end_x = f64::from(self.state.progress) * width / max;
            cmds.push(LineCommand {
                line: Line::new((0.0, y), (end_x, y)),
                color: self.progress_color.clone(),
                stroke_width,
            });
        }
        cmds
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        ProgressRenderer {
            state: ProgressState::default(),
            phase: 0.0,
            progress_color: theme::PROGRESS_COLOR,
            secondary_progress_color: None,
        }
    }
}
