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

//! A paper-style linear progress widget.
//!
//! `lineal` renders the three classic states of a horizontal progress
//! indicator — determinate, buffered (secondary), and indeterminate — as a
//! short list of colored line segments along the widget's midline. The
//! drawing logic lives in [`ProgressRenderer`], a component that can be
//! embedded in any widget; [`widget::ProgressBar`] wires it into a small
//! widget seam and drives the indeterminate sweep from a repeating timer.
//!
//! The output of a paint pass is a list of [`LineCommand`]s, which the
//! embedding host replays onto any [`piet`] render context.
//!
//! ```
//! use lineal::{ProgressRenderer, ProgressState, Size};
//!
//! let mut state = ProgressState::new();
//! state.set_progress(40);
//! state.set_secondary_progress(70);
//!
//! let mut renderer = ProgressRenderer::new();
//! renderer.set_state(state);
//!
//! // One command each for the track, the buffered fill, and the primary fill.
//! let commands = renderer.commands(Size::new(200.0, 30.0));
//! assert_eq!(commands.len(), 3);
//! ```

#![deny(unsafe_code)]

pub use piet;
pub use piet::kurbo;

mod box_constraints;
mod contexts;
mod event;
mod progress;
pub mod theme;
pub mod widget;
mod window;

// Types from kurbo & piet that are required by public API.
pub use kurbo::{Line, Point, Size};
pub use piet::Color;

pub use box_constraints::BoxConstraints;
pub use contexts::{EventCtx, LayoutCtx, LifeCycleCtx, PaintCtx, UpdateCtx};
pub use event::{Event, LifeCycle};
pub use progress::{LineCommand, ProgressRenderer, ProgressState};
pub use widget::{ProgressBar, Widget};
pub use window::{TimerToken, WindowHandle};

#[cfg(test)]
mod tests;
