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

//! Widgets.

mod progress_bar;
#[allow(clippy::module_inception)]
mod widget;

pub use progress_bar::ProgressBar;
pub use widget::Widget;

/// The types required to implement a [`Widget`].
///
/// # Structs
/// [`BoxConstraints`]\
/// [`EventCtx`]\
/// [`LayoutCtx`]\
/// [`LifeCycleCtx`]\
/// [`PaintCtx`]\
/// [`Size`]\
/// [`UpdateCtx`]
///
/// # Enums
/// [`Event`]\
/// [`LifeCycle`]
///
/// # Traits
/// [`RenderContext`]\
/// [`Widget`]
///
/// [`BoxConstraints`]: crate::BoxConstraints
/// [`EventCtx`]: crate::EventCtx
/// [`LayoutCtx`]: crate::LayoutCtx
/// [`LifeCycleCtx`]: crate::LifeCycleCtx
/// [`PaintCtx`]: crate::PaintCtx
/// [`Size`]: crate::Size
/// [`UpdateCtx`]: crate::UpdateCtx
/// [`Event`]: crate::Event
/// [`LifeCycle`]: crate::LifeCycle
/// [`RenderContext`]: piet::RenderContext
pub mod prelude {
    pub use crate::{
        BoxConstraints, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx, Size,
        UpdateCtx, Widget,
    };
    pub use piet::RenderContext;
}
