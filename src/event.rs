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

//! Events.

use crate::kurbo::Size;
use crate::TimerToken;

/// An event, propagated to a widget by the host.
///
/// This carries only the events the widgets in this crate consume;
/// an embedding host with a richer event vocabulary translates into
/// these at the seam.
#[derive(Debug, Clone)]
pub enum Event {
    /// Called on a timer event.
    ///
    /// Request a timer event through [`EventCtx::request_timer()`]. That will
    /// cause a timer event later.
    ///
    /// Note that timer events requested by other widgets may be delivered as
    /// well. Use the token returned from the `request_timer()` call to filter
    /// events more precisely.
    ///
    /// [`EventCtx::request_timer()`]: crate::EventCtx::request_timer
    Timer(TimerToken),
}

/// A life cycle notification.
///
/// Unlike [`Event`]s, life cycle events are generated by the framework
/// side of the seam in response to changes in the widget graph, not by
/// user interaction.
#[derive(Debug, Clone)]
pub enum LifeCycle {
    /// Sent to a widget when it is added to the widget tree.
    ///
    /// This is the widget's chance to perform any one-time setup, such
    /// as starting an animation timer for a widget created in an
    /// animating state.
    WidgetAdded,
    /// Called when the widget's size changes.
    ///
    /// The `Size` is the new size of the widget's layout box.
    Size(Size),
}
