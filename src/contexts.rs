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

//! The context types that are passed into various widget methods.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use piet::RenderContext;

use crate::kurbo::Size;
use crate::{TimerToken, WindowHandle};

/// A macro for implementing methods on multiple contexts.
///
/// There are a lot of methods defined on multiple contexts; this lets us only
/// have to write them out once.
macro_rules! impl_context_method {
    ($ty:ty,  { $($method:item)+ } ) => {
        impl $ty { $($method)+ }
    };
    ( $ty:ty, $($more:ty),+, { $($method:item)+ } ) => {
        impl_context_method!($ty, { $($method)+ });
        impl_context_method!($($more),+, { $($method)+ });
    };
}

/// A mutable context provided to event handling methods of widgets.
///
/// Widgets should call [`request_paint`] whenever an event causes a change
/// in the widget's appearance, to schedule a repaint.
///
/// [`request_paint`]: EventCtx::request_paint
pub struct EventCtx<'a> {
    pub(crate) window: &'a dyn WindowHandle,
}

/// A context provided to life cycle methods of widgets.
pub struct LifeCycleCtx<'a> {
    pub(crate) window: &'a dyn WindowHandle,
}

/// A mutable context provided to data update methods of widgets.
///
/// Widgets should call [`request_paint`] whenever a data change causes a change
/// in the widget's appearance, to schedule a repaint.
///
/// [`request_paint`]: UpdateCtx::request_paint
pub struct UpdateCtx<'a> {
    pub(crate) window: &'a dyn WindowHandle,
}

/// A context provided to layout-handling methods of widgets.
pub struct LayoutCtx<'a> {
    pub(crate) window: &'a dyn WindowHandle,
}

/// A context passed to paint methods of widgets.
///
/// `PaintCtx` derefs to the [`RenderContext`] it wraps, so all of the
/// drawing methods are available on the context itself.
pub struct PaintCtx<'a, R: RenderContext> {
    pub(crate) window: &'a dyn WindowHandle,
    pub(crate) render_ctx: &'a mut R,
    pub(crate) size: Size,
}

impl<'a> EventCtx<'a> {
    /// Create an event context backed by the given window handle.
    pub fn new(window: &'a dyn WindowHandle) -> Self {
        EventCtx { window }
    }
}

impl<'a> LifeCycleCtx<'a> {
    /// Create a life cycle context backed by the given window handle.
    pub fn new(window: &'a dyn WindowHandle) -> Self {
        LifeCycleCtx { window }
    }
}

impl<'a> UpdateCtx<'a> {
    /// Create an update context backed by the given window handle.
    pub fn new(window: &'a dyn WindowHandle) -> Self {
        UpdateCtx { window }
    }
}

impl<'a> LayoutCtx<'a> {
    /// Create a layout context backed by the given window handle.
    pub fn new(window: &'a dyn WindowHandle) -> Self {
        LayoutCtx { window }
    }
}

impl<'a, R: RenderContext> PaintCtx<'a, R> {
    /// Create a paint context for a widget of the given size, painting
    /// onto `render_ctx`.
    pub fn new(window: &'a dyn WindowHandle, render_ctx: &'a mut R, size: Size) -> Self {
        PaintCtx {
            window,
            render_ctx,
            size,
        }
    }

    /// The layout size.
    ///
    /// This is the size determined during the widget's [`layout`] pass.
    ///
    /// [`layout`]: crate::Widget::layout
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a reference to the current window handle.
    pub fn window(&self) -> &dyn WindowHandle {
        self.window
    }
}

// methods on everyone but paintctx
impl_context_method!(EventCtx<'_>, LifeCycleCtx<'_>, UpdateCtx<'_>, LayoutCtx<'_>, {
    /// Returns a reference to the current window handle.
    pub fn window(&self) -> &dyn WindowHandle {
        self.window
    }
});

impl_context_method!(EventCtx<'_>, LifeCycleCtx<'_>, UpdateCtx<'_>, {
    /// Request a [`paint`] pass.
    ///
    /// [`paint`]: crate::Widget::paint
    pub fn request_paint(&mut self) {
        self.window.invalidate();
    }

    /// Request a timer event.
    ///
    /// The return value is a token, which can be used to associate the
    /// request with the event.
    pub fn request_timer(&mut self, deadline: Duration) -> TimerToken {
        let token = self.window.request_timer(deadline);
        tracing::trace!("requested timer {:?} for {:?}", token, deadline);
        token
    }
});

impl<R: RenderContext> Deref for PaintCtx<'_, R> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        self.render_ctx
    }
}

impl<R: RenderContext> DerefMut for PaintCtx<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.render_ctx
    }
}
