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

//! Theme constants.
//!
//! There is no runtime environment or key/value override machinery here;
//! the paper look is a small, fixed palette, so these are plain constants.

use std::time::Duration;

use piet::Color;

/// The default color of the primary progress fill.
pub const PROGRESS_COLOR: Color = Color::rgb8(0x0f, 0x9d, 0x58);

/// The color of the full-width track line behind the progress fills.
///
/// Deliberately not configurable.
pub const TRACK_COLOR: Color = Color::rgb8(0xc8, 0xc8, 0xc8);

/// The alpha applied to the primary color when deriving a default
/// secondary progress color.
pub const SECONDARY_PROGRESS_ALPHA: u8 = 0x7f;

/// The default height for a small widget.
pub const BASIC_WIDGET_HEIGHT: f64 = 18.0;

/// The default minimum width for a 'wide' widget; a textbox, slider,
/// progress bar, etc.
pub const WIDE_WIDGET_WIDTH: f64 = 100.0;

/// The delay between ticks of the indeterminate sweep animation.
pub const ANIMATION_INTERVAL: Duration = Duration::from_millis(20);
