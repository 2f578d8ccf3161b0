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

//! Widget-level tests: the timer chain, cancellation, and paint requests.

pub(crate) mod harness;

use std::time::Duration;

use float_cmp::assert_approx_eq;
use test_log::test;

use crate::widget::ProgressBar;
use crate::*;
use harness::Harness;

fn indeterminate_state() -> ProgressState {
    let mut state = ProgressState::new();
    state.set_indeterminate(true);
    state
}

#[test]
fn widget_added_requests_paint() {
    let harness = Harness::new(ProgressState::new(), ProgressBar::new());
    assert_eq!(harness.invalidation_count(), 1);
    // No sweep to drive in determinate mode.
    assert_eq!(harness.pending_timer_count(), 0);
}

#[test]
fn indeterminate_widget_starts_ticking_immediately() {
    let mut harness = Harness::new(indeterminate_state(), ProgressBar::new());
    assert_eq!(harness.pending_timer_count(), 1);

    // The first timer is due immediately; the rest follow at the
    // animation interval.
    let fired = harness.advance(theme::ANIMATION_INTERVAL * 5);
    assert_eq!(fired, 6);
    assert_approx_eq!(f64, harness.widget().renderer().phase(), 6.0);
}

#[test]
fn each_tick_requests_exactly_one_paint() {
    let mut harness = Harness::new(indeterminate_state(), ProgressBar::new());
    let before = harness.invalidation_count();
    let fired = harness.advance(theme::ANIMATION_INTERVAL * 10);
    assert_eq!(harness.invalidation_count() - before, fired);
}

#[test]
fn a_full_cycle_returns_the_phase_to_zero() {
    let mut harness = Harness::new(indeterminate_state(), ProgressBar::new());
    let fired = harness.advance(theme::ANIMATION_INTERVAL * 99);
    assert_eq!(fired, 100);
    assert_approx_eq!(f64, harness.widget().renderer().phase(), 0.0);
}

#[test]
fn leaving_indeterminate_mode_stops_the_sweep() {
    let mut harness = Harness::new(indeterminate_state(), ProgressBar::new());
    harness.advance(theme::ANIMATION_INTERVAL * 4);
    let phase = harness.widget().renderer().phase();

    harness.update_data(|state| state.set_indeterminate(false));

    // The already-scheduled firing is delivered, but its token no longer
    // matches, so nothing advances and nothing is rescheduled.
    let paints = harness.invalidation_count();
    harness.advance(Duration::from_secs(1));
    assert_approx_eq!(f64, harness.widget().renderer().phase(), phase);
    assert_eq!(harness.pending_timer_count(), 0);
    assert_eq!(harness.invalidation_count(), paints);
}

#[test]
fn re_entering_indeterminate_mode_resumes_the_sweep() {
    let mut harness = Harness::new(indeterminate_state(), ProgressBar::new());
    harness.advance(theme::ANIMATION_INTERVAL * 9);
    harness.update_data(|state| state.set_indeterminate(false));
    harness.advance(Duration::from_secs(1));
    let phase = harness.widget().renderer().phase();

    harness.update_data(|state| state.set_indeterminate(true));
    let fired = harness.advance(Duration::ZERO);
    assert_eq!(fired, 1);
    assert_approx_eq!(f64, harness.widget().renderer().phase(), phase + 1.0);
}

#[test]
fn data_updates_request_paint() {
    let mut harness = Harness::new(ProgressState::new(), ProgressBar::new());
    let before = harness.invalidation_count();
    harness.update_data(|state| state.set_progress(40));
    assert_eq!(harness.invalidation_count(), before + 1);
    assert_eq!(harness.widget().renderer().state().progress(), 40);
}

#[test]
fn layout_prefers_the_wide_widget_size() {
    let mut harness = Harness::new(ProgressState::new(), ProgressBar::new());
    let size = harness.layout(&BoxConstraints::UNBOUNDED);
    assert_eq!(
        size,
        Size::new(theme::WIDE_WIDGET_WIDTH, theme::BASIC_WIDGET_HEIGHT)
    );

    let bc = BoxConstraints::tight(Size::new(200.0, 30.0));
    assert_eq!(harness.layout(&bc), Size::new(200.0, 30.0));
}

#[test]
fn paint_smoke_test() {
    let mut state = ProgressState::new();
    state.set_progress(40);
    state.set_secondary_progress(70);
    let mut harness = Harness::new(state, ProgressBar::new());
    harness.paint(Size::new(200.0, 30.0));

    harness.update_data(|state| state.set_indeterminate(true));
    harness.advance(theme::ANIMATION_INTERVAL);
    harness.paint(Size::new(200.0, 30.0));
}
