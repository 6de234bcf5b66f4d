// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures and assertions for layout integration tests.

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{
    assert_banner_rows_disjoint, assert_columns_disjoint, assert_segments_consistent,
};
#[allow(unused_imports)]
pub use fixtures::{all_day, date, datetime, spanning, timed, week_from};
