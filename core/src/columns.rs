// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Reverse;

use chrono::{NaiveDate, Timelike};
use serde::Serialize;

use crate::event::{Event, EventTime};

/// Minimum rendered height of a block in minutes, keeping short events
/// legible and clickable at the 1 px/min convention.
pub const MIN_BLOCK_MINUTES: u32 = 15;

/// Geometry of one timed event inside a day column: vertical position in
/// minutes since midnight, horizontal position in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedLayout {
    /// The event being placed.
    pub event: Event,

    /// Minutes since midnight at which the block starts.
    pub top: u32,

    /// Block height in minutes, floored at [`MIN_BLOCK_MINUTES`].
    pub height: u32,

    /// Left edge as a percentage of the day column width.
    pub left: f64,

    /// Block width as a percentage of the day column width, after expansion
    /// over free neighbor columns.
    pub width: f64,

    /// Paint order; blocks in later columns paint above earlier ones.
    pub z_index: u32,

    /// Column assigned within the cluster.
    pub column: usize,

    /// Columns in the cluster; the cluster's peak concurrency.
    pub total_columns: usize,

    /// Events in the cluster.
    pub cluster_size: usize,
}

/// A timed event reduced to its minute range, with the column assignment
/// filled in during packing.
#[derive(Debug)]
struct Block<'a> {
    event: &'a Event,
    start: u32,
    end: u32,
    column: usize,
}

impl<'a> Block<'a> {
    /// A missing or degenerate end still yields a one-minute sliver so every
    /// event keeps a renderable, deterministic region.
    fn new(event: &'a Event) -> Self {
        let start = minutes_of(&event.start);
        let end = match &event.end {
            Some(end) => minutes_of(end),
            None => start,
        };
        let end = if end <= start { start + 1 } else { end };
        Self {
            event,
            start,
            end,
            column: 0,
        }
    }

    fn overlaps(&self, other: &Block) -> bool {
        other.start < self.end && self.start < other.end
    }
}

fn minutes_of(t: &EventTime) -> u32 {
    t.time().map_or(0, |t| t.hour() * 60 + t.minute())
}

/// Lay out the timed events of `day` into non-overlapping columns.
///
/// Only events starting on `day` take part; multi-day and all-day events
/// belong to the banner so that every event is placed exactly once per view.
/// Mutually overlapping events are grouped into clusters, each packed into
/// the minimum number of columns, and blocks then expand rightwards over
/// columns that are free for their whole timespan.
pub fn layout_day(events: &[Event], day: NaiveDate) -> Vec<TimedLayout> {
    let mut blocks: Vec<Block> = events
        .iter()
        .filter(|e| e.start_day() == day && !e.is_multi_day() && !e.is_all_day())
        .map(|e| {
            e.warn_if_inverted();
            Block::new(e)
        })
        .collect();

    blocks.sort_by_key(|b| (b.start, Reverse(b.end - b.start)));

    split_clusters(blocks)
        .into_iter()
        .flat_map(layout_cluster)
        .collect()
}

/// Split start-sorted blocks into maximal groups of transitively overlapping
/// events with a single sweep: a new cluster begins whenever a block starts
/// at or after everything seen so far has ended.
fn split_clusters(sorted: Vec<Block>) -> Vec<Vec<Block>> {
    let mut clusters = Vec::new();
    let mut current: Vec<Block> = Vec::new();
    let mut max_end = 0;

    for block in sorted {
        if !current.is_empty() && block.start >= max_end {
            clusters.push(std::mem::take(&mut current));
        }
        max_end = if current.is_empty() {
            block.end
        } else {
            max_end.max(block.end)
        };
        current.push(block);
    }
    if !current.is_empty() {
        clusters.push(current);
    }
    clusters
}

fn layout_cluster(mut cluster: Vec<Block>) -> Vec<TimedLayout> {
    // Interval partitioning: first column whose last block ends by our start.
    // Within a column blocks are placed in start order, so tracking each
    // column's latest end is enough.
    let mut column_ends: Vec<u32> = Vec::new();
    for block in &mut cluster {
        match column_ends.iter().position(|&end| end <= block.start) {
            Some(c) => {
                column_ends[c] = block.end;
                block.column = c;
            }
            None => {
                block.column = column_ends.len();
                column_ends.push(block.end);
            }
        }
    }
    let total_columns = column_ends.len();

    // A block may widen over the columns to its right as long as no block in
    // them overlaps its timespan.
    let spans: Vec<usize> = cluster
        .iter()
        .map(|block| {
            let mut span = 1;
            'columns: for c in block.column + 1..total_columns {
                for other in cluster.iter().filter(|o| o.column == c) {
                    if block.overlaps(other) {
                        break 'columns;
                    }
                }
                span += 1;
            }
            span
        })
        .collect();

    let cluster_size = cluster.len();
    cluster
        .iter()
        .zip(spans)
        .map(|(block, span)| TimedLayout {
            event: block.event.clone(),
            top: block.start,
            height: (block.end - block.start).max(MIN_BLOCK_MINUTES),
            left: percent(block.column, total_columns),
            width: percent(span, total_columns),
            z_index: block.column as u32 + 1,
            column: block.column,
            total_columns,
            cluster_size,
        })
        .collect()
}

/// Percentage with four decimal places, keeping the output byte-stable.
fn percent(numerator: usize, denominator: usize) -> f64 {
    let fraction = numerator as f64 / denominator as f64;
    (fraction * 100.0 * 1e4).round() / 1e4
}
