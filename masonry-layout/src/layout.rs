use crate::config::{ColumnStrategy, LayoutConfig};
use crate::error::LayoutError;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Where one item ended up after a layout pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub column: usize,
    /// Slot reserved for the item, padding included
    pub outer: Rect,
    /// Visible frame: `outer` inset by the padding on every side
    pub frame: Rect,
}

/// Everything a pass depends on, kept to detect stale caches
#[derive(Debug, Clone, PartialEq)]
struct PassInputs {
    aspect_ratios: Vec<f64>,
    width: f64,
    columns: usize,
    padding: f64,
    strategy: ColumnStrategy,
}

/// Column based masonry layout with a cache of the last pass.
///
/// Items are stacked top to bottom into equal width columns. Within a column
/// items keep their arrival order and never overlap.
#[derive(Debug, Clone, Default)]
pub struct MasonryLayout {
    config: LayoutConfig,
    placements: Vec<Placement>,
    column_heights: Vec<f64>,
    content_height: f64,
    last_inputs: Option<PassInputs>,
}

impl MasonryLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Runs a full pass and replaces the cache.
    ///
    /// Returns the content height and the placements, one per aspect ratio in
    /// input order.
    pub fn recompute(
        &mut self,
        aspect_ratios: &[f64],
        width: f64,
        columns: usize,
        padding: f64,
    ) -> Result<(f64, &[Placement]), LayoutError> {
        let inputs = PassInputs {
            aspect_ratios: aspect_ratios.to_vec(),
            width,
            columns,
            padding,
            strategy: self.config.strategy,
        };
        validate(&inputs)?;

        self.run_pass(inputs);
        Ok((self.content_height, &self.placements))
    }

    /// Lays out `aspect_ratios` with the configured width, columns and
    /// padding, skipping the pass when nothing changed since the last one.
    ///
    /// Returns whether a pass ran. Any change counts, including fewer items.
    pub fn prepare(&mut self, aspect_ratios: &[f64]) -> Result<bool, LayoutError> {
        let inputs = PassInputs {
            aspect_ratios: aspect_ratios.to_vec(),
            width: self.config.content_width,
            columns: self.config.columns,
            padding: self.config.padding,
            strategy: self.config.strategy,
        };

        if self.last_inputs.as_ref() == Some(&inputs) {
            return Ok(false);
        }

        validate(&inputs)?;
        self.run_pass(inputs);
        Ok(true)
    }

    /// Placements whose visible frame overlaps `rect`, in item order.
    ///
    /// Overlap means shared area: a `rect` with zero width or height matches
    /// nothing, and frames that only touch its edge are left out. Query a
    /// row of at least one unit height to hit a single line.
    pub fn placements_intersecting(&self, rect: &Rect) -> Vec<Placement> {
        self.placements
            .iter()
            .filter(|p| p.frame.intersects(rect))
            .copied()
            .collect()
    }

    pub fn placement_at(&self, index: usize) -> Result<&Placement, LayoutError> {
        self.placements
            .get(index)
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                len: self.placements.len(),
            })
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn content_size(&self) -> Size {
        Size {
            width: self.last_inputs.as_ref().map_or(0.0, |i| i.width),
            height: self.content_height,
        }
    }

    /// Accumulated height of every column after the last pass
    pub fn column_heights(&self) -> &[f64] {
        &self.column_heights
    }

    fn run_pass(&mut self, inputs: PassInputs) {
        let column_width = inputs.width / inputs.columns as f64;
        let x_offsets: Vec<f64> = (0..inputs.columns)
            .map(|col| col as f64 * column_width)
            .collect();
        let mut y_offsets = vec![0.0; inputs.columns];

        let mut placements = Vec::with_capacity(inputs.aspect_ratios.len());
        let mut content_height: f64 = 0.0;

        for (index, ratio) in inputs.aspect_ratios.iter().enumerate() {
            let column = match inputs.strategy {
                ColumnStrategy::RoundRobin => index % inputs.columns,
                ColumnStrategy::ShortestColumn => shortest_column(&y_offsets),
            };

            let height = inputs.padding * 2.0 + column_width * ratio;
            let outer = Rect::new(x_offsets[column], y_offsets[column], column_width, height);

            placements.push(Placement {
                index,
                column,
                outer,
                frame: outer.inset(inputs.padding, inputs.padding),
            });

            content_height = content_height.max(outer.max_y());
            y_offsets[column] += height;
        }

        log::debug!(
            "Masonry pass: {} items in {} columns, content height {}",
            placements.len(),
            inputs.columns,
            content_height
        );

        self.placements = placements;
        self.column_heights = y_offsets;
        self.content_height = content_height;
        self.last_inputs = Some(inputs);
    }
}

fn shortest_column(heights: &[f64]) -> usize {
    let mut best = 0;
    for (col, height) in heights.iter().enumerate().skip(1) {
        if *height < heights[best] {
            best = col;
        }
    }
    best
}

fn validate(inputs: &PassInputs) -> Result<(), LayoutError> {
    if inputs.columns == 0 {
        return Err(LayoutError::InvalidColumnCount);
    }
    if !inputs.width.is_finite() || inputs.width < 0.0 {
        return Err(LayoutError::InvalidDimension(format!(
            "width {}",
            inputs.width
        )));
    }
    if !inputs.padding.is_finite() || inputs.padding < 0.0 {
        return Err(LayoutError::InvalidDimension(format!(
            "padding {}",
            inputs.padding
        )));
    }
    if let Some((index, ratio)) = inputs
        .aspect_ratios
        .iter()
        .enumerate()
        .find(|(_, r)| !r.is_finite() || **r <= 0.0)
    {
        return Err(LayoutError::InvalidAspectRatio {
            index,
            ratio: *ratio,
        });
    }
    Ok(())
}
