//! Responsive layout engine.
//!
//! Derives how many tiles fit the measured container width and keeps the
//! pagination window consistent as that number changes. Width events arrive
//! asynchronously and may repeat; every event recomputes the state from
//! scratch, so delivery order and frequency never accumulate stale deltas.
//! All arithmetic is clamped: no width or item count can produce an
//! out-of-range page or a division by zero.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Width one tile needs, including its margins.
pub const TILE_MIN_WIDTH: f64 = 180.0;

/// Horizontal container padding (left + right).
pub const CONTAINER_PADDING: f64 = 40.0;

/// Small slack subtracted before dividing, so a tile never touches the edge.
pub const WIDTH_BUFFER: f64 = 5.0;

/// Measurement phase: no width event has been delivered yet in
/// `Uninitialized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum MeasurePhase {
    #[default]
    Uninitialized,
    Measured,
}

/// Pagination state owned by the layout engine.
///
/// Mutated only by width-change events ([`observe_width`]) and explicit
/// navigation ([`previous`] / [`next`]); [`reconcile_item_count`] re-clamps
/// the page after the item sequence is swapped.
///
/// [`observe_width`]: LayoutState::observe_width
/// [`previous`]: LayoutState::previous
/// [`next`]: LayoutState::next
/// [`reconcile_item_count`]: LayoutState::reconcile_item_count
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutState {
    configured_max: usize,
    phase: MeasurePhase,
    container_width: f64,
    effective: usize,
    current_page: usize,
}

impl LayoutState {
    /// New engine for an operator target of `configured_max` tiles per view
    /// (clamped into `[1, 4]`). Until the first width event the effective
    /// count is the configured target.
    pub fn new(configured_max: usize) -> Self {
        let configured_max = configured_max.clamp(1, 4);
        Self {
            configured_max,
            phase: MeasurePhase::Uninitialized,
            container_width: 0.0,
            effective: configured_max,
            current_page: 0,
        }
    }

    /// Recompute the tiles-per-view count for a delivered container width.
    ///
    /// Idempotent per width. A changed effective count resets the current
    /// page to 0 so a shrink can never strand the view past the last page.
    pub fn observe_width(&mut self, container_width: f64) {
        let container_width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };

        let available = (container_width - CONTAINER_PADDING).max(TILE_MIN_WIDTH);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let can_fit = (((available - WIDTH_BUFFER) / TILE_MIN_WIDTH).floor() as usize).max(1);
        let effective = can_fit.clamp(1, self.configured_max);

        self.phase = MeasurePhase::Measured;
        self.container_width = container_width;
        if effective != self.effective {
            self.effective = effective;
            self.current_page = 0;
        }
    }

    /// Whether an initial width measurement has been delivered.
    pub fn is_measured(&self) -> bool {
        self.phase == MeasurePhase::Measured
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Tiles shown per page, always in `[1, configured_max]`.
    pub fn effective_items_per_page(&self) -> usize {
        self.effective
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page count for `item_count` items: `ceil(n / effective)`, 0 when the
    /// gallery is empty.
    pub fn total_pages(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.effective)
    }

    /// Step back one page. No-op at the first page.
    pub fn previous(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    /// Step forward one page. No-op at the last page.
    pub fn next(&mut self, item_count: usize) {
        let last = self.total_pages(item_count).saturating_sub(1);
        if self.current_page < last {
            self.current_page += 1;
        }
    }

    /// Clamp the current page after the item sequence changed size, keeping
    /// `current_page < max(1, total_pages)`.
    pub fn reconcile_item_count(&mut self, item_count: usize) {
        let last = self.total_pages(item_count).saturating_sub(1);
        self.current_page = self.current_page.min(last);
    }

    /// The pagination window: indices of the items visible on the current
    /// page, clipped to the sequence length.
    pub fn visible_range(&self, item_count: usize) -> std::ops::Range<usize> {
        let start = (self.current_page * self.effective).min(item_count);
        let end = (start + self.effective).min(item_count);
        start..end
    }
}
