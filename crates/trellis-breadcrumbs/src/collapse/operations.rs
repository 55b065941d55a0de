//! The collapse algorithm and render-plan helpers on `CollapseResult`.

use tracing::{debug, warn};

use super::{CollapseResult, Segment};
use crate::item::BreadcrumbItem;

/// Split `items` into the ones shown directly and the ones folded away.
///
/// The first item (the root) and the last `max(1, max_visible - 1)` items stay
/// visible; everything between them collapses. An empty `items` slice is a
/// usage error: it is logged and yields an empty result.
pub fn collapse(items: &[BreadcrumbItem], max_visible: usize) -> CollapseResult {
    if items.is_empty() {
        warn!("breadcrumbs: collapse called with no items, nothing to render");
        return CollapseResult::default();
    }

    if items.len() <= max_visible {
        return CollapseResult {
            visible_items: items.to_vec(),
            collapsed_items: Vec::new(),
        };
    }

    let num_trailing = max_visible.saturating_sub(1).max(1);

    // Trailing block already reaches back to the root: nothing to fold.
    if num_trailing >= items.len() - 1 {
        return CollapseResult {
            visible_items: items.to_vec(),
            collapsed_items: Vec::new(),
        };
    }

    let tail_start = items.len() - num_trailing;
    let mut visible_items = Vec::with_capacity(num_trailing + 1);
    visible_items.push(items[0].clone());
    visible_items.extend_from_slice(&items[tail_start..]);
    let collapsed_items = items[1..tail_start].to_vec();

    debug!(
        total = items.len(),
        max_visible,
        collapsed = collapsed_items.len(),
        "breadcrumbs collapsed"
    );

    CollapseResult {
        visible_items,
        collapsed_items,
    }
}

impl CollapseResult {
    /// True when `collapse` was given no items; the caller renders nothing.
    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    /// True when an overflow indicator should be rendered.
    pub fn is_collapsed(&self) -> bool {
        !self.collapsed_items.is_empty()
    }

    /// The current (last) item of the trail.
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.visible_items.last()
    }

    /// Render plan: root, then the overflow indicator if anything collapsed,
    /// then the trailing items. The last item is flagged as current.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let Some((root, rest)) = self.visible_items.split_first() else {
            return Vec::new();
        };

        let mut segments = Vec::with_capacity(self.visible_items.len() + 1);
        segments.push(Segment::Item {
            item: root,
            current: rest.is_empty(),
        });

        if self.is_collapsed() {
            segments.push(Segment::Overflow(&self.collapsed_items));
        }

        let last = rest.len().saturating_sub(1);
        for (i, item) in rest.iter().enumerate() {
            segments.push(Segment::Item {
                item,
                current: i == last,
            });
        }
        segments
    }
}
