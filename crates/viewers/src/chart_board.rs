//! The four chart regions of a report.

use shared::{ChartHandle, ChartSink, ChartSlot, ChartSpec};
use std::collections::HashMap;

struct LiveChart {
    handle_id: uuid::Uuid,
    spec: ChartSpec,
}

/// Holds the chart currently drawn in each slot.
#[derive(Default)]
pub struct ChartBoard {
    live: HashMap<ChartSlot, LiveChart>,
    created: usize,
    destroyed: usize,
}

impl ChartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.live.get(&slot).map(|c| &c.spec)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Charts created over the board's lifetime
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Charts destroyed over the board's lifetime
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }
}

impl ChartSink for ChartBoard {
    fn create(&mut self, spec: ChartSpec) -> ChartHandle {
        let slot = spec.slot();
        let handle = ChartHandle::new(slot);
        if self.live.contains_key(&slot) {
            tracing::warn!(?slot, "replacing a chart that was never destroyed");
        }
        self.live.insert(
            slot,
            LiveChart {
                handle_id: handle.id(),
                spec,
            },
        );
        self.created += 1;
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        let slot = handle.slot();
        match self.live.get(&slot) {
            Some(chart) if chart.handle_id == handle.id() => {
                self.live.remove(&slot);
                self.destroyed += 1;
            }
            _ => tracing::debug!(?slot, "destroy for a chart that is no longer live"),
        }
    }
}
