//! Output capabilities the inspector renders into.
//!
//! The analysis code never touches a page directly; it hands chart specs and
//! table contents to these traits so it can run headless in tests.

use crate::chart::{ChartHandle, ChartSpec};

/// Receives chart configurations and hands back a handle per live chart.
pub trait ChartSink {
    /// Draw a chart into the region for `spec.slot()`
    fn create(&mut self, spec: ChartSpec) -> ChartHandle;

    /// Tear down a previously created chart
    fn destroy(&mut self, handle: ChartHandle);
}

/// Table contents ready for display: every cell is already a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePreview {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub trait TableSink {
    /// Replace whatever table is currently shown
    fn replace(&mut self, table: TablePreview);
}

/// User-facing, blocking messages (the "alert" surface).
pub trait Notifier {
    fn alert(&mut self, message: &str);
}
