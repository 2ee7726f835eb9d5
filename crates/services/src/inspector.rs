//! Wires file selection, parsing, classification, charts and the table.
//!
//! The inspector owns the live chart handles. A successful pass destroys
//! every handle from the previous pass before building new charts; a failed
//! attempt leaves charts and table exactly as they were.

use crate::charts::{default_builders, ChartBuilder};
use crate::column_classifier::classify;
use crate::csv_loader::{filter_empty_rows, CsvLoader};
use crate::table;
use shared::settings::Settings;
use shared::{
    ChartHandle, ChartSink, ChartSlot, ColumnClassification, Dataset, InspectError, Notifier,
    TableSink,
};
use std::path::Path;

/// The output surfaces one inspection pass renders into.
pub struct Surfaces<'a> {
    pub charts: &'a mut dyn ChartSink,
    pub table: &'a mut dyn TableSink,
    pub notifier: &'a mut dyn Notifier,
}

/// At most one live chart per slot.
#[derive(Debug, Default)]
pub struct ChartHandles {
    line: Option<ChartHandle>,
    bar: Option<ChartHandle>,
    pie: Option<ChartHandle>,
    scatter: Option<ChartHandle>,
}

impl ChartHandles {
    pub fn get(&self, slot: ChartSlot) -> Option<&ChartHandle> {
        match slot {
            ChartSlot::Line => self.line.as_ref(),
            ChartSlot::Bar => self.bar.as_ref(),
            ChartSlot::Pie => self.pie.as_ref(),
            ChartSlot::Scatter => self.scatter.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartHandle> {
        match slot {
            ChartSlot::Line => &mut self.line,
            ChartSlot::Bar => &mut self.bar,
            ChartSlot::Pie => &mut self.pie,
            ChartSlot::Scatter => &mut self.scatter,
        }
    }

    /// Empty every slot, returning the handles that were live.
    fn take_all(&mut self) -> Vec<ChartHandle> {
        [
            self.line.take(),
            self.bar.take(),
            self.pie.take(),
            self.scatter.take(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn live_count(&self) -> usize {
        ChartSlot::all()
            .iter()
            .filter(|slot| self.get(**slot).is_some())
            .count()
    }
}

/// Outcome of a successful pass
#[derive(Debug, Clone)]
pub struct Analysis {
    pub source: String,
    pub row_count: usize,
    pub classification: ColumnClassification,
    pub charts: Vec<ChartSlot>,
}

pub struct Inspector {
    loader: CsvLoader,
    builders: Vec<Box<dyn ChartBuilder>>,
    handles: ChartHandles,
}

impl Inspector {
    pub fn new(loader: CsvLoader, builders: Vec<Box<dyn ChartBuilder>>) -> Self {
        Self {
            loader,
            builders,
            handles: ChartHandles::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut loader = CsvLoader::new().with_trim(settings.trim);
        if let Some(d) = settings.delimiter {
            if d.is_ascii() {
                loader = loader.with_delimiter(d as u8);
            } else {
                tracing::warn!(delimiter = %d, "non-ASCII delimiter ignored, guessing instead");
            }
        }
        Self::new(loader, default_builders(&settings.date_label_format))
    }

    pub fn handles(&self) -> &ChartHandles {
        &self.handles
    }

    /// Handle a file selection. `None` means the user picked nothing.
    pub fn select_file(
        &mut self,
        path: Option<&Path>,
        out: &mut Surfaces<'_>,
    ) -> Result<Analysis, InspectError> {
        let Some(path) = path else {
            return fail(out, InspectError::UserInputMissing);
        };

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!("File selected: {}", source);

        match self.loader.load_file(path) {
            Ok(dataset) => self.on_parsed(&source, dataset, out),
            Err(err) => fail(out, err),
        }
    }

    /// Inspect CSV text that is already in memory.
    pub fn inspect_str(
        &mut self,
        source: &str,
        content: &str,
        out: &mut Surfaces<'_>,
    ) -> Result<Analysis, InspectError> {
        match self.loader.load_str(content) {
            Ok(dataset) => self.on_parsed(source, dataset, out),
            Err(err) => fail(out, err),
        }
    }

    /// Continue after a successful parse.
    pub fn on_parsed(
        &mut self,
        source: &str,
        dataset: Dataset,
        out: &mut Surfaces<'_>,
    ) -> Result<Analysis, InspectError> {
        let dataset = filter_empty_rows(dataset);
        if dataset.is_empty() {
            return fail(out, InspectError::EmptyDataset);
        }

        let (classification, charts) = self.analyze(&dataset, &mut *out.charts);
        table::render(&dataset, &mut *out.table);

        Ok(Analysis {
            source: source.to_string(),
            row_count: dataset.len(),
            classification,
            charts,
        })
    }

    fn analyze(
        &mut self,
        dataset: &Dataset,
        sink: &mut dyn ChartSink,
    ) -> (ColumnClassification, Vec<ChartSlot>) {
        for handle in self.handles.take_all() {
            sink.destroy(handle);
        }

        let classification = classify(dataset);
        tracing::info!(
            time = ?classification.time_columns,
            numeric = ?classification.numeric_columns,
            boolean = ?classification.boolean_columns,
            categorical = ?classification.categorical_columns,
            "Data analysis"
        );

        let mut created = Vec::new();
        for builder in &self.builders {
            match builder.build(dataset, &classification) {
                Some(spec) => {
                    let handle = sink.create(spec);
                    let slot = handle.slot();
                    created.push(slot);
                    *self.handles.slot_mut(slot) = Some(handle);
                }
                None => tracing::debug!(slot = ?builder.slot(), "chart prerequisites missing"),
            }
        }

        (classification, created)
    }
}

fn fail<T>(out: &mut Surfaces<'_>, err: InspectError) -> Result<T, InspectError> {
    tracing::debug!(error = %err, "inspection attempt failed");
    out.notifier.alert(&err.to_string());
    Err(err)
}
