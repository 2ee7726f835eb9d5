pub mod chart;
pub mod classification;
pub mod dataset;
pub mod error;
pub mod sink;

pub use chart::{ChartHandle, ChartSlot, ChartSpec};
pub use classification::{ColumnClassification, ColumnKind};
pub use dataset::{CellValue, Dataset, Row};
pub use error::InspectError;
pub use sink::{ChartSink, Notifier, TablePreview, TableSink};

pub mod settings {
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;

    fn default_date_label_format() -> String {
        // en-US short date, e.g. 3/1/2024
        "%-m/%-d/%Y".into()
    }

    fn default_chartjs_src() -> String {
        "https://cdn.jsdelivr.net/npm/chart.js".into()
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Settings {
        /// Field delimiter; guessed from the file when unset
        #[serde(default)]
        pub delimiter: Option<char>,
        /// Trim whitespace around every field before typing it
        #[serde(default)]
        pub trim: bool,
        /// chrono format used for date labels on the charts
        #[serde(default = "default_date_label_format")]
        pub date_label_format: String,
        /// Where reports are written; next to the CSV when unset
        #[serde(default)]
        pub output_dir: Option<PathBuf>,
        #[serde(default)]
        pub open_in_browser: bool,
        /// Script URL the report loads Chart.js from
        #[serde(default = "default_chartjs_src")]
        pub chartjs_src: String,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                delimiter: None,
                trim: false,
                date_label_format: default_date_label_format(),
                output_dir: None,
                open_in_browser: false,
                chartjs_src: default_chartjs_src(),
            }
        }
    }

}
