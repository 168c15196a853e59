pub mod histogram;

pub use histogram::{render_histogram_chart, ChartStyle};
