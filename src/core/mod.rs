pub mod csv_pipeline;
pub mod domain_dedup;
pub mod engine;
pub mod exact;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{CleanReport, FieldSet, Record, StageOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
