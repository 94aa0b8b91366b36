pub mod engine;
pub mod powerset;

pub use crate::domain::model::{Combination, CombinationList, FeatureOrder, FeatureSet};
pub use crate::domain::ports::{ManifestReader, ResultSink};
pub use crate::utils::error::Result;
