use crate::domain::model::FeatureSet;
use crate::utils::error::Result;

/// Source of the declared feature names.
pub trait ManifestReader {
    fn read_features(&self) -> Result<FeatureSet>;
}

/// Destination for the serialized matrix.
pub trait ResultSink {
    fn emit(&mut self, matrix: &str) -> Result<()>;

    /// Human-readable name of the destination, used in logs.
    fn describe(&self) -> String;
}

impl<T: ResultSink + ?Sized> ResultSink for Box<T> {
    fn emit(&mut self, matrix: &str) -> Result<()> {
        (**self).emit(matrix)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
