use crate::core::powerset::powerset;
use crate::core::{FeatureOrder, ManifestReader, ResultSink};
use crate::utils::error::Result;

/// Drives one read → enumerate → serialize → emit pass.
pub struct MatrixEngine<R: ManifestReader, S: ResultSink> {
    reader: R,
    sink: S,
    order: FeatureOrder,
}

impl<R: ManifestReader, S: ResultSink> MatrixEngine<R, S> {
    pub fn new(reader: R, sink: S) -> Self {
        Self {
            reader,
            sink,
            order: FeatureOrder::default(),
        }
    }

    pub fn with_order(mut self, order: FeatureOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the JSON text that was handed to the sink.
    pub fn run(&mut self) -> Result<String> {
        let features = self.reader.read_features()?.ordered(self.order);
        tracing::debug!("Feature set ({:?} order): {:?}", self.order, features.names());

        let combinations = powerset(&features);
        tracing::info!(
            "Enumerated {} combinations of {} features",
            combinations.len(),
            features.len()
        );

        let matrix = combinations.to_json()?;

        self.sink.emit(&matrix)?;
        tracing::info!("Feature matrix written to {}", self.sink.describe());

        Ok(matrix)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FeatureSet;
    use crate::utils::error::MatrixError;
    use std::path::PathBuf;

    struct FixedReader(Vec<&'static str>);

    impl ManifestReader for FixedReader {
        fn read_features(&self) -> Result<FeatureSet> {
            Ok(FeatureSet::new(self.0.iter().copied()))
        }
    }

    struct MissingReader;

    impl ManifestReader for MissingReader {
        fn read_features(&self) -> Result<FeatureSet> {
            Err(MatrixError::ManifestNotFound {
                path: PathBuf::from("missing/Cargo.toml"),
            })
        }
    }

    #[derive(Default)]
    struct RecordingSink(Vec<String>);

    impl ResultSink for RecordingSink {
        fn emit(&mut self, matrix: &str) -> Result<()> {
            self.0.push(matrix.to_string());
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    #[test]
    fn test_run_emits_once() {
        let mut engine = MatrixEngine::new(FixedReader(vec!["http", "otel"]), RecordingSink::default());
        let matrix = engine.run().unwrap();

        assert_eq!(matrix, r#"["","http","otel","http,otel"]"#);
        assert_eq!(engine.into_sink().0, vec![matrix]);
    }

    #[test]
    fn test_sorted_order_applied() {
        let mut engine = MatrixEngine::new(FixedReader(vec!["otel", "http"]), RecordingSink::default())
            .with_order(FeatureOrder::Sorted);

        assert_eq!(engine.run().unwrap(), r#"["","http","otel","http,otel"]"#);
    }

    #[test]
    fn test_reader_failure_skips_sink() {
        let mut engine = MatrixEngine::new(MissingReader, RecordingSink::default());

        assert!(matches!(engine.run(), Err(MatrixError::ManifestNotFound { .. })));
        assert!(engine.into_sink().0.is_empty());
    }
}
