pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use config::manifest::{CargoManifest, Manifest};
pub use config::sink::{GithubOutputSink, SinkSelector, WriterSink};
pub use self::core::{engine::MatrixEngine, powerset::powerset};
pub use domain::model::{Combination, CombinationList, FeatureOrder, FeatureSet};
pub use domain::ports::{ManifestReader, ResultSink};
pub use utils::error::{MatrixError, Result};
