use crate::core::ResultSink;
use crate::utils::error::{MatrixError, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default key of the line appended to the GitHub output file.
pub const DEFAULT_OUTPUT_NAME: &str = "features";

/// Where the matrix should go, decided once at the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkSelector {
    GithubOutput { path: PathBuf, name: String },
    Stdout,
}

impl SinkSelector {
    pub fn into_sink(self) -> Box<dyn ResultSink> {
        match self {
            SinkSelector::GithubOutput { path, name } => {
                Box::new(GithubOutputSink::new(path).with_name(name))
            }
            SinkSelector::Stdout => Box::new(WriterSink::stdout()),
        }
    }
}

/// Appends `name=<matrix>` lines to a `$GITHUB_OUTPUT` style file.
#[derive(Debug, Clone)]
pub struct GithubOutputSink {
    path: PathBuf,
    name: String,
}

impl GithubOutputSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, matrix: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // One write call so the line lands in a single append.
        file.write_all(format!("{}={}\n", self.name, matrix).as_bytes())?;
        file.flush()
    }
}

impl ResultSink for GithubOutputSink {
    fn emit(&mut self, matrix: &str) -> Result<()> {
        self.append(matrix).map_err(|source| MatrixError::SinkError {
            target: self.describe(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("GitHub output file {} (key '{}')", self.path.display(), self.name)
    }
}

/// Writes the bare matrix plus a newline to any writer, stdout by default.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    label: &'static str,
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
            label: "stdout",
        }
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            label: "writer",
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn emit(&mut self, matrix: &str) -> Result<()> {
        writeln!(self.writer, "{}", matrix)
            .and_then(|_| self.writer.flush())
            .map_err(|source| MatrixError::SinkError {
                target: self.label.to_string(),
                source,
            })
    }

    fn describe(&self) -> String {
        self.label.to_string()
    }
}
