use crate::core::ReportSink;
use crate::utils::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_report(&self, report: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(report.as_bytes())?;
        handle.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "standard output".to_string()
    }
}

/// Writes the report to a file, replacing any previous content.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&self, report: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = File::create(&self.path)?;
        file.write_all(report.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Either destination, picked from an optional `--outfile`.
#[derive(Debug, Clone)]
pub enum OutputSink {
    Stdout(StdoutSink),
    File(FileSink),
}

impl OutputSink {
    pub fn from_option(outfile: Option<&Path>) -> Self {
        match outfile {
            Some(path) => OutputSink::File(FileSink::new(path)),
            None => OutputSink::Stdout(StdoutSink),
        }
    }
}

impl ReportSink for OutputSink {
    fn write_report(&self, report: &str) -> Result<()> {
        match self {
            OutputSink::Stdout(sink) => sink.write_report(report),
            OutputSink::File(sink) => sink.write_report(report),
        }
    }

    fn describe(&self) -> String {
        match self {
            OutputSink::Stdout(sink) => sink.describe(),
            OutputSink::File(sink) => sink.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creates_parent_dirs_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("protocols").join("s1.txt");
        let sink = FileSink::new(&path);

        sink.write_report("first\n").unwrap();
        sink.write_report("second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_output_sink_selection() {
        assert!(matches!(OutputSink::from_option(None), OutputSink::Stdout(_)));
        let sink = OutputSink::from_option(Some(Path::new("out.txt")));
        assert_eq!(sink.describe(), "out.txt");
    }
}
