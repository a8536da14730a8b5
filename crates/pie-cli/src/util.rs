use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use globwalk::GlobWalkerBuilder;
use pie_analysis::{
    log_file::LogFileName,
    record::{LogRecord, LogRow},
};
use serde::Deserialize;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn save_csv<I, T>(records: I, output_path: PathBuf) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: serde::Serialize,
    {
        let mut output = Output::open(output_path)?;
        output.write_csv(records)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }

    pub fn write_csv<I, T>(&mut self, records: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = T>,
        T: serde::Serialize,
    {
        let display_path = self.display_path();
        let mut writer = csv::Writer::from_writer(&mut *self);
        for record in records {
            writer
                .serialize(record)
                .with_context(|| format!("Failed to write CSV record to {display_path}"))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {display_path}"))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read every record of a CSV file with a header row
///
/// Columns that `T` does not name are ignored.
pub fn read_csv_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    reader
        .deserialize()
        .enumerate()
        .map(|(idx, record)| {
            record.with_context(|| {
                format!(
                    "Failed to parse record {} of {} file: {}",
                    idx + 1,
                    file_kind,
                    path.display()
                )
            })
        })
        .collect()
}

/// Experiment logs directly inside the data directory
pub const LOG_FILE_PATTERN: &str = "log*.csv";

/// List the experiment logs (`log*.csv`) of a directory in file name order
///
/// Subdirectories are not searched.
pub fn find_log_files<P>(dir: P) -> anyhow::Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let walker = GlobWalkerBuilder::from_patterns(dir, &[LOG_FILE_PATTERN])
        .max_depth(1)
        .build()
        .with_context(|| format!("Invalid log file pattern: {LOG_FILE_PATTERN}"))?;

    let mut paths = vec![];
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read log directory: {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Parse the name of a log file
pub fn parse_log_file_name(path: &Path) -> anyhow::Result<LogFileName> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid log file name: {}", path.display()))?;
    Ok(name.parse()?)
}

/// Read the rows of one experiment log
pub fn read_log_file(path: &Path, file: &LogFileName) -> anyhow::Result<Vec<LogRow>> {
    let records = read_csv_file::<LogRecord, _>("log", path)?;
    Ok(records
        .into_iter()
        .map(|record| LogRow::from_record(file, record))
        .collect())
}

#[derive(Debug, Deserialize)]
struct LikelihoodRecord {
    likelihood: f64,
}

/// Read the `likelihood` column of a recognition result file
pub fn read_likelihood_file<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let records = read_csv_file::<LikelihoodRecord, _>("likelihood", path)?;
    Ok(records.into_iter().map(|r| r.likelihood).collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_find_log_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "log_data_2_tl_3.csv",
            "log_data_1_tl_3.csv",
            "notes.csv",
            "log_data_1_tl_3.txt",
        ] {
            fs::write(dir.path().join(name), "id\n").unwrap();
        }
        fs::create_dir(dir.path().join("log_dir.csv")).unwrap();

        let files = find_log_files(dir.path()).unwrap();
        let names = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(names, ["log_data_1_tl_3.csv", "log_data_2_tl_3.csv"]);
    }

    #[test]
    fn test_find_log_files_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("log_data_1_tl_3.csv"), "id\n").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("log_data_9_tl_3.csv"), "id\n").unwrap();

        let files = find_log_files(dir.path()).unwrap();
        assert_eq!(files, [dir.path().join("log_data_1_tl_3.csv")]);
    }

    #[test]
    fn test_find_log_files_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_log_files(dir.path().join("absent")).is_err());
    }

    #[test]
    fn test_read_log_file_ignores_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log_data_5_traj_3.csv");
        fs::write(
            &path,
            "id,last_state,state,int_length,time\n5_1_1traj,1,0,3,12.5\n5_1_2traj,-1,1,1.5,13\n",
        )
        .unwrap();

        let file = parse_log_file_name(&path).unwrap();
        let rows = read_log_file(&path, &file).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject, "5");
        assert_eq!(rows[1].last_state, -1.0);
        assert_eq!(rows[1].int_length.0, 1.5);
    }

    #[test]
    fn test_read_log_file_reports_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log_data_5_traj_3.csv");
        fs::write(&path, "id,last_state,state,int_length\na,yes,0,3\n").unwrap();

        let file = parse_log_file_name(&path).unwrap();
        let err = read_log_file(&path, &file).unwrap_err();
        assert!(format!("{err:#}").contains("record 1"));
    }

    #[test]
    fn test_read_likelihood_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tlr_result.csv");
        fs::write(&path, "frame,likelihood\n1,0.9\n2,0.25\n").unwrap();
        assert_eq!(read_likelihood_file(&path).unwrap(), [0.9, 0.25]);
    }

    #[test]
    fn test_missing_likelihood_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_likelihood_file(dir.path().join("absent.csv")).is_err());
    }
}
