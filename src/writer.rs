use crate::Result;
use crate::models::ResultSet;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct CsvRow<'a> {
    language: &'a str,
    total: u64,
    processed: u64,
    average_salary: u64,
}

/// Writes any serializable value as pretty-printed JSON.
pub fn save_to_json<T: Serialize + ?Sized>(value: &T, file_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn save_to_csv(results: &ResultSet, file_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(file_path)?;
    let mut writer = csv::Writer::from_writer(file);

    for (language, stats) in results.iter() {
        writer.serialize(CsvRow {
            language,
            total: stats.total,
            processed: stats.processed,
            average_salary: stats.average_salary,
        })?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguageStats;
    use std::collections::BTreeMap;

    fn sample() -> ResultSet {
        let mut results = ResultSet::new();
        results.insert(
            "Python",
            LanguageStats {
                total: 10,
                processed: 1,
                average_salary: 150_000,
            },
        );
        results.insert("C#", LanguageStats::default());
        results
    }

    #[test]
    fn json_is_pretty_and_ordered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hh_salaries.json");

        save_to_json(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"Python\": {\n"));
        assert!(text.find("Python").unwrap() < text.find("C#").unwrap());

        let parsed: BTreeMap<String, LanguageStats> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["Python"].average_salary, 150_000);
        assert_eq!(parsed["C#"], LanguageStats::default());
    }

    #[test]
    fn json_accepts_any_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.json");
        let mut map = BTreeMap::new();
        map.insert("answer", 42);

        save_to_json(&map, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n  \"answer\": 42\n}\n");
    }

    #[test]
    fn csv_has_header_and_one_row_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hh_salaries.csv");

        save_to_csv(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "language,total,processed,average_salary\nPython,10,1,150000\nC#,0,0,0\n"
        );
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = save_to_json(&sample(), &path).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
