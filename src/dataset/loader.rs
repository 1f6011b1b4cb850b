use crate::dataset::error::DatasetError;
use crate::dataset::schema;
use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

/// Reads the bike-sharing CSV into a raw DataFrame and validates its schema.
///
/// The file must have one header row and the ten required raw columns; a
/// missing column is fatal before any compute happens. Extra columns are
/// carried along untouched.
pub fn load_csv(path: &Path) -> Result<DataFrame, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Io(
            path.to_path_buf(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "input file does not exist"),
        ));
    }

    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|source| DatasetError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?
        .finish()
        .map_err(|source| DatasetError::CsvRead {
            path: path.to_path_buf(),
            source,
        })?;

    if let Err(error) = schema::validate_required_columns(&frame) {
        warn!("schema validation failed for {:?}: {}", path, error);
        return Err(error);
    }

    info!(
        "loaded {} observations ({} columns) from {:?}",
        frame.height(),
        frame.width(),
        path
    );
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID_HEADER: &str =
        "timestamp,cnt,t1,t2,hum,wind_speed,weather_code,is_holiday,is_weekend,season";

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_well_formed_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = write_csv(
            &dir,
            "bikes.csv",
            &format!(
                "{VALID_HEADER}\n\
                 2015-01-04 08:00:00,182,3.0,2.0,93.0,6.0,1,0,0,3\n\
                 2015-01-04 09:00:00,134,3.0,2.5,93.0,5.0,1,0,0,3\n"
            ),
        );

        let frame = load_csv(&path)?;
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.column(schema::RAW_COUNT)?.i64()?.get(0), Some(182));
        Ok(())
    }

    #[test]
    fn missing_column_is_a_schema_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        // No `wind_speed` column.
        let path = write_csv(
            &dir,
            "bad.csv",
            "timestamp,cnt,t1,t2,hum,weather_code,is_holiday,is_weekend,season\n\
             2015-01-04 08:00:00,182,3.0,2.0,93.0,1,0,0,3\n",
        );

        match load_csv(&path) {
            Err(DatasetError::MissingColumn { column }) => assert_eq!(column, "wind_speed"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|f| f.height())),
        }
        Ok(())
    }

    #[test]
    fn nonexistent_file_is_an_io_error() {
        let result = load_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(DatasetError::Io(_, _))));
    }
}
