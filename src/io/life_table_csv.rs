use std::path::Path;

use thiserror::Error;

use crate::model::profile::MAX_LIFE_EXPECTANCY_YEARS;
use crate::model::CountryLifeExpectancy;

#[derive(Debug, Error)]
pub enum LifeTableError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV is missing required columns. Found headers: {found:?}. Need columns for: country, male, female.")]
    MissingColumns { found: Vec<String> },
    #[error("no valid rows found ({skipped} rows skipped)")]
    NoValidRows { skipped: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Country,
    Male,
    Female,
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

fn header_to_column(normalized: &str) -> Option<Column> {
    match normalized {
        "country" | "name" | "countryname" | "nation" => Some(Column::Country),
        "male" | "men" | "m" | "malelifeexpectancy" | "lifeexpectancymale" => Some(Column::Male),
        "female" | "women" | "f" | "femalelifeexpectancy" | "lifeexpectancyfemale" => {
            Some(Column::Female)
        }
        _ => None,
    }
}

/// Parse a life expectancy cell; accepts a decimal comma.
fn parse_years(s: &str) -> Option<f64> {
    let years: f64 = s.trim().replace(',', ".").parse().ok()?;
    (years.is_finite() && years > 0.0 && years <= MAX_LIFE_EXPECTANCY_YEARS).then_some(years)
}

/// Parse override rows from CSV text. Returns `(rows, skipped_count)`.
pub fn parse_life_table(content: &str) -> Result<(Vec<CountryLifeExpectancy>, usize), LifeTableError> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<Column>> = headers
        .iter()
        .map(|h| header_to_column(&normalize_header(h)))
        .collect();

    let position = |col: Column| col_map.iter().position(|c| *c == Some(col));
    let (Some(country_idx), Some(male_idx), Some(female_idx)) = (
        position(Column::Country),
        position(Column::Male),
        position(Column::Female),
    ) else {
        return Err(LifeTableError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    };

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("skipping life table row {}: {}", i + 2, e);
                skipped += 1;
                continue;
            }
        };

        let name = record.get(country_idx).unwrap_or("").trim();
        if name.is_empty() {
            skipped += 1;
            continue;
        }

        let male = record.get(male_idx).and_then(parse_years);
        let female = record.get(female_idx).and_then(parse_years);
        match (male, female) {
            (Some(male), Some(female)) => {
                rows.push(CountryLifeExpectancy::new(name, male, female));
            }
            _ => {
                tracing::warn!("skipping life table row {}: invalid figures for '{}'", i + 2, name);
                skipped += 1;
            }
        }
    }

    if rows.is_empty() {
        return Err(LifeTableError::NoValidRows { skipped });
    }
    Ok((rows, skipped))
}

/// Import override rows from a CSV file.
pub fn import_life_table(path: &Path) -> Result<(Vec<CountryLifeExpectancy>, usize), LifeTableError> {
    let content = std::fs::read_to_string(path).map_err(|e| LifeTableError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_life_table(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_delimiters() {
        assert_eq!(detect_delimiter("Country;Male;Female"), b';');
        assert_eq!(detect_delimiter("Country,Male,Female"), b',');
        assert_eq!(detect_delimiter("Country\tMale\tFemale"), b'\t');
    }

    #[test]
    fn parses_semicolon_file_with_decimal_commas() {
        let csv = "Country Name;Male;Female\nMonaco;85,5;89,0\nJapan;82;88\n";
        let (rows, skipped) = parse_life_table(csv).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(
            rows,
            vec![
                CountryLifeExpectancy::new("Monaco", 85.5, 89.0),
                CountryLifeExpectancy::new("Japan", 82.0, 88.0),
            ]
        );
    }

    #[test]
    fn matches_headers_in_any_order_and_skips_bad_rows() {
        let csv = "women,men,nation\n84,80,Atlantis\n,79,Nowhere\n83,abc,Elsewhere\n90,200,Utopia\n81,77,\n";
        let (rows, skipped) = parse_life_table(csv).unwrap();
        assert_eq!(rows, vec![CountryLifeExpectancy::new("Atlantis", 80.0, 84.0)]);
        assert_eq!(skipped, 4);
    }

    #[test]
    fn missing_columns_are_reported() {
        let err = parse_life_table("Country,Average\nJapan,84.6\n").unwrap_err();
        assert!(matches!(err, LifeTableError::MissingColumns { .. }), "{err}");
    }

    #[test]
    fn file_without_valid_rows_is_an_error() {
        let err = parse_life_table("country;male;female\nJapan;x;y\n").unwrap_err();
        assert!(matches!(err, LifeTableError::NoValidRows { skipped: 1 }), "{err}");
    }

    #[test]
    fn imports_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life_expectancy.csv");
        std::fs::write(&path, "country,male,female\nMonaco,85,89\n").unwrap();
        let (rows, _) = import_life_table(&path).unwrap();
        assert_eq!(rows.len(), 1);

        let missing = import_life_table(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(missing, LifeTableError::Read { .. }));
    }
}
