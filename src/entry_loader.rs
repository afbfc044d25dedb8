use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use crate::shopping_list::RawEntry;

// Expected column headers
const INGREDIENT_COL: &str = "ingredient";
const QUANTITY_COL: &str = "quantity";
const UNIT_COL: &str = "unit";

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", name))
}

/// Read raw shopping entries from CSV text with an `ingredient,quantity,unit` header.
pub fn parse_raw_entries(csv_text: &str) -> Result<Vec<RawEntry>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = rdr.headers()?.clone();
    let ingredient_idx = column_index(&headers, INGREDIENT_COL)?;
    let quantity_idx = column_index(&headers, QUANTITY_COL)?;
    let unit_idx = column_index(&headers, UNIT_COL)?;

    let mut entries = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let ingredient = record.get(ingredient_idx).unwrap_or_default().trim();
        if ingredient.is_empty() {
            continue;
        }

        let raw_quantity = record.get(quantity_idx).unwrap_or_default().trim();
        let quantity = match raw_quantity.parse::<f64>() {
            Ok(q) if q.is_finite() => q,
            _ => {
                tracing::warn!(row_index, ingredient, raw_quantity, "skipping row with unparseable quantity");
                continue;
            }
        };

        entries.push(RawEntry {
            ingredient: ingredient.to_string(),
            quantity,
            unit: record.get(unit_idx).unwrap_or_default().trim().to_string(),
        });
    }

    if entries.is_empty() {
        return Err(anyhow::anyhow!("No valid entries found"));
    }

    Ok(entries)
}

pub fn load_raw_entries(csv_path: &Path) -> Result<Vec<RawEntry>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Entries CSV file not found at: {:?}", csv_path));
    }
    let text = std::fs::read_to_string(csv_path)
        .with_context(|| format!("Failed to open entries CSV file at {:?}", csv_path))?;
    parse_raw_entries(&text).with_context(|| format!("Failed to load entries from {:?}", csv_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{},{},{}", INGREDIENT_COL, QUANTITY_COL, UNIT_COL)?;
        writeln!(file, "Garlic,4,clove")?;
        writeln!(file, "garlic,1,head")?;
        writeln!(file, "flour,600,g")?;
        writeln!(file, ",10,g")?; // Empty name
        writeln!(file, "salt,a little,pinch")?; // Invalid quantity
        writeln!(file, "spinach,2,")?; // No unit
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_raw_entries_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let entries = load_raw_entries(file.path())?;

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], RawEntry::new("Garlic", 4.0, "clove"));
        assert_eq!(entries[2], RawEntry::new("flour", 600.0, "g"));
        assert_eq!(entries[3], RawEntry::new("spinach", 2.0, ""));
        Ok(())
    }

    #[test]
    fn test_headers_are_case_insensitive() -> Result<()> {
        let entries = parse_raw_entries("Unit, Quantity ,Ingredient\ntbsp,3,butter\n")?;
        assert_eq!(entries, vec![RawEntry::new("butter", 3.0, "tbsp")]);
        Ok(())
    }

    #[test]
    fn test_missing_column() {
        let result = parse_raw_entries("ingredient,unit\nflour,g\n");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains(&format!("Column '{}' not found", QUANTITY_COL)));
    }

    #[test]
    fn test_headers_only() {
        let result = parse_raw_entries("ingredient,quantity,unit\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No valid entries found"));
    }

    #[test]
    fn test_file_not_found() {
        let path = Path::new("this_file_does_not_exist.csv");
        let result = load_raw_entries(path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Entries CSV file not found"));
    }
}
