use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::domain::TransactionContext;

/// Failure to turn a JSON fact sheet into a transaction context.
#[derive(Debug, thiserror::Error)]
pub enum FactSheetError {
    #[error("failed to read fact sheet {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fact sheet: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn load_fact_sheet<P: AsRef<Path>>(path: P) -> Result<TransactionContext, FactSheetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| FactSheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_fact_sheet(file)
}

pub fn read_fact_sheet<R: Read>(reader: R) -> Result<TransactionContext, FactSheetError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_fact_sheet(raw: &str) -> Result<TransactionContext, FactSheetError> {
    Ok(serde_json::from_str(raw)?)
}

/// Fill in the guidance date when the sheet leaves it unset.
pub fn with_guidance_date(mut context: TransactionContext, today: NaiveDate) -> TransactionContext {
    context.guidance_date.get_or_insert(today);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn unknown_wire_code_is_malformed() {
        let err = parse_fact_sheet(r#"{ "transactionType": "cho_thue" }"#)
            .expect_err("unknown transaction type rejected");
        assert!(matches!(err, FactSheetError::Malformed(_)));
        assert!(err.to_string().starts_with("invalid fact sheet"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_fact_sheet("does-not-exist/fact-sheet.json").expect_err("missing file");
        assert!(err.to_string().contains("does-not-exist/fact-sheet.json"));
    }

    #[test]
    fn reader_accepts_minimal_sheet() {
        let context = read_fact_sheet(Cursor::new(r#"{ "hasCertificate": "khong" }"#))
            .expect("minimal sheet parses");
        assert!(context.owners.is_empty());
        assert_eq!(context.guidance_date, None);
    }

    #[test]
    fn declared_guidance_date_wins_over_today() {
        let declared = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let today = NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date");

        let kept = with_guidance_date(
            TransactionContext {
                guidance_date: Some(declared),
                ..TransactionContext::default()
            },
            today,
        );
        let filled = with_guidance_date(TransactionContext::default(), today);

        assert_eq!(kept.guidance_date, Some(declared));
        assert_eq!(filled.guidance_date, Some(today));
    }
}
