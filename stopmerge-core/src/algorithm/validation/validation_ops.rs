use super::BatchValidationError;
use crate::model::CanonicalRow;

/// accepts a batch when it is non-empty and its first row has a latitude,
/// longitude and destination address, checked in that order.
///
/// only the first row is inspected. later rows missing a required field
/// pass through; see [`count_incomplete_rows`].
pub fn validate_batch(rows: &[CanonicalRow]) -> Result<(), BatchValidationError> {
    let first = rows.first().ok_or(BatchValidationError::EmptyBatch)?;
    match first.first_missing_required_field() {
        Some(field) => Err(BatchValidationError::MissingRequiredField(field)),
        None => Ok(()),
    }
}

/// number of rows lacking at least one required field
pub fn count_incomplete_rows(rows: &[CanonicalRow]) -> usize {
    rows.iter()
        .filter(|r| r.first_missing_required_field().is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_incomplete_rows, validate_batch};
    use crate::{
        algorithm::validation::BatchValidationError,
        model::{CanonicalField, CanonicalRow},
    };

    fn row(address: &str, latitude: &str, longitude: &str) -> CanonicalRow {
        CanonicalRow {
            destination_address: address.to_string(),
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_batch() {
        let err = validate_batch(&[]).unwrap_err();
        assert_eq!(err, BatchValidationError::EmptyBatch);
        assert_eq!(err.to_string(), "empty batch");
    }

    #[test]
    fn test_missing_latitude_reported_first() {
        let err = validate_batch(&[row("X", "", "1")]).unwrap_err();
        assert_eq!(
            err,
            BatchValidationError::MissingRequiredField(CanonicalField::Latitude)
        );
        assert_eq!(
            err.to_string(),
            "required field \"latitude\" not found in batch"
        );
    }

    #[test]
    fn test_field_check_order() {
        let err = validate_batch(&[row("", "1", "")]).unwrap_err();
        assert_eq!(
            err,
            BatchValidationError::MissingRequiredField(CanonicalField::Longitude)
        );
        let err = validate_batch(&[row("", "1", "2")]).unwrap_err();
        assert_eq!(
            err,
            BatchValidationError::MissingRequiredField(CanonicalField::DestinationAddress)
        );
    }

    #[test]
    fn test_only_first_row_is_checked() {
        let rows = [row("Rua A, 1", "1", "2"), row("", "", "")];
        assert!(validate_batch(&rows).is_ok());
        assert_eq!(count_incomplete_rows(&rows), 1);
    }
}
