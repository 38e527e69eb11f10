/// street number of a `"street, number ..., rest"` address: the leading
/// ASCII digits of the second comma-delimited segment after trimming.
/// returns an empty string when there is no second segment or it does not
/// start with a digit.
pub fn extract_address_number(address: &str) -> &str {
    match address.split(',').nth(1) {
        None => "",
        Some(segment) => {
            let trimmed = segment.trim();
            let end = trimmed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(trimmed.len());
            &trimmed[..end]
        }
    }
}
