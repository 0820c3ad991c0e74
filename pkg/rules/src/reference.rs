/// Extract the bare identifier from a controller object reference.
///
/// The identifier is everything after the last `=`; a reference with no `=`
/// yields an empty string, which callers treat as "not set".
pub fn extract_identifier(reference: &str) -> &str {
    reference
        .rsplit_once('=')
        .map(|(_, identifier)| identifier)
        .unwrap_or("")
}
