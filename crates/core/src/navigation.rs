/// Fragment token of an address: everything after the first `#`.
///
/// Returns `None` when the address has no fragment or an empty one.
#[must_use]
pub fn fragment_token(address: &str) -> Option<&str> {
    let (_, fragment) = address.split_once('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(fragment)
}
