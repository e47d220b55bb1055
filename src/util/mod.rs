// Generic things

/// Size of iterator if it's exactly known without consuming it.
pub fn exact_size<I: Iterator + ?Sized>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}
