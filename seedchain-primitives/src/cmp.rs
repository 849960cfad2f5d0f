/// Compares two byte slices without short-circuiting on the first difference.
///
/// # Panics
/// Panics if `a` and `b` have different lengths.
pub fn bytes_eq_secure(a: &[u8], b: &[u8]) -> bool {
    assert_eq!(
        a.len(),
        b.len(),
        "Arguments to `bytes_eq_secure` must have the same length"
    );

    let diff = a
        .iter()
        .zip(b)
        .fold(0u8, |acc, (x, y)| core::hint::black_box(acc | (x ^ y)));

    diff == 0
}
