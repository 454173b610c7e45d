// number of entries in the packed triangle of a k x k matrix
pub(crate) const fn triangular_number(k: usize) -> usize {
    (k * (k + 1)) >> 1
}

// 0-based index of (r,c), r <= c, in a row-major packed upper triangle
// of an n x n matrix.  Rows before r hold n + (n-1) + ... + (n-r+1) entries.
#[inline]
pub(crate) const fn triu_index(n: usize, r: usize, c: usize) -> usize {
    r * n - triangular_number(r) + c
}

// 0-based index of (r,c), r >= c, in a row-major packed lower triangle
#[inline]
pub(crate) const fn tril_index(r: usize, c: usize) -> usize {
    triangular_number(r) + c
}

#[test]
fn test_packed_indices() {
    assert_eq!(triangular_number(5), 15);
    // 3x3 upper: [00 01 02 11 12 22]
    assert_eq!(triu_index(3, 0, 2), 2);
    assert_eq!(triu_index(3, 1, 1), 3);
    assert_eq!(triu_index(3, 1, 2), 4);
    assert_eq!(triu_index(3, 2, 2), 5);
    // 5x5 upper, last element
    assert_eq!(triu_index(5, 4, 4), 14);
    // 3x3 lower: [00 10 11 20 21 22]
    assert_eq!(tril_index(1, 0), 1);
    assert_eq!(tril_index(2, 1), 4);
    assert_eq!(tril_index(4, 4), 14);
}
