//! Date annotation subsampling

/// Maximal number of evenly spaced annotations we aim for
const TARGET_ANNOTATIONS: usize = 10;

/// Selects the indices of the records that deserve a date annotation,
/// out of `n` records: every `max(n / 10, 1)` record, starting at 0.
/// ```
/// use skypath::prelude::annotation_indices;
/// assert!(annotation_indices(0).is_empty());
/// assert_eq!(annotation_indices(5), vec![0, 1, 2, 3, 4]);
/// assert_eq!(annotation_indices(100), (0..100).step_by(10).collect::<Vec<_>>());
/// ```
pub fn annotation_indices(n: usize) -> Vec<usize> {
    let stride = std::cmp::max(n / TARGET_ANNOTATIONS, 1);
    (0..n).step_by(stride).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn stride_37() {
        let indices = annotation_indices(37);
        let expected: Vec<usize> = (0..=36).step_by(3).collect();
        assert_eq!(indices, expected);
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&36));
    }
    #[test]
    fn bounds() {
        for n in 0..500 {
            let indices = annotation_indices(n);
            if n == 0 {
                assert!(indices.is_empty());
                continue;
            }
            assert_eq!(indices[0], 0, "index 0 missing for n={}", n);
            assert!(indices.iter().all(|i| *i < n), "out of bounds for n={}", n);
            assert!(
                indices.windows(2).all(|w| w[1] - w[0] == std::cmp::max(n / 10, 1)),
                "uneven spacing for n={}",
                n
            );
        }
    }
}
