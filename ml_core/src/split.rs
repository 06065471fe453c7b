use rand::{seq::SliceRandom, Rng};

use crate::{Dataset, MlError, Result};

/// Randomly partitions a dataset into disjoint train and test subsets.
///
/// Rows are shuffled with the provided generator, then the first
/// `round(len * test_fraction)` of them (clamped so neither side is empty)
/// become the test partition. Together the partitions cover every row
/// exactly once; neither preserves the original ordering.
///
/// # Arguments
/// * `data` - The dataset to partition.
/// * `test_fraction` - Fraction of rows held out for evaluation, in (0, 1).
/// * `rng` - Source of randomness; pass a seeded generator for
///   reproducible partitions.
///
/// # Returns
/// The `(train, test)` pair.
///
/// # Errors
/// Returns `MlError::InvalidInput` if `test_fraction` is not within (0, 1)
/// or the dataset has fewer than two rows.
pub fn train_test_split<R>(
    data: &Dataset,
    test_fraction: f32,
    rng: &mut R,
) -> Result<(Dataset, Dataset)>
where
    R: Rng + ?Sized,
{
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(MlError::InvalidInput(
            "test fraction must lie strictly between 0 and 1",
        ));
    }

    let n = data.len();
    if n < 2 {
        return Err(MlError::InvalidInput(
            "splitting needs at least two rows",
        ));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let test_len = ((n as f32 * test_fraction).round() as usize).clamp(1, n - 1);
    let (test_idx, train_idx) = indices.split_at(test_len);

    let train = data.subset(train_idx)?;
    let test = data.subset(test_idx)?;

    Ok((train, test))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn dataset(n: usize) -> Dataset {
        // Distinct feature values double as row identities.
        let rows = (0..n).map(|i| {
            let label = if i < n / 2 { "low" } else { "high" };
            (i as f32, label.to_string())
        });
        Dataset::from_rows(rows).unwrap()
    }

    #[test]
    fn partitions_are_disjoint_and_cover_all_rows() {
        let data = dataset(10);
        let mut rng = StdRng::seed_from_u64(7);

        let (train, test) = train_test_split(&data, 0.3, &mut rng).unwrap();

        assert_eq!(train.len() + test.len(), 10);
        assert_eq!(test.len(), 3);

        let mut seen: Vec<f32> = train
            .features()
            .iter()
            .chain(test.features())
            .copied()
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f32> = (0..10).map(|i| i as f32).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn quarter_fraction_on_four_rows_holds_out_one() {
        let data = Dataset::from_rows([
            (60.0, "0".to_string()),
            (65.0, "0".to_string()),
            (100.0, "1".to_string()),
            (105.0, "1".to_string()),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let (train, test) = train_test_split(&data, 0.25, &mut rng).unwrap();
        assert_eq!(train.len(), 3);
        assert_eq!(test.len(), 1);
    }

    #[test]
    fn tiny_fractions_still_leave_both_sides_non_empty() {
        let data = dataset(5);
        let mut rng = StdRng::seed_from_u64(3);

        let (train, test) = train_test_split(&data, 0.01, &mut rng).unwrap();
        assert_eq!(test.len(), 1);
        assert_eq!(train.len(), 4);

        let mut rng = StdRng::seed_from_u64(3);
        let (train, test) = train_test_split(&data, 0.99, &mut rng).unwrap();
        assert_eq!(test.len(), 4);
        assert_eq!(train.len(), 1);
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let data = dataset(4);
        let mut rng = StdRng::seed_from_u64(0);

        for bad in [0.0, 1.0, -0.5, 1.5, f32::NAN] {
            let err = train_test_split(&data, bad, &mut rng).unwrap_err();
            assert!(matches!(err, MlError::InvalidInput(_)), "fraction {bad}");
        }
    }

    #[test]
    fn rejects_datasets_with_fewer_than_two_rows() {
        let data = dataset(1);
        let mut rng = StdRng::seed_from_u64(0);

        let err = train_test_split(&data, 0.2, &mut rng).unwrap_err();
        assert!(matches!(err, MlError::InvalidInput(_)));
    }

    #[test]
    fn same_seed_yields_the_same_partitions() {
        let data = dataset(20);

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let (train_a, test_a) = train_test_split(&data, 0.2, &mut a).unwrap();
        let (train_b, test_b) = train_test_split(&data, 0.2, &mut b).unwrap();

        assert_eq!(train_a.features(), train_b.features());
        assert_eq!(test_a.features(), test_b.features());
    }
}
