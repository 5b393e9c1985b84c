use crate::domain::units::{Length, Quantity, UnitSystem};

/// Fills a dimension list out to three axes (height, width, length).
///
/// An empty list becomes three zeros. Shorter lists are padded at the front
/// with copies of the first value, so one value describes a cube and two
/// values repeat the first: `[5] -> [5, 5, 5]`, `[1, 2] -> [1, 1, 2]`.
/// Lists of three or more are returned unchanged.
pub fn fill_axes<T: Clone>(mut values: Vec<T>, zero: T) -> Vec<T> {
    if values.is_empty() {
        return vec![zero.clone(), zero.clone(), zero];
    }
    while values.len() < 3 {
        let first = values[0].clone();
        values.insert(0, first);
    }
    values
}

pub fn normalize_dimensions(values: Vec<Length>, system: UnitSystem) -> Vec<Length> {
    let zero = Length::from_parts(0.0, Length::default_unit(system));
    fill_axes(values, zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_becomes_zeros() {
        assert_eq!(fill_axes(Vec::new(), 0), vec![0, 0, 0]);
    }

    #[test]
    fn test_single_value_is_a_cube() {
        assert_eq!(fill_axes(vec![5], 0), vec![5, 5, 5]);
    }

    #[test]
    fn test_two_values_repeat_first() {
        assert_eq!(fill_axes(vec![1, 2], 0), vec![1, 1, 2]);
    }

    #[test]
    fn test_three_or_more_unchanged() {
        assert_eq!(fill_axes(vec![3, 1, 2], 0), vec![3, 1, 2]);
        assert_eq!(fill_axes(vec![1, 2, 3, 4], 0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_zero_fill_uses_system_unit() {
        let axes = normalize_dimensions(Vec::new(), UnitSystem::Imperial);
        assert_eq!(axes, vec![Length::inches(0.0); 3]);
    }
}
