use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Sort `items` by `key`, largest first. Equal keys keep their input order.
pub fn rank_descending<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    items
        .into_iter()
        .sorted_by_key(|item| std::cmp::Reverse(OrderedFloat(key(item))))
        .collect()
}

/// Keep only the entries whose value is strictly positive and rank them,
/// largest first.
pub fn rank_positive<'a, T, F>(items: &'a [T], value: F) -> Vec<(&'a T, f64)>
where
    F: Fn(&T) -> f64,
{
    let positive = items
        .iter()
        .map(|item| (item, value(item)))
        .filter(|(_, v)| *v > 0.0);
    rank_descending(positive, |(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_descending_is_stable() {
        let items = vec![("a", 1.0), ("b", 3.0), ("c", 1.0), ("d", 3.0), ("e", 2.0)];
        let ranked: Vec<_> = rank_descending(items, |(_, v)| *v)
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(ranked, vec!["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn test_rank_positive_filters() {
        let items = [0.0, 5.0, -1.0, 2.0, 0.0];
        let ranked: Vec<f64> = rank_positive(&items, |v| *v).into_iter().map(|(_, v)| v).collect();
        assert_eq!(ranked, vec![5.0, 2.0]);
    }
}
