use log::debug;

/// All orderings of `items`, each element used exactly once per ordering.
///
/// Orderings are lexicographic by input index; equal values at different
/// positions still produce separate orderings.
pub fn permutations_without_repetition<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    debug!("Generating permutations of {} items", items.len());

    let mut prefixes: Vec<Vec<usize>> = vec![Vec::new()];
    for _ in 0..items.len() {
        let mut extended = Vec::with_capacity(prefixes.len() * items.len());
        for prefix in &prefixes {
            for index in 0..items.len() {
                if prefix.contains(&index) {
                    continue;
                }
                let mut next = Vec::with_capacity(prefix.len() + 1);
                next.extend_from_slice(prefix);
                next.push(index);
                extended.push(next);
            }
        }
        prefixes = extended;
    }

    let result: Vec<Vec<T>> = prefixes
        .into_iter()
        .map(|indices| {
            indices
                .into_iter()
                .filter_map(|index| items.get(index).cloned())
                .collect()
        })
        .collect();

    debug!("Generated {} permutations", result.len());
    result
}

/// All sequences of `length` elements drawn from `items` with reuse allowed.
///
/// Sequences are lexicographic by item index, the last position varying fastest.
pub fn permutations_with_repetition<T: Clone>(items: &[T], length: usize) -> Vec<Vec<T>> {
    debug!(
        "Generating sequences of length {} over {} items",
        length,
        items.len()
    );

    let mut result: Vec<Vec<T>> = vec![Vec::new()];
    for _ in 0..length {
        let mut extended = Vec::with_capacity(result.len() * items.len());
        for prefix in &result {
            for item in items {
                let mut next = Vec::with_capacity(prefix.len() + 1);
                next.extend_from_slice(prefix);
                next.push(item.clone());
                extended.push(next);
            }
        }
        result = extended;
    }

    debug!("Generated {} sequences", result.len());
    result
}
