/// Append every non-empty ordered subsequence of `to_do` to `prefix` and
/// collect the results in `combos`. Elements keep their order in `to_do`;
/// `n` elements give `2^n - 1` combinations.
pub fn generate_combinations<T: Clone>(prefix: &[T], to_do: &[T], combos: &mut Vec<Vec<T>>) {
    for (i, element) in to_do.iter().enumerate() {
        let mut combo = Vec::with_capacity(prefix.len() + 1);
        combo.extend_from_slice(prefix);
        combo.push(element.clone());

        let rest = &to_do[i + 1..];
        if rest.is_empty() {
            combos.push(combo);
        } else {
            combos.push(combo.clone());
            generate_combinations(&combo, rest, combos);
        }
    }
}

/// Every non-empty ordered subsequence of `items`.
pub fn all_combinations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut combos = Vec::new();
    generate_combinations(&[], items, &mut combos);
    combos
}
