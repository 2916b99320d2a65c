/// Case-fold a term name for case-insensitive comparison.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
