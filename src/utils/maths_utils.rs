use argminmax::ArgMinMax;

/// Largest value in a non-empty slice. NaNs are ignored by the search.
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Smallest value in a non-empty slice. NaNs are ignored by the search.
pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

pub fn get_min_max(vec: &[f64]) -> (f64, f64) {
    (get_min(vec), get_max(vec))
}

/// `None` for an empty slice instead of panicking on the index.
pub fn try_get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    Some(get_max(vec))
}
