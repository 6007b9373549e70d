// ==============================================================================
// "Did You Mean" Suggestions
// ==============================================================================
//
// Edit-distance helpers behind the hint attached to unrecognized scalar type
// names (e.g. `int23` -> `int32`).

/// Compute the Levenshtein edit distance between two strings, counted in
/// `char`s.
///
/// Two-row dynamic programming; scalar type names are short so the quadratic
/// time is irrelevant.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j] + cost) // substitution
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b.len()]
}

/// Maximum edit distance for a suggestion to be considered "close enough."
///
/// Short names (length <= 4) only tolerate a single edit, otherwise `int` would
/// be "close" to half the keyword table.
pub(crate) fn max_edit_distance(name_len: usize) -> usize {
    if name_len <= 4 { 1 } else { 2 }
}

/// Pick the candidate closest to `name`, if any is within
/// [`max_edit_distance`]. Ties go to the earliest candidate.
pub(crate) fn suggest_name(name: &str, candidates: &[&'static str]) -> Option<&'static str> {
    let limit = max_edit_distance(name.chars().count());
    candidates
        .iter()
        .map(|&c| (c, levenshtein(name, c)))
        .filter(|&(_, d)| d <= limit)
        .min_by_key(|&(_, d)| d)
        .map(|(c, _)| c)
}
