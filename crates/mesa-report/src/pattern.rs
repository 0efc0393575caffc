//! Wildcard matching over dot-namespaced action names.

/// Match `candidate` against `pattern`, where `*` matches any run of
/// characters (including none, and across `.` boundaries). Without a
/// wildcard this is a case-sensitive exact comparison.
///
/// Total over all inputs: there is no pattern syntax that can fail, so a
/// degenerate pattern simply does not match.
pub fn matches(candidate: &str, pattern: &str) -> bool {
    let text: Vec<char> = candidate.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();

    let (mut t, mut p) = (0usize, 0usize);
    // Last `*` seen and the text position it is currently anchored to.
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pat.len() && (pat[p] == text[t]) {
            t += 1;
            p += 1;
        } else if p < pat.len() && pat[p] == '*' {
            star = Some((p, t));
            p += 1;
        } else if let Some((star_p, star_t)) = star {
            // Backtrack: let the previous `*` absorb one more character.
            p = star_p + 1;
            t = star_t + 1;
            star = Some((star_p, star_t + 1));
        } else {
            return false;
        }
    }

    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}
