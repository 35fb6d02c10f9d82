//! Free-text query cleanup.

/// Tidies a typed search before it is recorded and sent to the map.
///
/// Runs of spaces collapse to one, and a comma loses the spaces around it,
/// so `"10 ,  20"` becomes `"10,20"`. Never fails; anything else passes
/// through untouched.
pub fn normalize_query(raw: &str) -> String {
    let mut query = raw.to_string();
    while query.contains("  ") {
        query = query.replace("  ", " ");
    }
    query.replace(" , ", ",").replace(", ", ",").replace(" ,", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_space() {
        assert_eq!(normalize_query("A  B"), "A B");
    }

    #[test]
    fn test_comma_spacing() {
        assert_eq!(normalize_query("A , B"), "A,B");
        assert_eq!(normalize_query("A, B"), "A,B");
        assert_eq!(normalize_query("A ,B"), "A,B");
    }

    #[test]
    fn test_longer_runs_and_repeats() {
        assert_eq!(normalize_query("10   ,  20 , 30"), "10,20,30");
        assert_eq!(normalize_query("Central    Station"), "Central Station");
    }

    #[test]
    fn test_clean_input_is_untouched() {
        assert_eq!(normalize_query("600-A"), "600-A");
        assert_eq!(normalize_query(""), "");
    }
}
