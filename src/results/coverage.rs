//! Go coverage extraction
//!
//! Pulls the total statement coverage out of `go tool cover -func` output.
//! The last line looks like:
//!
//! ```text
//! total:    (statements)    87.5%
//! ```

/// Extract the total coverage percentage, if the output contains one
pub fn extract_total_coverage(cover_output: &str) -> Option<f64> {
    cover_output
        .lines()
        .rev()
        .find(|line| line.starts_with("total:"))
        .and_then(|line| line.split_whitespace().last())
        .and_then(|field| field.strip_suffix('%'))
        .and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_total_line() {
        let output = "\
github.com/podinfo/pkg/api/server.go:42:\tListenAndServe\t100.0%
github.com/podinfo/pkg/api/server.go:88:\tShutdown\t75.0%
total:\t(statements)\t87.5%
";
        assert_eq!(extract_total_coverage(output), Some(87.5));
    }

    #[test]
    fn test_missing_total_line() {
        assert_eq!(extract_total_coverage("no coverage here"), None);
        assert_eq!(extract_total_coverage(""), None);
    }

    #[test]
    fn test_malformed_percentage() {
        assert_eq!(extract_total_coverage("total:\t(statements)\tN/A"), None);
    }
}
