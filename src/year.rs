use std::path::Path;

use crate::error::Error;

/// Infers the 4-digit year label of a yearly dataset from its file name.
///
/// Extensions (everything from the first `.`) are stripped, the remainder
/// is split on `_`, and the first token that is exactly four ASCII digits
/// wins. As a fallback the last four characters of the stripped name are
/// accepted when all are digits. Anything else is a fatal
/// [`Error::YearInference`].
pub fn infer_year(path: &Path) -> Result<String, Error> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();

    for token in stem.split('_') {
        if is_year_token(token) {
            return Ok(token.to_string());
        }
    }

    let mut tail: Vec<char> = stem.chars().rev().take(4).collect();
    tail.reverse();
    let tail: String = tail.into_iter().collect();
    if is_year_token(&tail) {
        return Ok(tail);
    }

    Err(Error::YearInference(path.to_path_buf()))
}

fn is_year_token(token: &str) -> bool {
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_year_from_token() {
        let path = PathBuf::from("data/nc/EmisCH4_2018_posterior.nc");
        assert_eq!(infer_year(&path).unwrap(), "2018");
    }

    #[test]
    fn test_year_from_multi_extension_name() {
        let path = PathBuf::from("model_output_9999.extra.ext");
        assert_eq!(infer_year(&path).unwrap(), "9999");
    }

    #[test]
    fn test_year_from_trailing_digits() {
        // No underscore-delimited token, but the stem ends in 4 digits.
        let path = PathBuf::from("GCB2022.nc");
        assert_eq!(infer_year(&path).unwrap(), "2022");
    }

    #[test]
    fn test_first_matching_token_wins() {
        let path = PathBuf::from("v10_2018_2019.nc");
        assert_eq!(infer_year(&path).unwrap(), "2018");
    }

    #[test]
    fn test_five_digit_token_rejected() {
        let path = PathBuf::from("run_20188.nc");
        // "20188" is not a year token; fallback takes the last 4 digits.
        assert_eq!(infer_year(&path).unwrap(), "0188");
    }

    #[test]
    fn test_no_year_is_fatal() {
        let path = PathBuf::from("abcXYZ");
        match infer_year(&path) {
            Err(Error::YearInference(p)) => assert_eq!(p, path),
            other => panic!("expected YearInference error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_name_is_fatal() {
        assert!(infer_year(&PathBuf::from("x.nc")).is_err());
    }
}
