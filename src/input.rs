use rand::Rng;
use std::fmt;
use std::num::ParseIntError;

/// Upper bound (exclusive) for generated values.
const RANDOM_VALUE_LIMIT: i64 = 100;

/// Ways reading a sequence off the command line can go wrong.
#[derive(Debug)]
pub enum Error {
    /// An item in an integer list was not an integer.
    InvalidNumber { item: String, source: ParseIntError },
    /// No list was given and no random length was requested either.
    MissingInput,
    /// A total did not fit in an `i64`.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidNumber { item, source } => {
                write!(f, "\"{}\" is not an integer: {}", item, source)
            }
            Error::MissingInput => write!(f, "expected a comma-separated list or --random <LEN>"),
            Error::Overflow => write!(f, "sum does not fit in a 64-bit integer"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidNumber { source, .. } => Some(source),
            Error::MissingInput | Error::Overflow => None,
        }
    }
}

/// Splits a comma-separated list into its items. Whitespace around items is
/// trimmed and empty items are skipped, so `""` is the empty sequence.
pub fn parse_sequence(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a comma-separated list of integers.
pub fn parse_numbers(raw: &str) -> Result<Vec<i64>, Error> {
    let mut numbers = Vec::new();
    for item in parse_sequence(raw) {
        let n = item
            .parse::<i64>()
            .map_err(|source| Error::InvalidNumber { item: item.clone(), source })?;
        numbers.push(n);
    }
    Ok(numbers)
}

/// Generates `len` integers in `0..100`.
pub fn random_numbers(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..RANDOM_VALUE_LIMIT)).collect()
}

/// Picks the list to work on: the literal one if given, otherwise `len`
/// random numbers rendered as strings.
pub fn resolve_sequence(raw: Option<&str>, random: Option<usize>) -> Result<Vec<String>, Error> {
    match (raw, random) {
        (Some(raw), _) => Ok(parse_sequence(raw)),
        (None, Some(len)) => Ok(random_numbers(len).iter().map(|n| n.to_string()).collect()),
        (None, None) => Err(Error::MissingInput),
    }
}

/// Integer version of `resolve_sequence`.
pub fn resolve_numbers(raw: Option<&str>, random: Option<usize>) -> Result<Vec<i64>, Error> {
    match (raw, random) {
        (Some(raw), _) => parse_numbers(raw),
        (None, Some(len)) => Ok(random_numbers(len)),
        (None, None) => Err(Error::MissingInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("a, b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_sequence_empty_items() {
        assert!(parse_sequence("").is_empty());
        assert_eq!(parse_sequence(",x,, y ,"), vec!["x", "y"]);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers("1, -2,30").unwrap(), vec![1, -2, 30]);
        assert_eq!(parse_numbers("").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_parse_numbers_bad_item() {
        match parse_numbers("1,two,3") {
            Err(Error::InvalidNumber { item, .. }) => assert_eq!(item, "two"),
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = parse_numbers("x").unwrap_err();
        assert!(err.to_string().starts_with("\"x\" is not an integer"));
        assert_eq!(
            Error::MissingInput.to_string(),
            "expected a comma-separated list or --random <LEN>"
        );
        assert_eq!(Error::Overflow.to_string(), "sum does not fit in a 64-bit integer");
    }

    #[test]
    fn test_random_numbers() {
        let v = random_numbers(50);
        assert_eq!(v.len(), 50);
        assert!(v.iter().all(|&n| (0..RANDOM_VALUE_LIMIT).contains(&n)));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve_sequence(Some("a,b"), Some(9)).unwrap(), vec!["a", "b"]);
        assert_eq!(resolve_sequence(None, Some(4)).unwrap().len(), 4);
        assert!(matches!(resolve_sequence(None, None), Err(Error::MissingInput)));
        assert_eq!(resolve_numbers(None, Some(3)).unwrap().len(), 3);
        assert!(matches!(resolve_numbers(None, None), Err(Error::MissingInput)));
    }
}
