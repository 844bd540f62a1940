/// Returns the first space-separated parameter of `input` and the rest of the
/// string. The rest may itself contain spaces; a missing separator yields an
/// empty rest.
pub fn next_param(input: &str) -> (&str, &str) {
    match input.split_once(' ') {
        Some((param, rest)) => (param, rest),
        None => (input, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_space_only() {
        assert_eq!(next_param("STOR some file.txt"), ("STOR", "some file.txt"));
    }

    #[test]
    fn no_separator_means_empty_rest() {
        assert_eq!(next_param("QUIT"), ("QUIT", ""));
    }

    #[test]
    fn empty_input() {
        assert_eq!(next_param(""), ("", ""));
    }

    #[test]
    fn leading_space_yields_empty_param() {
        assert_eq!(next_param(" x"), ("", "x"));
    }
}
