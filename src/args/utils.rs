//! Shared helpers for the command-line handlers.

/// What: Normalize id arguments into a flat list.
///
/// Inputs:
/// - `args`: Raw argument values, possibly comma-separated or space-joined.
///
/// Output:
/// - One id per element, trimmed, empties dropped.
#[must_use]
pub fn parse_app_ids(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|a| a.split([',', ' ']))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// What: Ask the user a yes/no question with No as the default.
///
/// Inputs:
/// - `message`: Prompt text shown before `[y/N]`.
///
/// Output:
/// - `true` only for an explicit `y`/`yes` answer; `false` for anything
///   else, including empty input and read errors.
#[must_use]
pub fn prompt_user_no_default(message: &str) -> bool {
    use std::io::{self, Write};

    print!("{message} [y/N]: ");
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_ok() {
        let trimmed = input.trim();
        trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes")
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn utils_parse_app_ids_handles_commas_and_spaces() {
        let args = vec![
            "app.one.A,app.two.B".to_string(),
            " app.three.C ".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            super::parse_app_ids(&args),
            vec!["app.one.A", "app.two.B", "app.three.C"]
        );
    }
}
