//! Terminal color support detection.

use std::ffi::OsStr;

/// Environment variables whose presence signals a terminal that
/// understands extended color escapes.
pub const EXTENDED_COLOR_VARS: [&str; 8] = [
    "ANSICON",
    "COLORTERM",
    "ConEmuANSI",
    "PYCHARM_HOSTED",
    "TERM",
    "TERMINAL_EMULATOR",
    "TERM_PROGRAM",
    "WT_SESSION",
];

/// Whether the current process's terminal supports extended colors.
///
/// Any of [`EXTENDED_COLOR_VARS`] being set is enough. Without them,
/// non-Windows platforms are assumed capable and Windows consoles are not.
pub fn terminal_supports_extended_colors() -> bool {
    let supported = supports_extended_colors_in(std::env::vars_os().map(|(k, _)| k));
    log::debug!("terminal extended color support: {supported}");
    supported
}

/// Same as [`terminal_supports_extended_colors`] over an explicit set of
/// variable names.
///
/// ```
/// use chromastr_config::detect::supports_extended_colors_in;
/// assert!(supports_extended_colors_in(["COLORTERM"]));
/// ```
pub fn supports_extended_colors_in<I, K>(names: I) -> bool
where
    I: IntoIterator<Item = K>,
    K: AsRef<OsStr>,
{
    let present = names
        .into_iter()
        .any(|name| EXTENDED_COLOR_VARS.iter().any(|v| OsStr::new(v) == name.as_ref()));
    present || !cfg!(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variables() {
        for var in EXTENDED_COLOR_VARS {
            assert!(supports_extended_colors_in([var]));
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let result = supports_extended_colors_in(["colorterm", "PATH"]);
        assert_eq!(result, !cfg!(windows));
    }

    #[test]
    fn test_empty_environment() {
        let none: [&str; 0] = [];
        assert_eq!(supports_extended_colors_in(none), !cfg!(windows));
    }
}
