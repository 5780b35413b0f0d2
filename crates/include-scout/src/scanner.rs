//! Lexical extraction of `#include` directives.
//!
//! This is deliberately not a preprocessor: a line counts when its first
//! non-whitespace character is `#` followed (after optional whitespace) by
//! `include`. Conditional blocks are not evaluated and macro-built includes
//! are skipped because they have no delimited path.

use crate::directive::IncludeDirective;
use crate::path::FilePath;
use crate::text::TextSource;

/// Extract the include directives of `including_file` from its lines.
///
/// Directives are returned in line order. Angle brackets are tried before
/// quotes; a line with neither (or an empty delimited path) is ignored.
pub fn scan_include_directives<I, S>(lines: I, including_file: &FilePath) -> Vec<IncludeDirective>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let (included, uses_angle_brackets) = parse_include_line(line.as_ref())?;
            Some(IncludeDirective::new(
                FilePath::from(included),
                including_file.clone(),
                index + 1,
                uses_angle_brackets,
            ))
        })
        .collect()
}

/// Read `path` through `source` and extract its include directives.
///
/// An unreadable file yields no directives.
pub fn include_directives(path: &FilePath, source: &dyn TextSource) -> Vec<IncludeDirective> {
    source
        .read_lines(path)
        .map(|lines| scan_include_directives(lines, path))
        .unwrap_or_default()
}

/// Returns the delimited path and whether it used angle brackets.
fn parse_include_line(line: &str) -> Option<(&str, bool)> {
    let after_hash = line.trim().strip_prefix('#')?.trim();
    if !after_hash.starts_with("include") {
        return None;
    }

    if let Some(path) = substr_between(after_hash, '<', '>').filter(|p| !p.is_empty()) {
        return Some((path, true));
    }
    substr_between(after_hash, '"', '"')
        .filter(|p| !p.is_empty())
        .map(|path| (path, false))
}

/// Text between the first `open` and the first `close` after it.
fn substr_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)? + open.len_utf8();
    let len = text[start..].find(close)?;
    Some(&text[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn includer() -> FilePath {
        FilePath::from("/proj/src/main.cpp")
    }

    #[rstest]
    #[case::angle("#include <vector>", Some(("vector", true)))]
    #[case::quoted("#include \"config.h\"", Some(("config.h", false)))]
    #[case::indented("   \t#include <a/b.h>", Some(("a/b.h", true)))]
    #[case::space_after_hash("#  include \"x.h\"", Some(("x.h", false)))]
    #[case::trailing_comment("#include \"x.h\" // see <y.h>", Some(("y.h", true)))]
    #[case::include_next("#include_next <stdlib.h>", Some(("stdlib.h", true)))]
    #[case::macro_include("#include HEADER_NAME", None)]
    #[case::empty_angle("#include <>", None)]
    #[case::empty_angle_then_quotes("#include <> \"q.h\"", Some(("q.h", false)))]
    #[case::unterminated("#include \"broken.h", None)]
    #[case::uppercase("#INCLUDE <vector>", None)]
    #[case::other_directive("#define X <y>", None)]
    #[case::not_leading_hash("int x; #include <vector>", None)]
    #[case::commented_out("// #include <vector>", None)]
    fn parses_single_lines(#[case] line: &str, #[case] expected: Option<(&str, bool)>) {
        assert_eq!(parse_include_line(line), expected);
    }

    #[test]
    fn directives_carry_line_numbers_and_includer() {
        let text = "#pragma once\n\n#include <vector>\nint x;\n#include \"local.h\"\n";

        let directives = scan_include_directives(text.lines(), &includer());

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].included_file, FilePath::from("vector"));
        assert_eq!(directives[0].line_number, 3);
        assert!(directives[0].uses_angle_brackets);
        assert_eq!(directives[1].included_file, FilePath::from("local.h"));
        assert_eq!(directives[1].line_number, 5);
        assert!(!directives[1].uses_angle_brackets);
        assert!(directives.iter().all(|d| d.including_file == includer()));
    }

    #[test]
    fn conditional_includes_are_all_reported() {
        let text = "#ifdef _WIN32\n#include <windows.h>\n#else\n#include <unistd.h>\n#endif\n";

        let directives = scan_include_directives(text.lines(), &includer());

        let names: Vec<String> = directives
            .iter()
            .map(|d| d.included_file.to_string_lossy())
            .collect();
        assert_eq!(names, vec!["windows.h", "unistd.h"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(scan_include_directives(Vec::<String>::new(), &includer()).is_empty());
    }

    #[test]
    fn unreadable_file_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FilePath::new(dir.path().join("missing.h"));

        assert!(include_directives(&missing, &crate::text::FileSystemSource).is_empty());
    }
}
