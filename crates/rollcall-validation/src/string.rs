//! String validation functions

/// True when nothing but whitespace remains
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Every value must contain something other than whitespace
pub fn all_present(values: &[&str]) -> bool {
    values.iter().all(|v| !is_blank(v))
}

/// Characters that end a line: `\n`, `\r`, NEL, LINE SEPARATOR and
/// PARAGRAPH SEPARATOR
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// No line terminators and no control characters
pub fn is_single_line(s: &str) -> bool {
    !s.chars().any(|c| c.is_control() || is_line_terminator(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" Ada "));
    }

    #[test]
    fn test_all_present() {
        assert!(all_present(&["Ada", "Lovelace"]));
        assert!(!all_present(&["Ada", " "]));
        assert!(!all_present(&["", "Lovelace"]));
        assert!(all_present(&[]));
    }

    #[test]
    fn test_line_terminators() {
        for c in ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'] {
            assert!(is_line_terminator(c), "{:?}", c);
        }
        assert!(!is_line_terminator('\t'));
        assert!(!is_line_terminator('a'));
    }

    #[test]
    fn test_single_line() {
        assert!(is_single_line("Ada Lovelace"));
        assert!(is_single_line("Zoë O'Brien-Smith"));
        assert!(is_single_line(""));
        assert!(!is_single_line("Ada\n2099-99999 | Forged"));
        assert!(!is_single_line("Ada\r"));
        assert!(!is_single_line("Ada\u{2028}Lovelace"));
        assert!(!is_single_line("A\tda"));
        assert!(!is_single_line("Ada\u{1b}[31m"));
    }
}
