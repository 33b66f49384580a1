/// Greedy word wrap; words longer than `width` occupy a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    match max_chars {
        0 => String::new(),
        n => s.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}

/// Formats a position with fixed precision.
pub fn format_vec3(v: [f64; 3], precision: usize) -> String {
    format!(
        "({:.p$}, {:.p$}, {:.p$})",
        v[0],
        v[1],
        v[2],
        p = precision
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap("unknown element", 40), vec!["unknown element"]);
    }

    #[test]
    fn wrap_breaks_at_width() {
        assert_eq!(
            wrap("input truncated after line three", 16),
            vec!["input truncated", "after line three"]
        );
    }

    #[test]
    fn wrap_empty_yields_single_blank_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_text() {
        assert_eq!(truncate("water", 5), "water");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("benzene dimer", 8), "benzene…");
        assert_eq!(truncate("Å-scale", 1), "…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn format_vec3_uses_precision() {
        assert_eq!(format_vec3([0.0, 1.25, -2.5], 2), "(0.00, 1.25, -2.50)");
    }
}
