// Text processing utilities

/// Escaping helpers for markup output
pub mod escape {
    /// Append `text` to `out`, escaping HTML-significant characters
    pub fn push_escaped(out: &mut String, text: &str) {
        for ch in text.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                _ => out.push(ch),
            }
        }
    }
}

/// String and text manipulation utilities
pub mod string {
    /// Shorten text for diagnostic output, appending an ellipsis when cut
    pub fn limit_string_length(text: &str, max_length: usize) -> String {
        if text.chars().count() < max_length {
            return text.to_string();
        }

        let keep = max_length.saturating_sub(3);
        let mut limited: String = text.chars().take(keep).collect();
        limited.push_str("...");
        limited
    }

    /// Split text into lines, accepting both `\n` and `\r\n` separators
    pub fn split_lines(text: &str) -> Vec<&str> {
        text.split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}
