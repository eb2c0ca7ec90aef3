use crate::search::models::SearchResult;

const SNIPPET_PREVIEW_CHARS: usize = 150;

/// Format a search result for plain-text output
pub fn format_search_result(result: &SearchResult, use_color: bool, full_text: bool) -> String {
    use colored::Colorize;

    let snippet = if full_text {
        result.snippet.clone()
    } else {
        format_preview(&result.snippet, SNIPPET_PREVIEW_CHARS)
    };

    let tags = if result.tags().is_empty() {
        String::new()
    } else {
        format!(" [{}]", result.tags().join(", "))
    };

    if use_color {
        format!(
            "{}{}\n  {}\n  {}",
            result.title.bright_green().bold(),
            tags.bright_yellow(),
            result.url.bright_blue(),
            snippet
        )
    } else {
        format!("{}{}\n  {}\n  {}", result.title, tags, result.url, snippet)
    }
}

fn format_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_format_includes_all_fields() {
        let result = SearchResult::new(
            "Kali Linux Official Documentation",
            "https://kali.org/docs/",
            "Kali Linux is a Debian-derived distribution.",
            &["kali linux", "security tools"],
        );

        let output = format_search_result(&result, false, false);
        assert_eq!(
            output,
            "Kali Linux Official Documentation [kali linux, security tools]\n  https://kali.org/docs/\n  Kali Linux is a Debian-derived distribution."
        );
    }

    #[test]
    fn test_long_snippet_is_truncated_unless_full_text() {
        let snippet = "word ".repeat(60);
        let result = SearchResult::new("t", "#", snippet.clone(), &[]);

        let short = format_search_result(&result, false, false);
        assert!(short.ends_with("..."));
        assert!(short.len() < snippet.len());

        let full = format_search_result(&result, false, true);
        assert!(full.ends_with(&snippet));
    }

    #[test]
    fn test_multibyte_snippet_truncation() {
        let snippet = "検索".repeat(100);
        let preview = format_preview(&snippet, 10);
        assert_eq!(preview.chars().count(), 13);
    }
}
