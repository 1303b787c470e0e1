use regex::Regex;

/// Returned when a reply contains no fenced code block, and by the repair
/// loop when the retry budget runs out.
///
/// Note: a reply whose fenced code happens to equal this string is
/// indistinguishable from the no-code case. That ambiguity is inherited and
/// deliberately left as is.
pub const NO_SOLUTION: &str = "I couldn't find a solution for this problem.";

/// Pull the first fenced code block out of a model reply.
///
/// Tolerates an optional `python` language tag on the opening fence and
/// returns the enclosed text verbatim. Replies without any fenced block map
/// to [`NO_SOLUTION`]; this never fails.
pub fn extract_script(reply: &str) -> String {
    let pattern = Regex::new(r"```(\s*(python)\s*\n)?([\s\S]*?)```").unwrap();

    match pattern.captures(reply) {
        Some(caps) => caps.get(3).map_or(String::new(), |m| m.as_str().to_string()),
        None => NO_SOLUTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_tagged_fence() {
        let reply = "Here you go:\n```python\nx = 1\n```\nHope that helps!";
        assert_eq!(extract_script(reply), "x = 1\n");
    }

    #[test]
    fn test_untagged_fence_keeps_enclosed_text_verbatim() {
        // Without a language tag the leading newline belongs to the block.
        let reply = "```\nimport polars as pl\n```";
        assert_eq!(extract_script(reply), "\nimport polars as pl\n");
    }

    #[test]
    fn test_first_block_wins() {
        let reply = "```python\nfirst\n```\nand then\n```python\nsecond\n```";
        assert_eq!(extract_script(reply), "first\n");
    }

    #[test]
    fn test_fence_markers_and_tag_are_excluded() {
        let reply = "```python\ndef f():\n    return 1\n```";
        let code = extract_script(reply);
        assert!(!code.contains("```"));
        assert!(!code.contains("python"));
        assert_eq!(code, "def f():\n    return 1\n");
    }

    #[test]
    fn test_no_fence_returns_sentinel() {
        assert_eq!(extract_script("Sorry, I cannot help."), NO_SOLUTION);
        assert_eq!(extract_script(""), NO_SOLUTION);
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(extract_script("``````"), "");
    }
}
