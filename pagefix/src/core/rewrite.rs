//! Literal-text rewrites that repair duplicated and mismatched wrapper tags.
//!
//! The rules match markup as plain text. They never parse the page, so they
//! only fire on the exact shapes produced by the page generator: tags separated
//! by whitespace that includes a line break.

use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::debug;

/// Wrapper element used by the generated pages.
pub const DEFAULT_WRAPPER_TAG: &str = "LayoutWrapper";

/// Check that `tag` is a bare element name: ASCII letters, digits, `_`, `.`
/// or `-`. Anything else could leak markup into the pattern or `$` group
/// references into the replacement.
pub fn validate_wrapper_tag(tag: &str) -> Result<()> {
    if tag.is_empty()
        || !tag
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-'))
    {
        bail!("wrapper_tag must be a non-empty tag name (ASCII letters, digits, '_', '.', '-')");
    }
    Ok(())
}

/// A single named regex substitution.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern =
            Regex::new(pattern).with_context(|| format!("compile rewrite rule {name}"))?;
        Ok(Self {
            name,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Apply the rule to `content`.
    ///
    /// Returns `None` when the pattern does not match anywhere.
    pub fn rewrite(&self, content: &str) -> Option<String> {
        match self
            .pattern
            .replace_all(content, self.replacement.as_str())
        {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        }
    }
}

/// Ordered rule set for one wrapper tag.
#[derive(Debug, Clone)]
pub struct Rewriter {
    rules: Vec<RewriteRule>,
}

impl Rewriter {
    /// Build the two repair rules for `tag`.
    ///
    /// Fails if `tag` is not a bare element name (see [`validate_wrapper_tag`]).
    ///
    /// 1. A run of `<tag>` openings separated only by whitespace containing a
    ///    newline collapses into the first one.
    /// 2. `</main>` followed by `</div>` and the `);` closing the JSX return
    ///    gets `</tag>` in place of the `</div>`.
    pub fn for_wrapper(tag: &str) -> Result<Self> {
        validate_wrapper_tag(tag)?;
        let open = regex::escape(&format!("<{tag}>"));
        let collapse = RewriteRule::new(
            "collapse-duplicate-wrapper",
            &format!(r"({open})(?:\s*\n\s*{open})+"),
            "${1}",
        )?;
        let repair = RewriteRule::new(
            "repair-closing-tag",
            r"(</main>)\s*\n\s*</div>(\s*\n\s*\);)",
            format!("${{1}}\n    </{tag}>${{2}}"),
        )?;
        Ok(Self {
            rules: vec![collapse, repair],
        })
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Run every rule in order; each rule sees the previous rule's output.
    ///
    /// Content that matches no rule comes back unchanged.
    pub fn transform(&self, content: &str) -> String {
        let mut text = content.to_string();
        for rule in &self.rules {
            if let Some(rewritten) = rule.rewrite(&text) {
                debug!(rule = rule.name, "rewrite rule matched");
                text = rewritten;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{BROKEN_PAGE, FIXED_PAGE};

    fn rewriter() -> Rewriter {
        Rewriter::for_wrapper(DEFAULT_WRAPPER_TAG).expect("rewriter")
    }

    #[test]
    fn collapses_duplicate_opening_wrapper() {
        let input = "  return (\n    <LayoutWrapper>\n  <LayoutWrapper>\n      <main>";
        let output = rewriter().transform(input);
        assert_eq!(output, "  return (\n    <LayoutWrapper>\n      <main>");
        assert_eq!(output.matches("<LayoutWrapper>").count(), 1);
    }

    #[test]
    fn collapses_runs_of_more_than_two_wrappers() {
        let input = "<LayoutWrapper>\n<LayoutWrapper>\n  <LayoutWrapper>\n<main>";
        assert_eq!(rewriter().transform(input), "<LayoutWrapper>\n<main>");
    }

    #[test]
    fn keeps_wrappers_on_the_same_line() {
        let input = "<LayoutWrapper> <LayoutWrapper>";
        assert_eq!(rewriter().transform(input), input);
    }

    #[test]
    fn repairs_mismatched_closing_tag() {
        let input = "        </main>\n    </div>\n  );\n}\n";
        assert_eq!(
            rewriter().transform(input),
            "        </main>\n    </LayoutWrapper>\n  );\n}\n"
        );
    }

    #[test]
    fn leaves_closing_div_without_statement_end() {
        let input = "      </main>\n    </div>\n    <footer />";
        assert_eq!(rewriter().transform(input), input);
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let input = "<LayoutWrapper>\r\n  <LayoutWrapper>\r\n";
        assert_eq!(rewriter().transform(input), "<LayoutWrapper>\r\n");
    }

    #[test]
    fn fixes_generated_page() {
        assert_eq!(rewriter().transform(BROKEN_PAGE), FIXED_PAGE);
    }

    #[test]
    fn non_matching_content_is_identity() {
        let rewriter = rewriter();
        assert_eq!(rewriter.transform(FIXED_PAGE), FIXED_PAGE);
        assert_eq!(rewriter.transform(""), "");
        for rule in rewriter.rules() {
            assert!(rule.rewrite(FIXED_PAGE).is_none(), "{} matched", rule.name);
        }
    }

    #[test]
    fn transform_is_idempotent() {
        let rewriter = rewriter();
        let samples = [
            BROKEN_PAGE,
            FIXED_PAGE,
            "<LayoutWrapper>\n<LayoutWrapper>\n<LayoutWrapper>\n",
            "</main>\n</div>\n);</main>\n  </div>\n  );",
            "<LayoutWrapper>\n  <LayoutWrapper></main>\n</div>\n);",
        ];
        for sample in samples {
            let once = rewriter.transform(sample);
            assert_eq!(rewriter.transform(&once), once, "sample: {sample:?}");
        }
    }

    #[test]
    fn custom_wrapper_tag() {
        let rewriter = Rewriter::for_wrapper("AppShell").expect("rewriter");
        let input = "<AppShell>\n  <AppShell>\n  </main>\n  </div>\n);";
        assert_eq!(
            rewriter.transform(input),
            "<AppShell>\n  </main>\n    </AppShell>\n);"
        );
    }

    #[test]
    fn rejects_tags_that_are_not_element_names() {
        for tag in ["", "$1", "Layout>", "Layout Wrapper", "${2}"] {
            assert!(Rewriter::for_wrapper(tag).is_err(), "accepted {tag:?}");
        }
    }
}
