//! Highlight rendering for corrected mistakes.
//!
//! The highlighted output stream keeps the *original* (incorrect) text
//! visible and carries the expected correction in the markup: each mistake
//! is wrapped in a span whose `title` attribute holds the human-readable
//! expectation. Callers that need the fix itself read the corrected stream
//! or the structured [`Mistake`] list instead of parsing markup.

use serde::{Deserialize, Serialize};

/// Configuration of the highlight markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// CSS class placed on the mistake span.
    pub class_name: String,
    /// Label prefixed to the expected correction in the tooltip.
    pub tooltip_label: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        HighlightStyle {
            class_name: "mistake".to_string(),
            tooltip_label: "Мало бути:".to_string(),
        }
    }
}

impl HighlightStyle {
    /// Wrap an incorrect word base in the mistake span.
    ///
    /// `found` is rendered as the visible content; `expected` only appears
    /// in the tooltip.
    pub fn wrap(&self, found: &str, expected: &str) -> String {
        format!(
            r#"<span class="{}" title="{} {}">{}</span>"#,
            self.class_name, self.tooltip_label, expected, found
        )
    }
}

/// One detected mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    /// Token position of the mistake in the token stream.
    pub position: usize,
    /// The word base as written.
    pub found: String,
    /// The word base as it should have been written.
    pub expected: String,
}

/// Wrap highlighted markup into a standalone styled HTML fragment.
///
/// Inlines the span styling so the fragment renders without an external
/// stylesheet, with a subtle pulse animation on the mistakes.
pub fn styled_page(highlighted: &str, style: &HighlightStyle) -> String {
    let styled = highlighted.replace(
        &format!(r#"<span class="{}""#, style.class_name),
        "<span style=\"background:#ffebee;color:#c62828;\
         border-bottom:2px dashed #ef9a9a;padding:0 4px 1px;\
         border-radius:4px;font-weight:500;cursor:help;display:inline;\
         animation:pulse 1.8s infinite;\"",
    );

    format!(
        "<style>\n\
         @keyframes pulse {{\n\
         0%, 100% {{ background-color: #ffebee; }}\n\
         50% {{ background-color: #ffd5d5; }}\n\
         }}\n\
         </style>\n\
         {styled}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_span_format() {
        let style = HighlightStyle::default();
        assert_eq!(
            style.wrap("вдачу", "удачу"),
            r#"<span class="mistake" title="Мало бути: удачу">вдачу</span>"#
        );
    }

    #[test]
    fn test_custom_style() {
        let style = HighlightStyle {
            class_name: "uv-error".to_string(),
            tooltip_label: "Очікувалося:".to_string(),
        };
        assert_eq!(
            style.wrap("в", "у"),
            r#"<span class="uv-error" title="Очікувалося: у">в</span>"#
        );
    }

    #[test]
    fn test_styled_page_inlines_style() {
        let style = HighlightStyle::default();
        let markup = style.wrap("в", "у");
        let page = styled_page(&markup, &style);
        assert!(page.contains("@keyframes pulse"));
        assert!(page.contains("animation:pulse"));
        assert!(!page.contains(r#"class="mistake""#));
        assert!(page.contains(">в</span>"));
    }

    #[test]
    fn test_mistake_serialization() {
        let mistake = Mistake {
            position: 2,
            found: "в".to_string(),
            expected: "у".to_string(),
        };
        let json = serde_json::to_string(&mistake).unwrap();
        let back: Mistake = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mistake);
    }
}
