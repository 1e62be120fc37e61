//! Section parser. Splits the model's heading-delimited reply into display cards.
//!
//! A heading is any line whose trimmed form starts with `##` followed by
//! whitespace and some title text. Everything up to the next heading is that
//! section's body. Text before the first heading is carried into the first
//! section's body, and a reply with no headings at all becomes a single
//! generic "Analysis" card.

const HEADING_MARKER: &str = "##";

/// Ordered (title substring, glyph) pairs. The first key found in a title
/// (case-insensitive) wins, so order matters.
const SECTION_ICONS: &[(&str, &str)] = &[
    ("Key Strengths", "💪"),
    ("Skill Gaps", "🔍"),
    ("ATS Optimisation Suggestions", "🎯"),
    ("ATS Optimization Suggestions", "🎯"),
    ("Match Percentage", "📊"),
    ("Overall Summary", "📝"),
];

const DEFAULT_ICON: &str = "📌";
const FALLBACK_TITLE: &str = "Analysis";
const FALLBACK_ICON: &str = "📋";

/// One titled block of the analysis, rendered as an independent card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSection {
    pub title: String,
    pub icon: &'static str,
    pub body: String,
}

impl AnalysisSection {
    fn build(title: String, body_lines: &[&str]) -> Self {
        let icon = icon_for_title(&title);
        Self {
            title,
            icon,
            body: body_lines.join("\n").trim().to_string(),
        }
    }
}

/// Parses raw model output into ordered sections. Never fails and never
/// returns an empty list.
pub fn parse_analysis_sections(raw_text: &str) -> Vec<AnalysisSection> {
    let mut sections = Vec::new();
    let mut current_title: Option<String> = None;
    let mut body_lines: Vec<&str> = Vec::new();

    for line in raw_text.split('\n') {
        match heading_title(line) {
            Some(title) => {
                if let Some(previous) = current_title.replace(title) {
                    sections.push(AnalysisSection::build(previous, &body_lines));
                    body_lines.clear();
                }
            }
            None => body_lines.push(line),
        }
    }

    if let Some(title) = current_title {
        sections.push(AnalysisSection::build(title, &body_lines));
    }

    if sections.is_empty() {
        sections.push(AnalysisSection {
            title: FALLBACK_TITLE.to_string(),
            icon: FALLBACK_ICON,
            body: raw_text.trim().to_string(),
        });
    }

    sections
}

/// Returns the cleaned heading text if `line` is a section heading.
///
/// Trailing `#` characters echoed back by the model are stripped. A marker
/// with nothing left after cleaning (`## ##`) is not a heading.
fn heading_title(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(HEADING_MARKER)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let title = rest.trim().trim_end_matches('#').trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Glyph for the first icon-table key contained in `title`, case-insensitively.
///
/// Plain substring matching: "Overall Summary of Key Strengths" resolves to
/// the Key Strengths glyph because that key is checked first.
pub fn icon_for_title(title: &str) -> &'static str {
    let title = title.to_lowercase();
    SECTION_ICONS
        .iter()
        .find(|(key, _)| title.contains(&key.to_lowercase()))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "\
## Key Strengths
- Led a team of 5 engineers
- Shipped 3 products

## Skill Gaps
- No Kubernetes experience

## ATS Optimisation Suggestions
- Add a skills section

## Match Percentage
72%, strong backend match.

## Overall Summary
Solid mid-level profile.
";

    #[test]
    fn test_two_sections_example() {
        let sections = parse_analysis_sections(
            "## Key Strengths\nGood communicator\n\n## Skill Gaps\nNo cloud experience\n",
        );
        assert_eq!(
            sections,
            vec![
                AnalysisSection {
                    title: "Key Strengths".into(),
                    icon: "💪",
                    body: "Good communicator".into(),
                },
                AnalysisSection {
                    title: "Skill Gaps".into(),
                    icon: "🔍",
                    body: "No cloud experience".into(),
                },
            ]
        );
    }

    #[test]
    fn test_free_text_falls_back_to_single_section() {
        let sections = parse_analysis_sections("Just some free text with no headings.");
        assert_eq!(
            sections,
            vec![AnalysisSection {
                title: "Analysis".into(),
                icon: "📋",
                body: "Just some free text with no headings.".into(),
            }]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_fallback() {
        let sections = parse_analysis_sections("");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Analysis");
        assert_eq!(sections[0].icon, "📋");
        assert_eq!(sections[0].body, "");
    }

    #[test]
    fn test_fallback_body_is_trimmed_raw_text() {
        let raw = "\n\n  Line one\n\n# Not a heading\n### Nor this\n  ";
        let sections = parse_analysis_sections(raw);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, raw.trim());
    }

    #[test]
    fn test_never_returns_empty() {
        for input in ["", " ", "\n", "##", "## ", "##\t", "###", "#", "## ##", "text"] {
            assert!(
                !parse_analysis_sections(input).is_empty(),
                "empty result for {input:?}"
            );
        }
    }

    #[test]
    fn test_section_count_matches_heading_count() {
        let sections = parse_analysis_sections(FULL_REPLY);
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_order_preserved() {
        let titles: Vec<_> = parse_analysis_sections(FULL_REPLY)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            [
                "Key Strengths",
                "Skill Gaps",
                "ATS Optimisation Suggestions",
                "Match Percentage",
                "Overall Summary",
            ]
        );

        let reversed = parse_analysis_sections("## Zeta\nz\n## Alpha\na");
        assert_eq!(reversed[0].title, "Zeta");
        assert_eq!(reversed[1].title, "Alpha");
    }

    #[test]
    fn test_icons_for_full_reply() {
        let icons: Vec<_> = parse_analysis_sections(FULL_REPLY)
            .into_iter()
            .map(|s| s.icon)
            .collect();
        assert_eq!(icons, ["💪", "🔍", "🎯", "📊", "📝"]);
    }

    #[test]
    fn test_body_keeps_interior_blank_lines() {
        let sections =
            parse_analysis_sections("## Key Strengths\n\n  first\n\n\n  second  \n\n## Skill Gaps");
        assert_eq!(sections[0].body, "first\n\n\n  second");
        assert_eq!(sections[1].body, "");
    }

    #[test]
    fn test_body_lines_are_not_modified() {
        let sections = parse_analysis_sections("## Notes\n- a  \n\t- b\n**bold**");
        assert_eq!(sections[0].body, "- a  \n\t- b\n**bold**");
    }

    #[test]
    fn test_preamble_before_first_heading_joins_first_body() {
        let sections = parse_analysis_sections("Here is your analysis:\n\n## Skill Gaps\nDocker");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Skill Gaps");
        assert_eq!(sections[0].body, "Here is your analysis:\n\nDocker");
    }

    #[test]
    fn test_heading_detected_after_trimming() {
        let sections = parse_analysis_sections("   ##   Key Strengths   \r\nRust\r");
        assert_eq!(sections[0].title, "Key Strengths");
        assert_eq!(sections[0].body, "Rust");
    }

    #[test]
    fn test_trailing_hashes_are_stripped() {
        let sections = parse_analysis_sections("## Overall Summary ##\nFine");
        assert_eq!(sections[0].title, "Overall Summary");
        assert_eq!(sections[0].icon, "📝");
    }

    #[test]
    fn test_marker_needs_whitespace() {
        let sections = parse_analysis_sections("##Key Strengths\n### Sub heading\ntext");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Analysis");
    }

    #[test]
    fn test_tab_after_marker_is_heading() {
        let sections = parse_analysis_sections("##\tSkill Gaps\nGo");
        assert_eq!(sections[0].title, "Skill Gaps");
    }

    #[test]
    fn test_marker_with_only_hashes_is_body() {
        let sections = parse_analysis_sections("## Key Strengths\n## ##\nmore");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "## ##\nmore");
    }

    #[test]
    fn test_unknown_heading_gets_default_icon() {
        let sections = parse_analysis_sections("## Interview Tips\nPractice");
        assert_eq!(sections[0].icon, "📌");
    }

    #[test]
    fn test_icon_lookup_is_case_insensitive_substring() {
        assert_eq!(icon_for_title("KEY STRENGTHS"), "💪");
        assert_eq!(icon_for_title("1. Skill gaps (vs. JD)"), "🔍");
        assert_eq!(icon_for_title("Estimated match percentage"), "📊");
    }

    #[test]
    fn test_us_and_uk_spelling_share_icon() {
        assert_eq!(
            icon_for_title("ATS Optimization Suggestions"),
            icon_for_title("ATS Optimisation Suggestions")
        );
        assert_eq!(icon_for_title("ATS Optimization Suggestions"), "🎯");
    }

    #[test]
    fn test_first_matching_key_wins() {
        let title = "Overall Summary of Key Strengths";
        for _ in 0..10 {
            assert_eq!(icon_for_title(title), "💪");
        }
        assert_eq!(icon_for_title("Match Percentage and Skill Gaps"), "🔍");
    }
}
