/// Directive prefixes of the milestone dialect, matched case-insensitively.
pub struct Directive;

impl Directive {
    pub const CATEGORY: &'static str = "# category :";
    pub const HEADING: &'static str = "## ";
    pub const TIME_PERIOD: &'static str = "- time period :";
    pub const BULLET_SECTION: &'static str = "- bullet points";
    pub const ICON: &'static str = "- icon :";
    pub const LOGO: &'static str = "- logo :";
    pub const ITEM: &'static str = "- ";
    /// Leading spaces per nesting level of a bullet.
    pub const INDENT_WIDTH: usize = 2;
}

/// Classification of a single source line containing only local facts.
///
/// Lines are classified independently; whether a [`LineClass::Item`] is a
/// bullet point depends on builder state and is decided there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `# Category : <name>`
    Category(&'a str),
    /// `## <title>`
    Heading(&'a str),
    /// `- Time period : <value>`, cut at the second colon.
    TimePeriod(&'a str),
    /// `- Bullet points`
    BulletSection,
    /// `- icon : <value>`
    Icon(&'a str),
    /// `- Logo : <value>`, everything after the first colon.
    Logo(&'a str),
    /// Any other `- ` line.
    Item { text: &'a str, level: usize },
    /// Blank lines, prose, deeper headings, anything unrecognised.
    Other,
}

/// Classifies lines of a milestone document.
pub struct MilestoneLineClassifier;

impl MilestoneLineClassifier {
    /// Classifies one raw line (without its line terminator).
    ///
    /// Checks run in a fixed priority order: category, heading, time period,
    /// bullet section, icon, logo, item.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if starts_with_ignore_case(trimmed, Directive::CATEGORY) {
            return LineClass::Category(second_segment(trimmed));
        }

        if let Some(title) = trimmed.strip_prefix(Directive::HEADING) {
            return LineClass::Heading(title.trim());
        }

        if starts_with_ignore_case(trimmed, Directive::TIME_PERIOD) {
            return LineClass::TimePeriod(second_segment(trimmed));
        }

        if trimmed.eq_ignore_ascii_case(Directive::BULLET_SECTION) {
            return LineClass::BulletSection;
        }

        if starts_with_ignore_case(trimmed, Directive::ICON) {
            return LineClass::Icon(second_segment(trimmed));
        }

        if starts_with_ignore_case(trimmed, Directive::LOGO) {
            return LineClass::Logo(after_first_colon(trimmed));
        }

        if let Some(text) = trimmed.strip_prefix(Directive::ITEM) {
            return LineClass::Item {
                text: text.trim(),
                level: leading_whitespace(line) / Directive::INDENT_WIDTH,
            };
        }

        LineClass::Other
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// The text between the first and second colon, trimmed.
fn second_segment(s: &str) -> &str {
    s.split(':').nth(1).unwrap_or_default().trim()
}

/// Everything after the first colon, trimmed. Later colons survive.
fn after_first_colon(s: &str) -> &str {
    s.split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default()
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
