use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::filter::CategoryFilter;
use crate::i18n::{Language, Translations};
use crate::io::LoadError;
use crate::models::Milestone;
use crate::outline::{ListNode, build_nested_list};
use crate::parsing::inline::render_links;

/// Everything the page needs besides the milestones themselves.
pub struct PageContext<'a> {
    pub language: Language,
    pub translations: &'a Translations,
    /// File name pattern for sibling language pages; `{lang}` is replaced by the code.
    /// `None` for a standalone page, which gets no language toggle.
    pub page_pattern: Option<&'a str>,
}

impl<'a> PageContext<'a> {
    pub fn new(language: Language, translations: &'a Translations) -> Self {
        Self {
            language,
            translations,
            page_pattern: Some(DEFAULT_PAGE_PATTERN),
        }
    }

    /// A page written on its own, without sibling pages to link to.
    pub fn standalone(language: Language, translations: &'a Translations) -> Self {
        Self {
            page_pattern: None,
            ..Self::new(language, translations)
        }
    }

    fn t(&self, key: &'a str) -> &'a str {
        self.translations.translate(self.language, key)
    }

}

pub const DEFAULT_PAGE_PATTERN: &str = "index.{lang}.html";

const STYLES: &str = r#"
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 860px; padding: 24px; color: #1f2933; }
header { display: flex; justify-content: space-between; align-items: center; }
.language-toggle a, .filter-btn { margin-right: 6px; padding: 4px 10px; border: 1px solid #d0d7de; border-radius: 14px; background: #fff; color: inherit; text-decoration: none; cursor: pointer; }
.language-toggle a.active, .filter-btn.active { background: #1f2933; color: #fff; }
.timeline { position: relative; margin-top: 24px; border-left: 2px solid #d0d7de; }
.milestone { position: relative; margin: 0 0 24px 24px; }
.milestone.hidden { display: none; }
.milestone-marker { position: absolute; left: -31px; top: 6px; width: 12px; height: 12px; border-radius: 50%; background: #3b82f6; }
.milestone-time { color: #52606d; font-size: 0.9rem; }
.milestone-title { margin: 4px 0 8px; }
.milestone-logo { max-height: 48px; margin-top: 8px; }
"#;

const FILTER_SCRIPT: &str = r#"
document.querySelectorAll('.filter-btn').forEach(button => {
  button.addEventListener('click', () => {
    document.querySelectorAll('.filter-btn').forEach(btn => btn.classList.remove('active'));
    button.classList.add('active');
    const filter = button.getAttribute('data-filter');
    document.querySelectorAll('.milestone').forEach(milestone => {
      const visible = filter === 'all' || milestone.getAttribute('data-category') === filter;
      milestone.classList.toggle('hidden', !visible);
    });
  });
});
"#;

/// Renders a complete page: language toggle, filter buttons and timeline.
///
/// A load failure replaces the timeline with the static error message.
pub fn render_page(timeline: Result<&[Milestone], &LoadError>, ctx: &PageContext<'_>) -> String {
    let lang = ctx.language.code();
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{lang}\">\n"));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{}</title>\n",
        encode_text(ctx.t("timeline.title"))
    ));
    out.push_str(&format!("<style>{STYLES}</style>\n</head>\n<body>\n"));

    out.push_str("<header>\n");
    out.push_str(&render_language_toggle(ctx));
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(ctx.t("timeline.title"))));
    out.push_str("</header>\n");

    let milestones = timeline.unwrap_or(&[]);
    out.push_str(&render_filter_buttons(milestones, ctx));

    out.push_str("<div id=\"timeline\" class=\"timeline\">\n");
    match timeline {
        Ok([]) => out.push_str(&format!(
            "<p class=\"timeline-empty\">{}</p>\n",
            encode_text(ctx.t("timeline.empty"))
        )),
        Ok(milestones) => out.push_str(&render_timeline(milestones)),
        Err(_) => out.push_str(&format!(
            "<p style=\"text-align: center; color: #e74c3c;\">{}</p>\n",
            encode_text(ctx.t("timeline.error"))
        )),
    }
    out.push_str("</div>\n");

    out.push_str(&format!("<script>{FILTER_SCRIPT}</script>\n"));
    out.push_str("</body>\n</html>\n");
    out
}

fn render_language_toggle(ctx: &PageContext<'_>) -> String {
    let Some(pattern) = ctx.page_pattern else {
        return String::new();
    };
    let mut out = String::from("<div class=\"language-toggle\">\n");
    for language in Language::ALL {
        let active = if language == ctx.language { " active" } else { "" };
        out.push_str(&format!(
            "<a class=\"lang-btn{active}\" data-lang=\"{code}\" href=\"{href}\">{label}</a>\n",
            code = language.code(),
            href = encode_double_quoted_attribute(&pattern.replace("{lang}", language.code())),
            label = language.code().to_uppercase(),
        ));
    }
    out.push_str("</div>\n");
    out
}

fn render_filter_buttons(milestones: &[Milestone], ctx: &PageContext<'_>) -> String {
    let mut out = String::from("<nav class=\"filters\">\n");
    for filter in CategoryFilter::available(milestones) {
        let active = if filter == CategoryFilter::All { " active" } else { "" };
        let key = filter.label_key();
        out.push_str(&format!(
            "<button class=\"filter-btn{active}\" data-filter=\"{value}\">{label}</button>\n",
            value = encode_double_quoted_attribute(&filter.to_string()),
            label = encode_text(ctx.translations.translate(ctx.language, &key)),
        ));
    }
    out.push_str("</nav>\n");
    out
}

/// Renders milestones in the order given.
pub fn render_timeline(milestones: &[Milestone]) -> String {
    milestones.iter().map(render_milestone).collect()
}

/// Renders one milestone block.
///
/// Title and bullets go through the link renderer and keep authored markup;
/// every other field is escaped.
pub fn render_milestone(milestone: &Milestone) -> String {
    let mut out = String::new();

    match milestone.category.as_deref() {
        Some(category) => {
            let category = encode_double_quoted_attribute(category);
            out.push_str(&format!(
                "<div class=\"milestone {category}\" data-category=\"{category}\">\n"
            ));
        }
        None => out.push_str("<div class=\"milestone\">\n"),
    }
    out.push_str("  <div class=\"milestone-marker\"></div>\n");
    out.push_str("  <div class=\"milestone-content\">\n");
    out.push_str(&format!(
        "    <div class=\"milestone-time\">{}</div>\n",
        encode_text(&milestone.time_period)
    ));

    let title = render_links(&milestone.title);
    match milestone.display_icon() {
        Some(icon) => out.push_str(&format!(
            "    <h3 class=\"milestone-title\">{} {title}</h3>\n",
            encode_text(icon)
        )),
        None => out.push_str(&format!("    <h3 class=\"milestone-title\">{title}</h3>\n")),
    }

    if !milestone.bullet_points.is_empty() {
        out.push_str("    <ul class=\"milestone-details\">\n");
        for node in build_nested_list(&milestone.bullet_points) {
            out.push_str(&format!("      {}\n", render_list_item(&node)));
        }
        out.push_str("    </ul>\n");
    }

    if let Some(logo) = &milestone.logo {
        out.push_str(&format!(
            "    <img class=\"milestone-logo\" src=\"{}\" alt=\"Logo\" onerror=\"this.style.display='none'\">\n",
            encode_double_quoted_attribute(logo)
        ));
    }

    out.push_str("  </div>\n</div>\n");
    out
}

/// `<li>` for a node, with a nested `<ul>` when it has children.
pub fn render_list_item(node: &ListNode) -> String {
    let mut out = format!("<li>{}", render_links(&node.text));
    if node.has_children() {
        out.push_str("<ul>");
        for child in &node.children {
            out.push_str(&render_list_item(child));
        }
        out.push_str("</ul>");
    }
    out.push_str("</li>");
    out
}
