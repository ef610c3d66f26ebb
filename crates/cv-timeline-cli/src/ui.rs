use cv_timeline_engine::parsing::inline::parse_segments;
use cv_timeline_engine::{Language, ListNode, Milestone, TextSegment, build_nested_list};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::app::App;

const BULLET_MARKERS: [&str; 3] = ["•", "◦", "▪"];

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Filter and language bar
    let filters = app.available_filters();
    let selected = filters.iter().position(|f| *f == app.filter).unwrap_or(0);
    let labels: Vec<Line> = filters
        .iter()
        .map(|filter| Line::from(app.t(&filter.label_key()).to_string()))
        .collect();
    let title = format!(
        "{} [{}]",
        app.t("timeline.title"),
        language_bar(app.language)
    );
    let tabs = Tabs::new(labels)
        .block(Block::default().borders(Borders::ALL).title(title))
        .select(selected)
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_widget(tabs, chunks[0]);

    // Timeline panel
    let timeline_text = match &app.timeline {
        Err(_) => vec![Line::styled(
            app.t("timeline.error").to_string(),
            Style::default().fg(Color::Red),
        )],
        Ok(_) => {
            let visible = app.visible();
            if visible.is_empty() {
                vec![Line::from(app.t("timeline.empty").to_string())]
            } else {
                visible.into_iter().flat_map(milestone_lines).collect()
            }
        }
    };
    let timeline = Paragraph::new(timeline_text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(timeline, chunks[1]);

    // Instructions
    let help_text = match &app.status {
        Some(status) => Line::styled(status.clone(), Style::default().fg(Color::Red)),
        None => Line::from(
            ["help.quit", "help.scroll", "help.filter", "help.language"]
                .iter()
                .map(|key| app.t(key))
                .collect::<Vec<_>>()
                .join(" | "),
        ),
    };
    f.render_widget(Paragraph::new(help_text), chunks[2]);
}

/// `EN fr zh` with the active language upper-cased.
fn language_bar(active: Language) -> String {
    Language::ALL
        .iter()
        .map(|&language| {
            if language == active {
                language.code().to_uppercase()
            } else {
                language.code().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Terminal lines for one milestone, followed by a blank separator line.
pub fn milestone_lines(milestone: &Milestone) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !milestone.time_period.is_empty() {
        lines.push(Line::styled(
            milestone.time_period.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut title = Vec::new();
    if let Some(icon) = milestone.display_icon() {
        title.push(Span::raw(format!("{icon} ")));
    }
    title.extend(segment_spans(
        &milestone.title,
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(title));

    push_nodes(&mut lines, &build_nested_list(&milestone.bullet_points), 0);

    if let Some(logo) = &milestone.logo {
        lines.push(Line::styled(
            format!("  [logo] {logo}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines.push(Line::default());
    lines
}

fn push_nodes(lines: &mut Vec<Line<'static>>, nodes: &[ListNode], depth: usize) {
    for node in nodes {
        let marker = BULLET_MARKERS[depth % BULLET_MARKERS.len()];
        let mut spans = vec![Span::raw(format!("{}{marker} ", "  ".repeat(depth + 1)))];
        spans.extend(segment_spans(&node.text, Style::default()));
        lines.push(Line::from(spans));
        push_nodes(lines, &node.children, depth + 1);
    }
}

/// Spans for inline text; links show their label, underlined.
fn segment_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    parse_segments(text)
        .into_iter()
        .map(|segment| match segment {
            TextSegment::Text(text) => Span::styled(text, base),
            TextSegment::Link { label, .. } => Span::styled(
                label,
                base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ),
        })
        .collect()
}
