// =====================================================
// FILE: src/output/page.rs - SINGLE PAGE RENDERING
// =====================================================

use crate::core::constants::MAX_CONTENT_WIDTH;
use crate::core::prelude::*;
use crate::portfolio::{PageState, Profile, Project, Section};
use crate::ui::color::{AppColor, Palette};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CARD_BAR: &str = "▌ ";
const DOT_ACTIVE: &str = "●";
const DOT_IDLE: &str = "○";

/// The whole page as styled lines, plus the first line of every section.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, usize)>,
}

impl RenderedPage {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn anchors(&self) -> &[(Section, usize)] {
        &self.anchors
    }

    pub fn anchor(&self, section: Section) -> usize {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0, |(_, line)| *line)
    }

    /// Section whose block contains `line`.
    pub fn section_at(&self, line: usize) -> Section {
        self.anchors
            .iter()
            .take_while(|(_, start)| *start <= line)
            .last()
            .map_or(Section::Home, |(section, _)| *section)
    }

    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line_text(line).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

pub fn content_width(width: u16) -> usize {
    usize::from(width.min(MAX_CONTENT_WIDTH)).max(1)
}

pub fn render_page(
    profile: &Profile,
    state: &PageState,
    tr: &Translator<'_>,
    palette: &Palette,
    width: u16,
) -> RenderedPage {
    let mut page = PageBuilder::new(content_width(width), *palette);
    render_hero(&mut page, tr);
    render_about(&mut page, profile, tr);
    render_stacks(&mut page, profile, tr);
    render_portfolio(&mut page, profile, state, tr);
    render_contact(&mut page, profile, tr);
    render_footer(&mut page, tr);
    page.finish()
}

/// Top bar: brand, numbered section links, language and theme switches.
pub fn render_nav(
    state: &PageState,
    current: Section,
    tr: &Translator<'_>,
    palette: &Palette,
    width: u16,
) -> Line<'static> {
    let mut left = vec![Span::styled(
        format!(" {} ", tr.t("portfolio")),
        bold(palette.primary),
    )];
    for section in Section::ALL {
        let label = format!(" {} {} ", section.shortcut(), tr.t(section.label_key()));
        let style = if section == current {
            bold(palette.text).add_modifier(Modifier::UNDERLINED)
        } else {
            fg(palette.muted)
        };
        left.push(Span::styled(label, style));
    }

    let theme_icon = if state.dark_mode() { "☀" } else { "☾" };
    let switches = |language: String| {
        vec![
            Span::styled(format!("[l] {} ", language), fg(palette.muted)),
            Span::styled(format!("[t] {} ", theme_icon), fg(palette.accent)),
        ]
    };
    let spans_width = |spans: &[Span<'static>]| -> usize {
        spans.iter().map(|s| s.content.width()).sum()
    };

    let mut right = switches(state.locale().switch_hint().to_string());
    if spans_width(&left[..]) + spans_width(&right[..]) > usize::from(width) {
        right = switches(state.locale().toggled().code().to_uppercase());
    }

    let used = spans_width(&left[..]) + spans_width(&right[..]);
    let gap = usize::from(width).saturating_sub(used).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right);
    Line::from(spans)
}

fn render_hero(page: &mut PageBuilder, tr: &Translator<'_>) {
    let p = page.palette;
    page.anchor(Section::Home);
    page.blank();
    page.centered(tr.t("heroTitle"), bold(p.text));
    page.centered(tr.t("heroSubtitle"), bold(p.primary));
    page.blank();
    page.centered(tr.t("heroDescription"), fg(p.muted));
    page.blank();
    page.centered_spans(vec![filled_button(tr.t("heroButton"), "Enter", &p)]);
}

fn render_about(page: &mut PageBuilder, profile: &Profile, tr: &Translator<'_>) {
    let p = page.palette;
    page.heading(Section::About, tr.t("aboutTitle"));
    page.centered(&profile.name, fg(p.accent).add_modifier(Modifier::ITALIC));
    page.blank();
    page.paragraph(tr.t("aboutParagraph1"), fg(p.text));
    page.blank();
    page.paragraph(tr.t("aboutParagraph2"), fg(p.text));
    page.blank();
    page.centered_spans(vec![
        outline_button(tr.t("downloadCV"), "d", &p),
        Span::raw("  "),
        filled_button(tr.t("getInTouch"), "5", &p),
    ]);
}

fn render_stacks(page: &mut PageBuilder, profile: &Profile, tr: &Translator<'_>) {
    let p = page.palette;
    page.heading(Section::Stacks, tr.t("stacksTitle"));
    let badge = Style::default()
        .fg(p.badge_text.into())
        .bg(p.badge_bg.into())
        .add_modifier(Modifier::BOLD);
    for row in chip_rows(&profile.stacks, page.width) {
        page.centered_spans(chip_spans(&row, badge));
    }
}

fn render_portfolio(
    page: &mut PageBuilder,
    profile: &Profile,
    state: &PageState,
    tr: &Translator<'_>,
) {
    let p = page.palette;
    page.heading(Section::Portfolio, tr.t("portfolioTitle"));

    if let Some(project) = state.current_project(profile) {
        render_card(page, project, tr);
    }

    page.blank();
    let carousel = state.carousel();
    let mut nav = vec![Span::styled("← (p)   ", fg(p.primary))];
    for i in 0..carousel.count() {
        if i > 0 {
            nav.push(Span::raw(" "));
        }
        if i == carousel.index() {
            nav.push(Span::styled(DOT_ACTIVE, fg(p.primary)));
        } else {
            nav.push(Span::styled(DOT_IDLE, fg(p.muted)));
        }
    }
    nav.push(Span::styled("   (n) →", fg(p.primary)));
    page.centered_spans(nav);
}

fn render_card(page: &mut PageBuilder, project: &Project, tr: &Translator<'_>) {
    let p = page.palette;
    let inner = page.width.saturating_sub(CARD_BAR.width()).max(1);

    page.card_line(vec![Span::styled(
        tr.t(&project.title_key).to_string(),
        bold(p.text),
    )]);
    let image = project.image.rsplit('/').next().unwrap_or(&project.image);
    page.card_line(vec![Span::styled(
        truncate_to_width(&format!("▣ {}", image), inner),
        fg(p.border),
    )]);
    page.card_line(Vec::new());
    for line in wrap_text(tr.t(&project.description_key), inner) {
        page.card_line(vec![Span::styled(line, fg(p.muted))]);
    }

    if !project.tech.is_empty() {
        page.card_line(Vec::new());
        for row in chip_rows(&project.tech, inner) {
            page.card_line(chip_spans(&row, fg(p.primary).add_modifier(Modifier::REVERSED)));
        }
    }

    let mut buttons = Vec::new();
    if project.has_code() {
        buttons.push(outline_button(tr.t("codeButton"), "c", &p));
    }
    if project.has_demo() {
        if !buttons.is_empty() {
            buttons.push(Span::raw("  "));
        }
        buttons.push(filled_button(&format!("{} ↗", tr.t("demoButton")), "o", &p));
    }
    if !buttons.is_empty() {
        page.card_line(Vec::new());
        page.card_line(buttons);
    }
}

fn render_contact(page: &mut PageBuilder, profile: &Profile, tr: &Translator<'_>) {
    let p = page.palette;
    page.heading(Section::Contact, tr.t("contactTitle"));
    page.centered(tr.t("contactDescription"), fg(p.muted));
    page.blank();

    let contact = &profile.contact;
    let cards = [
        ("@", tr.t("email"), contact.email.as_str()),
        ("in", tr.t("linkedin"), contact.linkedin_label.as_str()),
        ("gh", tr.t("github"), contact.github_label.as_str()),
    ];
    for (icon, label, value) in cards {
        page.centered_spans(vec![
            Span::styled(format!("{} ", icon), fg(p.accent)),
            Span::styled(label.to_string(), bold(p.text)),
        ]);
        page.centered(value, fg(p.muted));
        page.blank();
    }

    page.centered_spans(vec![
        filled_button(&format!("✉ {}", tr.t("sendMessage")), "m", &p),
        Span::raw("  "),
        outline_button(tr.t("github"), "g", &p),
    ]);
}

fn render_footer(page: &mut PageBuilder, tr: &Translator<'_>) {
    let p = page.palette;
    page.blank();
    page.push(vec![Span::styled("─".repeat(page.width), fg(p.border))]);
    page.centered(&format!("© {}", tr.t("footerText")), fg(p.muted));
}

struct PageBuilder {
    width: usize,
    palette: Palette,
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, usize)>,
}

impl PageBuilder {
    fn new(width: usize, palette: Palette) -> Self {
        Self {
            width,
            palette,
            lines: Vec::new(),
            anchors: Vec::new(),
        }
    }

    fn anchor(&mut self, section: Section) {
        self.anchors.push((section, self.lines.len()));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        self.lines.push(Line::from(spans));
    }

    fn centered_spans(&mut self, mut spans: Vec<Span<'static>>) {
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = self.width.saturating_sub(used) / 2;
        if pad > 0 {
            spans.insert(0, Span::raw(" ".repeat(pad)));
        }
        self.push(spans);
    }

    fn centered(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.width) {
            self.centered_spans(vec![Span::styled(line, style)]);
        }
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.width) {
            self.push(vec![Span::styled(line, style)]);
        }
    }

    fn heading(&mut self, section: Section, title: &str) {
        self.blank();
        self.blank();
        self.anchor(section);
        self.centered(title, bold(self.palette.text));
        let underline = "─".repeat(title.width().clamp(1, self.width));
        self.centered_spans(vec![Span::styled(underline, fg(self.palette.primary))]);
        self.blank();
    }

    fn card_line(&mut self, mut spans: Vec<Span<'static>>) {
        spans.insert(0, Span::styled(CARD_BAR, fg(self.palette.primary)));
        self.push(spans);
    }

    fn finish(self) -> RenderedPage {
        RenderedPage {
            lines: self.lines,
            anchors: self.anchors,
        }
    }
}

fn fg(color: AppColor) -> Style {
    Style::default().fg(color.into())
}

fn bold(color: AppColor) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

fn filled_button(label: &str, key: &str, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("[ {} ({}) ]", label, key),
        Style::default()
            .fg(palette.background.into())
            .bg(palette.primary.into())
            .add_modifier(Modifier::BOLD),
    )
}

fn outline_button(label: &str, key: &str, palette: &Palette) -> Span<'static> {
    Span::styled(format!("[ {} ({}) ]", label, key), bold(palette.primary))
}

/// Greedy rows of ` item ` chips separated by one space.
fn chip_rows(items: &[String], width: usize) -> Vec<Vec<&str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut used = 0;
    for item in items {
        let chip = item.width() + 2;
        let needed = if current.is_empty() { chip } else { chip + 1 };
        if !current.is_empty() && used + needed > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += if current.is_empty() { chip } else { chip + 1 };
        current.push(item);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn chip_spans(row: &[&str], style: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, item) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", item), style));
    }
    spans
}

/// Word wrap by display width. Words wider than `width` stay whole.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let limit = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
