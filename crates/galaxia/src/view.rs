//! Section rendering on top of the galaxy background.

use std::ops::Range;

use galaxia_config::ProfileConfig;
use galaxia_core::{ProjectKind, Section};
use galaxia_fonts::{banner_width, build_banner};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::content::{
    ABOUT_PANELS, CONTACT_BLURB, Panel, SKILL_GROUPS, SKILLS_HEADLINE, SKILLS_PARAGRAPHS,
    SKILLS_SUBLINE, SKILLS_TITLE, project, project_label,
};

const TEXT: Color = Color::Rgb(230, 230, 230);
const MUTED: Color = Color::Rgb(150, 150, 160);
const BORDER: Color = Color::Rgb(90, 90, 100);

/// Something the navigation bar can take you to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Section(Section),
    Contact,
}

/// Columns of the navigation bar occupied by a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHit {
    pub columns: Range<u16>,
    pub target: NavTarget,
}

/// Build the navigation bar and the column ranges of its items.
pub fn nav_line(active: Section, x: u16) -> (Line<'static>, Vec<NavHit>) {
    let mut spans = vec![Span::styled(" ✦  ", Style::new().fg(TEXT).bold())];
    let mut hits = Vec::new();
    let mut cursor = x + spans[0].width() as u16;

    let mut push = |spans: &mut Vec<Span<'static>>, span: Span<'static>, target: Option<NavTarget>| {
        let width = span.width() as u16;
        if let Some(target) = target {
            hits.push(NavHit {
                columns: cursor..cursor + width,
                target,
            });
        }
        cursor += width;
        spans.push(span);
    };

    for section in Section::ALL {
        let label = format!(" {} ", section.label().to_uppercase());
        let span = if section == active {
            Span::styled(label, Style::new().fg(Color::Black).bg(TEXT).bold())
        } else {
            Span::styled(label, Style::new().fg(MUTED))
        };
        push(&mut spans, span, Some(NavTarget::Section(section)));
        push(&mut spans, Span::raw("  "), None);
    }
    push(
        &mut spans,
        Span::styled(" CONTACT ME ", Style::new().fg(Color::Black).bg(Color::White).bold()),
        Some(NavTarget::Contact),
    );

    (Line::from(spans), hits)
}

/// Render the navigation bar and return its hit areas.
pub fn render_nav(frame: &mut Frame, area: Rect, active: Section) -> Vec<NavHit> {
    let (line, hits) = nav_line(active, area.x);
    frame.render_widget(Paragraph::new(line), area);
    hits
}

/// Render the help line and, on the last section, the footer.
pub fn render_footer(frame: &mut Frame, area: Rect, section: Section, name: &str, year: i32) {
    let text = if section == Section::Skills {
        Line::from(format!("© {year} {name}. All rights reserved."))
            .fg(MUTED)
            .centered()
    } else {
        Line::from(vec![
            "q".bold().fg(TEXT),
            " quit  ".dark_gray(),
            "tab".bold().fg(TEXT),
            " next section  ".dark_gray(),
            "1-4".bold().fg(TEXT),
            " jump  ".dark_gray(),
            "c".bold().fg(TEXT),
            " contact".dark_gray(),
        ])
        .centered()
    };
    frame.render_widget(text, area);
}

/// Render the content of a section.
pub fn render_section(
    frame: &mut Frame,
    area: Rect,
    section: Section,
    profile: &ProfileConfig,
    active_project: Option<ProjectKind>,
) {
    match section {
        Section::Home => render_home(frame, area, profile),
        Section::About => render_about(frame, area),
        Section::Projects => render_projects(frame, area, active_project),
        Section::Skills => render_skills(frame, area),
    }
}

fn render_home(frame: &mut Frame, area: Rect, profile: &ProfileConfig) {
    let title: Vec<Line> = if banner_width(&profile.name) <= area.width as usize {
        build_banner(&profile.name)
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(TEXT)))
            .collect()
    } else {
        vec![Line::from(profile.name.to_uppercase()).bold().fg(TEXT)]
    };
    let title_height = title.len() as u16;

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(title_height),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[1]);
    frame.render_widget(
        Paragraph::new(profile.tagline.as_str())
            .style(Style::new().fg(MUTED))
            .alignment(Alignment::Center),
        chunks[3],
    );
    frame.render_widget(Line::from("▼").fg(MUTED).centered(), chunks[5]);
}

fn panel_widget(panel: Panel) -> Paragraph<'static> {
    Paragraph::new(panel.body)
        .style(Style::new().fg(TEXT))
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_style(Style::new().fg(BORDER))
                .title(Line::from(format!(" {} ", panel.title)).bold()),
        )
}

fn render_about(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(
        Line::from("About Me").bold().fg(TEXT).centered(),
        chunks[1],
    );

    let row = centered_columns(chunks[2], 110);
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(1)
        .split(row);
    for (panel, column) in ABOUT_PANELS.into_iter().zip(columns.iter()) {
        frame.render_widget(Clear, *column);
        frame.render_widget(panel_widget(panel), *column);
    }
}

fn render_projects(frame: &mut Frame, area: Rect, active: Option<ProjectKind>) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for (kind, column) in ProjectKind::ALL.into_iter().zip(columns.iter()) {
        let column = *column;
        if active == Some(kind) {
            let detail = centered_rect(shrink(column, 2), 44, 12);
            frame.render_widget(Clear, detail);
            frame.render_widget(panel_widget(project(kind)), detail);
        } else {
            let label = Paragraph::new(project_label(kind))
                .alignment(Alignment::Center)
                .style(Style::new().fg(MUTED).bold());
            let middle = Rect {
                y: column.y + column.height / 2,
                height: column.height.min(1),
                ..column
            };
            frame.render_widget(label, middle);
        }
        frame.render_widget(
            Block::bordered().border_style(Style::new().fg(BORDER)),
            column,
        );
    }
}

fn render_skills(frame: &mut Frame, area: Rect) {
    let boxed = centered_rect(area, 96, 26);
    frame.render_widget(Clear, boxed);
    let block = Block::bordered().border_style(Style::new().fg(BORDER));
    let inner = block.inner(boxed);
    frame.render_widget(block, boxed);

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(inner);

    frame.render_widget(Line::from(SKILLS_TITLE).bold().fg(TEXT).centered(), chunks[0]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(SKILLS_HEADLINE).bold().fg(Color::White),
            Line::from("────").fg(MUTED),
            Line::from(SKILLS_SUBLINE).fg(MUTED),
        ])
        .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Text::from(
            SKILLS_PARAGRAPHS
                .iter()
                .flat_map(|p| [Line::from(*p), Line::default()])
                .collect::<Vec<_>>(),
        ))
        .style(Style::new().fg(TEXT))
        .wrap(Wrap { trim: true }),
        shrink(chunks[2], 1),
    );

    let groups = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(1)
        .split(chunks[3]);
    for (group, column) in SKILL_GROUPS.into_iter().zip(groups.iter()) {
        let items: Vec<Line> = group
            .items
            .iter()
            .map(|item| Line::from(format!("• {item}")))
            .collect();
        frame.render_widget(
            Paragraph::new(items).style(Style::new().fg(TEXT)).block(
                Block::bordered()
                    .border_style(Style::new().fg(BORDER))
                    .title(Line::from(format!(" {} ", group.title)).bold()),
            ),
            *column,
        );
    }
}

/// Area of the contact panel: the right half of the screen.
pub fn contact_area(area: Rect) -> Rect {
    let half = area.width / 2;
    Rect {
        x: area.x + area.width - half,
        width: half,
        ..area
    }
}

/// Render the contact panel over everything else.
pub fn render_contact(frame: &mut Frame, area: Rect, profile: &ProfileConfig) {
    let panel = contact_area(area);
    frame.render_widget(Clear, panel);

    let mut lines = vec![
        Line::from(format!("✦ {}", profile.name)).bold().fg(Color::White),
        Line::from(profile.tagline.clone()).fg(MUTED),
        Line::default(),
        Line::from("Let's connect").bold().fg(TEXT),
        Line::from(CONTACT_BLURB).fg(TEXT),
        Line::default(),
        Line::from(vec!["Email  ".fg(MUTED), profile.email.clone().fg(TEXT)]),
    ];
    if !profile.phone.is_empty() {
        lines.push(Line::from(vec!["Phone  ".fg(MUTED), profile.phone.clone().fg(TEXT)]));
    }
    lines.push(Line::default());
    lines.push(Line::from(profile.links.join("   ")).fg(TEXT));
    lines.push(Line::default());
    lines.push(Line::from("esc to close").dark_gray());

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .border_style(Style::new().fg(TEXT))
                .title(" Contact "),
        ),
        shrink(panel, 1),
    );
}

/// A rectangle of at most `width` x `height` centred in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn centered_columns(area: Rect, width: u16) -> Rect {
    centered_rect(area, width, area.height)
}

fn shrink(area: Rect, margin: u16) -> Rect {
    area.inner(Margin::new(margin, margin))
}
