//! Mapping from a resume to layout blocks.

use crate::error::Result;
use crate::layout::{
    Alignment, Border, Layout, Paragraph, ParagraphStyle, Table, TextRun, TextStyle,
};
use crate::model::{EducationEntry, Entry, JobEntry, ResumeDocument, Section, SkillGroup};

use super::{RenderStats, StyleConfig};

/// Suffix appended to degrees that are still being pursued.
pub const IN_PROGRESS_SUFFIX: &str = " (in progress)";

/// Lay out a resume with the given style.
pub fn to_layout(doc: &ResumeDocument, style: &StyleConfig) -> Result<Layout> {
    ResumeRenderer::new(style.clone()).layout(doc)
}

/// Resume renderer.
///
/// Validates the resume, then walks it once from top to bottom, emitting
/// paragraphs and tables. The renderer keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct ResumeRenderer {
    style: StyleConfig,
}

impl ResumeRenderer {
    /// Create a new renderer.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Lay out a resume.
    pub fn layout(&self, doc: &ResumeDocument) -> Result<Layout> {
        doc.validate()?;

        let mut layout = Layout::new(self.style.page_setup());

        self.render_header(&mut layout, doc);
        self.render_rule(&mut layout);
        self.render_summary(&mut layout, &doc.summary);

        for section in &doc.sections {
            self.render_section(&mut layout, section);
        }

        log::debug!(
            "laid out {} sections into {} blocks",
            doc.sections.len(),
            layout.blocks.len()
        );
        Ok(layout)
    }

    /// Lay out a resume and count what was emitted.
    pub fn layout_with_stats(&self, doc: &ResumeDocument) -> Result<(Layout, RenderStats)> {
        let layout = self.layout(doc)?;
        let stats = RenderStats::from_layout(&layout);
        Ok((layout, stats))
    }

    fn render_header(&self, layout: &mut Layout, doc: &ResumeDocument) {
        let spacing = &self.style.spacing;

        let name = Paragraph::with_style(
            ParagraphStyle::spacing(0.0, spacing.name_after).with_alignment(Alignment::Center),
        )
        .run(TextRun::new(
            doc.display_name(),
            self.heading_text(self.style.sizes.name)
                .with_color(self.style.colors.accent),
        ));
        layout.add_paragraph(name);

        let contact = Paragraph::with_style(
            ParagraphStyle::spacing(0.0, spacing.contact_after).with_alignment(Alignment::Center),
        )
        .run(TextRun::new(
            doc.contact_line.as_str(),
            self.body_text().with_color(self.style.colors.muted),
        ));
        layout.add_paragraph(contact);
    }

    fn render_rule(&self, layout: &mut Layout) {
        let spacing = &self.style.spacing;
        layout.add_paragraph(Paragraph::with_style(
            ParagraphStyle::spacing(spacing.rule_before, spacing.rule_after)
                .with_bottom_border(Border::thin(self.style.colors.rule)),
        ));
    }

    fn render_summary(&self, layout: &mut Layout, summary: &str) {
        let spacing = &self.style.spacing;
        let para = Paragraph::with_style(ParagraphStyle::spacing(
            spacing.summary_before,
            spacing.summary_after,
        ))
        .run(TextRun::new(summary, self.body_text()));
        layout.add_paragraph(para);
    }

    fn render_section(&self, layout: &mut Layout, section: &Section) {
        self.render_banner(layout, &section.title);

        let last_skills = section
            .entries
            .iter()
            .rposition(|e| matches!(e, Entry::Skills(_)));

        for (i, entry) in section.entries.iter().enumerate() {
            match entry {
                Entry::Job(job) => self.render_job(layout, job),
                Entry::Education(edu) => self.render_education(layout, edu),
                Entry::Skills(group) => {
                    self.render_skills(layout, group, Some(i) == last_skills);
                }
            }
        }
    }

    fn render_banner(&self, layout: &mut Layout, title: &str) {
        let content = Paragraph::with_style(ParagraphStyle::default().with_alignment(Alignment::Center))
            .run(TextRun::new(
                title,
                self.heading_text(self.style.sizes.section_header).bold(),
            ));
        layout.add_table(Table::banner(
            self.style.banner_width(),
            self.style.colors.banner_background,
            content,
        ));
        layout.add_paragraph(Paragraph::spacer(self.style.spacing.banner_after));
    }

    fn render_job(&self, layout: &mut Layout, job: &JobEntry) {
        let spacing = &self.style.spacing;
        let size = self.style.sizes.entry_title;
        let (title_width, date_width) = self.style.job_columns();

        let title = Paragraph::new().run(TextRun::new(
            job.title.as_str(),
            self.heading_text(size).bold(),
        ));
        let dates = Paragraph::with_style(ParagraphStyle::default().with_alignment(Alignment::Right))
            .run(TextRun::new(
                job.date_range.as_str(),
                self.heading_text(size).italic(),
            ));
        layout.add_table(Table::borderless_row(vec![
            (title_width, title),
            (date_width, dates),
        ]));

        let organization = Paragraph::with_style(ParagraphStyle::spacing(
            0.0,
            spacing.organization_after,
        ))
        .run(TextRun::new(
            job.organization.as_str(),
            self.body_text().with_color(self.style.colors.accent),
        ));
        layout.add_paragraph(organization);

        for bullet in &job.bullets {
            let item =
                Paragraph::with_style(ParagraphStyle::spacing(0.0, spacing.bullet_after).bulleted())
                    .run(TextRun::new(bullet.as_str(), self.body_text()));
            layout.add_paragraph(item);
        }

        layout.add_paragraph(Paragraph::spacer(spacing.job_after));
    }

    fn render_education(&self, layout: &mut Layout, edu: &EducationEntry) {
        let spacing = &self.style.spacing;
        let accent = self.body_text().with_color(self.style.colors.accent);

        let mut degree = Paragraph::with_style(ParagraphStyle::spacing(0.0, spacing.degree_after))
            .run(TextRun::new(edu.degree.as_str(), accent.clone().bold()));
        if edu.in_progress {
            degree.add_run(TextRun::new(IN_PROGRESS_SUFFIX, accent));
        }
        layout.add_paragraph(degree);

        let institution =
            Paragraph::with_style(ParagraphStyle::spacing(0.0, spacing.institution_after))
                .run(TextRun::new(edu.institution.as_str(), self.body_text()));
        layout.add_paragraph(institution);
    }

    fn render_skills(&self, layout: &mut Layout, group: &SkillGroup, last_in_section: bool) {
        let spacing = &self.style.spacing;
        let after = if last_in_section {
            spacing.skill_section_after
        } else {
            spacing.skill_after
        };

        let mut para = Paragraph::with_style(ParagraphStyle::spacing(0.0, after));
        if group.items.is_empty() {
            para.add_run(TextRun::new(group.label.as_str(), self.body_text().bold()));
        } else {
            para.add_run(TextRun::new(
                format!("{}: ", group.label),
                self.body_text().bold(),
            ));
            para.add_run(TextRun::new(group.joined_items(), self.body_text()));
        }
        layout.add_paragraph(para);
    }

    fn body_text(&self) -> TextStyle {
        TextStyle::new(self.style.fonts.body.as_str(), self.style.sizes.body)
            .with_color(self.style.colors.text)
    }

    fn heading_text(&self, size: f32) -> TextStyle {
        TextStyle::new(self.style.fonts.heading.as_str(), size).with_color(self.style.colors.text)
    }
}
