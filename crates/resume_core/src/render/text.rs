//! Plain-text outline renderer.
//!
//! Produces a markdown-flavoured outline of the document. Layout, styling and
//! pagination belong to richer renderers; this one exists for terminal
//! previews and tests.

use super::DocumentRenderer;
use crate::model::custom_block::CustomBlock;
use crate::model::education::Education;
use crate::model::experience::Experience;
use crate::model::personal::PersonalInfo;
use crate::model::project::Project;
use crate::model::section::Section;
use crate::model::skill::SkillGroup;
use std::fmt::Write;

#[derive(Debug, Default)]
pub struct TextRenderer {
    out: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn heading(&mut self, title: &str) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let _ = writeln!(self.out, "## {title}");
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl DocumentRenderer for TextRenderer {
    fn personal(&mut self, _section: &Section, info: &PersonalInfo) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let _ = writeln!(self.out, "# {}", info.name);

        let mut contact = [&info.email, &info.phone, &info.location]
            .into_iter()
            .filter(|value| !value.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>();
        if let Some(website) = info.website.as_deref().filter(|v| !v.is_empty()) {
            contact.push(website);
        }
        if info.linkedin.as_deref().is_some_and(|v| !v.is_empty()) {
            contact.push("LinkedIn");
        }
        if info.github.as_deref().is_some_and(|v| !v.is_empty()) {
            contact.push("GitHub");
        }
        if !contact.is_empty() {
            self.line(&contact.join(" | "));
        }
    }

    fn experience(&mut self, section: &Section, entries: &[Experience]) {
        self.heading(&section.title);
        for entry in entries {
            let _ = writeln!(
                self.out,
                "### {} — {} ({} - {})",
                entry.position,
                entry.company,
                entry.start_date,
                entry.end_label()
            );
            if !entry.description.is_empty() {
                self.line(&entry.description);
            }
        }
    }

    fn education(&mut self, section: &Section, entries: &[Education]) {
        self.heading(&section.title);
        for entry in entries {
            let _ = writeln!(
                self.out,
                "### {} in {} — {} ({} - {})",
                entry.degree, entry.field, entry.institution, entry.start_date, entry.end_date
            );
            if let Some(gpa) = entry.gpa.as_deref().filter(|v| !v.is_empty()) {
                let _ = writeln!(self.out, "GPA: {gpa}");
            }
        }
    }

    fn projects(&mut self, section: &Section, entries: &[Project]) {
        self.heading(&section.title);
        for entry in entries {
            let _ = writeln!(self.out, "### {}", entry.name);
            if !entry.description.is_empty() {
                self.line(&entry.description);
            }
            if !entry.technologies.is_empty() {
                let _ = writeln!(self.out, "Tech: {}", entry.technologies.join(", "));
            }
            if let Some(url) = entry.url.as_deref().filter(|v| !v.is_empty()) {
                let _ = writeln!(self.out, "Link: {url}");
            }
            if let Some(github) = entry.github.as_deref().filter(|v| !v.is_empty()) {
                let _ = writeln!(self.out, "Source: {github}");
            }
        }
    }

    fn skills(&mut self, section: &Section, groups: &[SkillGroup<'_>]) {
        self.heading(&section.title);
        for group in groups {
            let skills = group
                .skills
                .iter()
                .map(|skill| format!("{} ({})", skill.name, skill.level))
                .collect::<Vec<_>>();
            let _ = writeln!(self.out, "{}: {}", group.category, skills.join(", "));
        }
    }

    // Every custom section renders every block; blocks carry their own titles.
    fn custom(&mut self, _section: &Section, blocks: &[CustomBlock]) {
        for block in blocks {
            self.heading(&block.title);
            if !block.content.is_empty() {
                self.line(&block.content);
            }
        }
    }
}
