// =============================================================================
// Builder: reports
// =============================================================================
//
// A director drives any `ReportBuilder` through the same steps; each builder
// decides how a step is rendered (plain text or HTML).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to export report to {}: {source}", path.display())]
    Export { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    pub bg_color: String,
    pub font_color: String,
    pub font_size: u32,
}

impl ReportStyle {
    pub fn new(bg_color: impl Into<String>, font_color: impl Into<String>, font_size: u32) -> Self {
        ReportStyle {
            bg_color: bg_color.into(),
            font_color: font_color.into(),
            font_size,
        }
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle::new("white", "black", 12)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    header: String,
    content: String,
    footer: String,
    sections: Vec<(String, String)>,
    style: Option<ReportStyle>,
}

impl Report {
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn sections(&self) -> &[(String, String)] {
        &self.sections
    }

    pub fn style(&self) -> Option<&ReportStyle> {
        self.style.as_ref()
    }

    /// Writes the rendered report to `path` as UTF-8.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| ReportError::Export {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("exported report to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        if !self.content.is_empty() {
            write!(f, "\n{}", self.content)?;
        }
        for (name, content) in &self.sections {
            write!(f, "\n\n{name}\n{content}")?;
        }
        if self.sections.is_empty() {
            write!(f, "\n{}", self.footer)
        } else {
            write!(f, "\n\n{}", self.footer)
        }
    }
}

pub trait ReportBuilder {
    fn set_header(&mut self, header: &str);
    fn set_content(&mut self, content: &str);
    fn set_footer(&mut self, footer: &str);
    fn add_section(&mut self, name: &str, content: &str);
    fn set_style(&mut self, style: ReportStyle);

    /// Hands out the report built so far and starts a fresh one.
    fn finish(&mut self) -> Report;
}

// =============================================================================
// Plain text
// =============================================================================

#[derive(Debug, Default)]
pub struct TextReportBuilder {
    report: Report,
}

impl TextReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportBuilder for TextReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.header = format!("*** {header} ***");
    }

    fn set_content(&mut self, content: &str) {
        self.report.content = content.to_string();
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.footer = format!("--- {footer} ---");
    }

    fn add_section(&mut self, name: &str, content: &str) {
        self.report
            .sections
            .push((name.to_string(), content.to_string()));
    }

    fn set_style(&mut self, style: ReportStyle) {
        self.report.style = Some(style);
    }

    fn finish(&mut self) -> Report {
        std::mem::take(&mut self.report)
    }
}

// =============================================================================
// HTML
// =============================================================================

#[derive(Debug, Default)]
pub struct HtmlReportBuilder {
    report: Report,
}

impl HtmlReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

impl ReportBuilder for HtmlReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.header = format!("<h1>{}</h1>", escape(header));
    }

    fn set_content(&mut self, content: &str) {
        self.report.content = format!("<p>{}</p>", escape(content));
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.footer = format!("<footer>{}</footer>", escape(footer));
    }

    fn add_section(&mut self, name: &str, content: &str) {
        self.report.sections.push((
            format!("<h2>{}</h2>", escape(name)),
            format!("<p>{}</p>", escape(content)),
        ));
    }

    fn set_style(&mut self, style: ReportStyle) {
        self.report.style = Some(style);
    }

    fn finish(&mut self) -> Report {
        std::mem::take(&mut self.report)
    }
}

// =============================================================================
// Director
// =============================================================================

#[derive(Debug, Default)]
pub struct ReportDirector;

impl ReportDirector {
    pub fn new() -> Self {
        ReportDirector
    }

    pub fn construct(&self, builder: &mut dyn ReportBuilder) -> Report {
        builder.set_header("Report Title");
        builder.set_content("This is report content");
        builder.set_footer("2026");
        builder.finish()
    }

    pub fn construct_game_report(
        &self,
        builder: &mut dyn ReportBuilder,
        style: ReportStyle,
    ) -> Report {
        builder.set_header("Game Report");
        builder.add_section("Statistics", "Player stats here");
        builder.add_section("Achievements", "Unlocked achievements");
        builder.set_footer("2026 ©");
        builder.set_style(style);
        builder.finish()
    }
}
