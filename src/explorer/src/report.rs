//! The sleep dataset report: a fixed sequence of sections, each with
//! optional tables, charts and commentary, rendered to one HTML page.

use explorer_algos::derive;
use explorer_charts::{ChartError, Figure};
use explorer_types::SleepDataset;

use crate::html::{Table, document, escape};

mod commentary;
mod sections;

pub use sections::describe;

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionedTable {
    pub caption: &'static str,
    pub table: Table,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    /// Trusted HTML shown before the tables.
    pub intro: Option<&'static str>,
    pub tables: Vec<CaptionedTable>,
    pub figures: Vec<Figure>,
    /// Trusted HTML shown after the charts.
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn build(dataset: &SleepDataset) -> Self {
        let derived = derive(dataset);
        debug!("derived columns for {} rows", derived.len());

        let sections = vec![
            sections::preview(dataset),
            sections::smoking(&derived),
            sections::age_groups(&derived),
            sections::bedtime(&derived),
            sections::exercise(dataset),
            sections::caffeine(dataset),
            sections::rem_sleep(dataset),
            sections::bedtime_by_age(&derived),
            sections::gender(dataset),
            sections::conclusion(),
        ];

        Self { sections }
    }

    /// Renders every chart to inline SVG. Fails on the first chart that
    /// cannot be drawn.
    pub fn render_html(&self) -> Result<String, ChartError> {
        let mut body = format!(
            "<h1>{}</h1>\n{}\n",
            escape(commentary::TITLE),
            commentary::INTRO
        );

        for section in &self.sections {
            body.push_str("<section>\n");
            body.push_str(&format!("<h2>{}</h2>\n", escape(section.heading)));
            if let Some(intro) = section.intro {
                body.push_str(intro);
                body.push('\n');
            }
            for CaptionedTable { caption, table } in &section.tables {
                body.push_str(&format!(
                    "<p>{}</p>\n<div class=\"table\">\n{table}\n</div>\n",
                    escape(caption)
                ));
            }
            for figure in &section.figures {
                body.push_str("<figure>\n");
                body.push_str(&figure.to_svg()?);
                body.push_str("\n</figure>\n");
            }
            if let Some(note) = section.note {
                body.push_str(note);
                body.push('\n');
            }
            body.push_str("</section>\n");
        }

        Ok(document(commentary::TITLE, STYLE, &body))
    }
}

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 2rem auto; max-width: 960px; color: #222; line-height: 1.45; }
section { margin-bottom: 2.5rem; }
.table { overflow-x: auto; }
table { border-collapse: collapse; font-size: 0.8rem; }
th, td { border: 1px solid #d0d7de; padding: 0.3rem 0.5rem; text-align: right; }
th { background-color: #f0f3f6; }
figure { margin: 1rem 0; }
"#;
