//! Tera templates for the web page and the terminal output.
//!
//! Templates are embedded at compile time. Only `.html` templates are
//! auto-escaped; the chart SVG is inserted with `| safe` since plotters
//! escapes its own text.

use std::sync::Arc;

use predictor_core::{LookupError, WeatherReport};
use tera::{Context, Tera};

mod embedded {
    pub const PAGE: &str = include_str!("../templates/page.html");
    pub const REPORT: &str = include_str!("../templates/report.txt");
    pub const ERROR: &str = include_str!("../templates/error.txt");
}

/// What to show under the city form.
#[derive(Debug)]
pub enum Section<'a> {
    Empty,
    Failed(&'a LookupError),
    Report(&'a WeatherReport),
}

#[derive(Debug, Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_template("page.html", embedded::PAGE)?;
        tera.add_raw_template("report.txt", embedded::REPORT)?;
        tera.add_raw_template("error.txt", embedded::ERROR)?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// The whole page: form pre-filled with `city_value`, then `section`.
    pub fn render_page(&self, city_value: &str, section: Section<'_>) -> tera::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("city_value", city_value);
        ctx.insert("error", &None::<String>);
        ctx.insert("remediation", &None::<&str>);
        ctx.insert("report", &None::<&WeatherReport>);

        match section {
            Section::Empty => {}
            Section::Failed(err) => {
                ctx.insert("error", &err.to_string());
                ctx.insert("remediation", &err.remediation());
            }
            Section::Report(report) => {
                ctx.insert("heading", &report.heading());
                ctx.insert("report", report);
            }
        }

        self.tera.render("page.html", &ctx)
    }

    /// Plain-text report for the terminal.
    pub fn render_report(&self, report: &WeatherReport) -> tera::Result<String> {
        let mut ctx = Context::from_serialize(report)?;
        ctx.insert("heading", &report.heading());

        self.tera.render("report.txt", &ctx)
    }

    /// Plain-text lookup failure, with guidance when there is any.
    pub fn render_error(&self, err: &LookupError) -> tera::Result<String> {
        let mut ctx = Context::new();
        ctx.insert("error", &err.to_string());
        ctx.insert("remediation", &err.remediation());

        self.tera.render("error.txt", &ctx)
    }
}
