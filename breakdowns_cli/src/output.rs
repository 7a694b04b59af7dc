use anyhow::Result;
use breakdowns_lib::display::{format_pct, format_price};
use breakdowns_lib::reader::{ReaderView, Section};
use breakdowns_lib::types::{Post, ValuationMethod};
use breakdowns_lib::UpsideBand;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::xml_output;

pub const NO_RESULTS: &str = "No posts match your filters yet.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
    Xml,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            "xml" => OutputFormat::Xml,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct PostRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Method")]
    #[serde(rename = "Method")]
    method: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Upside")]
    #[serde(rename = "Upside")]
    upside: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Summary")]
    #[serde(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Tags")]
    #[serde(rename = "Tags")]
    tags: String,
}

#[derive(Tabled, Serialize)]
struct OptionRow {
    #[tabled(rename = "Option")]
    #[serde(rename = "Option")]
    option: String,
}

#[derive(Tabled, Serialize)]
struct StatRow {
    #[tabled(rename = "Stat")]
    #[serde(rename = "Stat")]
    label: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

// -- Row builders --

fn format_upside(upside_pct: f64) -> String {
    format!(
        "{} ({})",
        format_pct(upside_pct),
        UpsideBand::classify(upside_pct)
    )
}

/// Method name followed by its icon family, e.g. `DCF [calculator]`.
fn format_method(method: &ValuationMethod) -> String {
    format!("{} [{}]", method, method.glyph())
}

fn build_post_rows<P: AsRef<Post>>(posts: &[P]) -> Vec<PostRow> {
    posts
        .iter()
        .map(|p| {
            let p: &Post = AsRef::<Post>::as_ref(p);
            PostRow {
                id: p.id.clone(),
                date: p.date.clone(),
                company: p.company.clone(),
                ticker: p.ticker.clone(),
                sector: p.sector.clone(),
                method: format_method(&p.valuation.method),
                price: format_price(p.valuation.current),
                upside: format_upside(p.valuation.upside_pct),
                title: p.title.clone(),
                summary: p.summary.clone(),
                tags: p.tags.join(", "),
            }
        })
        .collect()
}

fn build_option_rows(options: &[String]) -> Vec<OptionRow> {
    options
        .iter()
        .map(|o| OptionRow { option: o.clone() })
        .collect()
}

fn build_stat_rows(view: &ReaderView) -> Vec<StatRow> {
    view.stats
        .iter()
        .map(|s| StatRow {
            label: s.label.clone(),
            value: match s.band {
                Some(band) => format!("{} ({})", s.value, band),
                None => s.value.clone(),
            },
        })
        .collect()
}

fn render_table<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn write_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let buf = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(buf)?)
}

// -- Post list --

/// Prints the visible posts. An empty list prints the empty-state message
/// on stderr; table formats print nothing else.
pub fn print_posts<P: AsRef<Post>>(posts: &[P], format: &OutputFormat) -> Result<()> {
    let posts: Vec<&Post> = posts.iter().map(AsRef::<Post>::as_ref).collect();
    if posts.is_empty() {
        eprintln!("{}", NO_RESULTS);
        if matches!(format, OutputFormat::Table | OutputFormat::Markdown) {
            return Ok(());
        }
    }
    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            println!("{}", render_table(build_post_rows(&posts), format))
        }
        OutputFormat::Json => print_json(&posts),
        OutputFormat::Csv => print!("{}", write_csv(&build_post_rows(&posts))?),
        OutputFormat::Xml => println!("{}", xml_output::posts_to_xml(&posts)?),
    }
    Ok(())
}

// -- Filter options --

pub fn print_options(kind: &str, options: &[String], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            println!("{}", render_table(build_option_rows(options), format))
        }
        OutputFormat::Json => print_json(&options),
        OutputFormat::Csv => print!("{}", write_csv(&build_option_rows(options))?),
        OutputFormat::Xml => println!("{}", xml_output::options_to_xml(kind, options)?),
    }
    Ok(())
}

// -- Reader --

pub fn render_reader_text(view: &ReaderView, format: &OutputFormat) -> String {
    let heading = if *format == OutputFormat::Markdown { "## " } else { "" };
    let mut out = String::new();
    out.push_str(&format!("{}\n{}{}\n\n", view.byline, heading, view.title));

    for section in &view.sections {
        out.push_str(&format!("{}{}\n", heading, section.heading()));
        match section {
            Section::Thesis(text) => out.push_str(&format!("{}\n", text)),
            Section::Catalysts(items) | Section::Risks(items) => {
                for item in items {
                    out.push_str(&format!("- {}\n", item));
                }
            }
            Section::Links(links) => {
                for link in links {
                    out.push_str(&format!("- {} <{}>\n", link.label, link.url));
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&render_table(build_stat_rows(view), format));
    out.push('\n');

    if !view.dcf.is_empty() {
        out.push_str(&format!("\n{}DCF Snapshot\n", heading));
        for line in &view.dcf {
            out.push_str(&format!("- {}\n", line));
        }
    }

    if let Some(peers) = &view.peers {
        out.push_str(&format!("\n{}Peer Multiples\n", heading));
        let rows: Vec<[String; 3]> = peers
            .rows
            .iter()
            .map(|r| [r.peer.clone(), r.metric.clone(), r.value.clone()])
            .collect();
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(["Peer", "Metric", "Value"]);
        for row in rows {
            builder.push_record(row);
        }
        let mut table = builder.build();
        if *format == OutputFormat::Markdown {
            table.with(Style::markdown());
        }
        out.push_str(&table.to_string());
        out.push('\n');
        if let Some(note) = &peers.note {
            out.push_str(&format!("{}\n", note));
        }
    }
    out
}

pub fn print_reader(view: &ReaderView, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            print!("{}", render_reader_text(view, format))
        }
        OutputFormat::Json => print_json(view),
        OutputFormat::Csv => print!("{}", write_csv(&build_stat_rows(view))?),
        OutputFormat::Xml => println!("{}", xml_output::reader_to_xml(view)?),
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
