//! Read-only projection of a post into the sections the reader shows.
//!
//! Optional content that is absent, or present but empty, produces no
//! section at all. Nothing is substituted for missing data.

use breakdowns_api::types::{Link, Post};
use serde::Serialize;

use crate::display::{
    format_grouped, format_multiple, format_pct, format_price, quick_metrics_preview, UpsideBand,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    /// Set on the upside stat only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<UpsideBand>,
}

impl Stat {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
            band: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Section {
    Thesis(String),
    Catalysts(Vec<String>),
    Risks(Vec<String>),
    Links(Vec<Link>),
}

impl Section {
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Thesis(_) => "Investment Thesis",
            Section::Catalysts(_) => "Catalysts",
            Section::Risks(_) => "Risks",
            Section::Links(_) => "Links",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeerRow {
    pub peer: String,
    pub metric: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeerTable {
    pub rows: Vec<PeerRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Everything the reader renders for one post.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReaderView {
    pub id: String,
    /// `company • ticker • date`
    pub byline: String,
    pub title: String,
    pub sections: Vec<Section>,
    pub stats: Vec<Stat>,
    /// DCF snapshot lines; empty when the post has no DCF.
    pub dcf: Vec<String>,
    pub peers: Option<PeerTable>,
}

impl ReaderView {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            byline: format!("{} • {} • {}", post.company, post.ticker, post.date),
            title: post.title.clone(),
            sections: sections(post),
            stats: stats(post),
            dcf: dcf_lines(post),
            peers: peer_table(post),
        }
    }
}

fn non_empty<T: Clone>(items: &Option<Vec<T>>) -> Option<Vec<T>> {
    items.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn sections(post: &Post) -> Vec<Section> {
    let content = &post.content;
    let mut sections = vec![Section::Thesis(content.thesis.clone())];
    if let Some(catalysts) = non_empty(&content.catalysts) {
        sections.push(Section::Catalysts(catalysts));
    }
    if let Some(risks) = non_empty(&content.risks) {
        sections.push(Section::Risks(risks));
    }
    if let Some(links) = non_empty(&content.links) {
        sections.push(Section::Links(links));
    }
    sections
}

fn stats(post: &Post) -> Vec<Stat> {
    let valuation = &post.valuation;
    let mut stats = vec![
        Stat::new("Method", valuation.method.to_string()),
        Stat::new("Intrinsic (Base)", format_price(valuation.base)),
        Stat::new("Price", format_price(valuation.current)),
        Stat {
            label: "Upside".to_string(),
            value: format_pct(valuation.upside_pct),
            band: Some(UpsideBand::classify(valuation.upside_pct)),
        },
    ];
    stats.extend(
        quick_metrics_preview(&post.content)
            .iter()
            .map(|m| Stat::new(&m.label, m.value.clone())),
    );
    stats
}

fn dcf_lines(post: &Post) -> Vec<String> {
    let Some(dcf) = &post.content.dcf else {
        return Vec::new();
    };
    let mut lines = vec![
        format!("WACC: {}", format_pct(dcf.wacc)),
        format!("Terminal Growth: {}", format_pct(dcf.terminal_growth)),
        format!("FCF (Next Yr): ${}", format_grouped(dcf.base_fcf_next_yr)),
        format!("5Y FCF CAGR: {}", format_pct(dcf.fcf_cagr5y)),
        format!("Shares Out: {}m", format_grouped(dcf.shares_out)),
    ];
    if let Some(notes) = dcf.notes.as_ref().filter(|n| !n.is_empty()) {
        lines.push(notes.clone());
    }
    lines
}

fn peer_table(post: &Post) -> Option<PeerTable> {
    let multiples = post.content.multiples.as_ref()?;
    if multiples.peers.is_empty() {
        return None;
    }
    let rows = multiples
        .peers
        .iter()
        .map(|p| PeerRow {
            peer: match &p.ticker {
                Some(ticker) => format!("{} ({})", p.name, ticker),
                None => p.name.clone(),
            },
            metric: p.metric.clone(),
            value: format_multiple(p.value),
        })
        .collect();
    Some(PeerTable {
        rows,
        note: multiples
            .target_multiple_note
            .clone()
            .filter(|n| !n.is_empty()),
    })
}
