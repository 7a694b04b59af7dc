use breakdowns_lib::reader::Section;
use breakdowns_lib::types::Post;
use breakdowns_lib::{ReaderView, UpsideBand};

const FIXTURE: &str = include_str!("../../breakdowns_api/tests/fixtures/posts.json");

fn posts() -> Vec<Post> {
    serde_json::from_str(FIXTURE).unwrap()
}

#[test]
fn full_post_projection() {
    let view = ReaderView::from_post(&posts()[0]);
    assert_eq!(view.byline, "Acme Corp • ACME • 2025-03-14");
    assert_eq!(view.title, "Acme: Compounding Through the Cycle");

    let headings: Vec<&str> = view.sections.iter().map(|s| s.heading()).collect();
    assert_eq!(headings, vec!["Investment Thesis", "Catalysts", "Risks", "Links"]);

    let stats: Vec<(&str, &str)> = view
        .stats
        .iter()
        .map(|s| (s.label.as_str(), s.value.as_str()))
        .collect();
    assert_eq!(
        stats,
        vec![
            ("Method", "DCF"),
            ("Intrinsic (Base)", "£142.50"),
            ("Price", "£118.20"),
            ("Upside", "20.0%"),
            ("Net Debt/EBITDA", "0.4x"),
            ("ROIC", "28%"),
        ]
    );
    assert_eq!(view.stats[3].band, Some(UpsideBand::Positive));

    assert_eq!(
        view.dcf,
        vec![
            "WACC: 8.5%",
            "Terminal Growth: 2.5%",
            "FCF (Next Yr): $3,400,000",
            "5Y FCF CAGR: 11.4%",
            "Shares Out: 1,250.4m",
            "Mid-year convention.",
        ]
    );

    let peers = view.peers.unwrap();
    assert_eq!(peers.rows[0].peer, "Globex (GBX)");
    assert_eq!(peers.rows[0].value, "24.5x");
    assert_eq!(peers.rows[1].peer, "Initech");
    assert_eq!(peers.rows[1].value, "19x");
    assert_eq!(
        peers.note.as_deref(),
        Some("Premium to peers justified by retention.")
    );
}

#[test]
fn empty_lists_produce_no_sections() {
    let view = ReaderView::from_post(&posts()[1]);
    // risks is present but empty, multiples has no peers.
    assert_eq!(view.sections.len(), 1);
    assert!(matches!(view.sections[0], Section::Thesis(_)));
    assert!(view.peers.is_none());
    assert!(view.dcf.is_empty());
    assert_eq!(view.stats[3].band, Some(UpsideBand::Flat));
}

#[test]
fn minimal_post_has_core_stats_only() {
    let view = ReaderView::from_post(&posts()[2]);
    assert_eq!(view.stats.len(), 4);
    assert_eq!(view.byline, "Brightline Retail • BRL • March 2025");
    // Exactly zero upside sits below the `> 0` threshold.
    assert_eq!(view.stats[3].band, Some(UpsideBand::Flat));
}

#[test]
fn unrecognized_method_is_shown_verbatim() {
    let view = ReaderView::from_post(&posts()[3]);
    assert_eq!(view.stats[0].value, "EV/EBITDA");
    assert_eq!(view.stats[1].value, "£-3.50");
    assert_eq!(view.stats[3].band, Some(UpsideBand::Strong));
}

#[test]
fn serializes_for_json_output() {
    let value = serde_json::to_value(ReaderView::from_post(&posts()[0])).unwrap();
    assert_eq!(value["sections"][0]["kind"], "thesis");
    assert_eq!(value["stats"][3]["band"], "positive");
    assert!(value["stats"][0].get("band").is_none());
}
