use std::sync::Arc;

use breakdowns_api::types::{Post, ValuationMethod};
use breakdowns_api::{filter_posts, FilterState, MethodChoice, PostPredicate, SectorChoice};

fn load_posts() -> Vec<Post> {
    let json = std::fs::read_to_string("tests/fixtures/posts.json").unwrap();
    serde_json::from_str(&json).unwrap()
}

fn ids<P: AsRef<Post>>(posts: &[&P]) -> Vec<String> {
    posts
        .iter()
        .map(|p| {
            let post: &Post = AsRef::<Post>::as_ref(*p);
            post.id.clone()
        })
        .collect()
}

#[test]
fn neutral_state_is_identity() {
    let posts = load_posts();
    let state = FilterState::default();
    assert!(state.is_neutral());
    assert_eq!(
        ids(&filter_posts(&posts, &state)),
        vec!["acme-dcf", "northsea-sotp", "brightline-mult", "harbor-other"]
    );
}

#[test]
fn empty_collection_yields_empty() {
    let posts: Vec<Post> = Vec::new();
    let state = FilterState::default()
        .with_query("acme")
        .with_sector(SectorChoice::from("Energy"));
    assert!(filter_posts(&posts, &state).is_empty());
    assert!(filter_posts(&posts, &FilterState::default()).is_empty());
}

#[test]
fn query_is_case_insensitive() {
    let posts = load_posts();
    let state = FilterState::default().with_query("ACME");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["acme-dcf"]);

    let state = FilterState::default().with_query("acme corp");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["acme-dcf"]);
}

#[test]
fn query_searches_tags_and_sector() {
    let posts = load_posts();
    let state = FilterState::default().with_query("ports");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["harbor-other"]);

    let state = FilterState::default().with_query("software moat");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["acme-dcf"]);

    let state = FilterState::default().with_query("energy");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["northsea-sotp"]);
}

#[test]
fn query_spans_field_boundaries() {
    let posts = load_posts();
    let state = FilterState::default().with_query("moat technology");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["acme-dcf"]);
}

#[test]
fn query_ignores_thesis() {
    let posts = load_posts();
    // "retail" appears in the North Sea thesis, which is not searched.
    let state = FilterState::default().with_query("retail");
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["brightline-mult"]);
}

#[test]
fn sector_is_exact_and_case_sensitive() {
    let posts = load_posts();
    let state = FilterState::default().with_sector(SectorChoice::from("Technology"));
    assert_eq!(
        ids(&filter_posts(&posts, &state)),
        vec!["acme-dcf", "brightline-mult"]
    );

    let state = FilterState::default().with_sector(SectorChoice::from("technology"));
    assert!(filter_posts(&posts, &state).is_empty());

    let state = FilterState::default().with_sector(SectorChoice::from("Tech"));
    assert!(filter_posts(&posts, &state).is_empty());
}

#[test]
fn method_filter() {
    let posts = load_posts();
    let state = FilterState::default().with_method(MethodChoice::Method(ValuationMethod::Dcf));
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["acme-dcf"]);

    let state = FilterState::default().with_method("Multiples".parse().unwrap());
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["brightline-mult"]);
}

#[test]
fn unrecognized_method_only_matches_all() {
    let posts = load_posts();
    let harbor = &posts[3];
    assert!(MethodChoice::All.matches(harbor));
    for method in ValuationMethod::KNOWN {
        assert!(!MethodChoice::Method(method).matches(harbor));
    }
    let raw = MethodChoice::Method(ValuationMethod::Unrecognized("EV/EBITDA".to_string()));
    assert!(!raw.matches(harbor));
}

#[test]
fn predicates_are_conjoined() {
    let posts = load_posts();
    let state = FilterState::default()
        .with_sector(SectorChoice::from("Technology"))
        .with_method(MethodChoice::Method(ValuationMethod::Multiples));
    assert_eq!(ids(&filter_posts(&posts, &state)), vec!["brightline-mult"]);

    let state = state.with_query("acme");
    assert!(filter_posts(&posts, &state).is_empty());
}

#[test]
fn result_matches_every_predicate_and_omits_none() {
    let posts = load_posts();
    let queries = ["", "a", "ACME", "oil", "PORTS", "zzz"];
    let sectors = ["All", "Technology", "Energy", "Industrials", "technology", "Missing"];
    let methods = ["All", "DCF", "Multiples", "SOTP", "Other"];

    // Expected results come from plain string checks, not the predicates.
    let text_matches = |p: &Post, q: &str| {
        let haystack = format!(
            "{} {} {} {} {} {}",
            p.title,
            p.company,
            p.ticker,
            p.summary,
            p.tags.join(" "),
            p.sector
        );
        haystack.to_lowercase().contains(&q.to_lowercase())
    };

    for q in queries {
        for s in sectors {
            for m in methods {
                let state = FilterState::default()
                    .with_query(q)
                    .with_sector(SectorChoice::from(s))
                    .with_method(m.parse().unwrap());
                let expected: Vec<String> = posts
                    .iter()
                    .filter(|p| text_matches(*p, q))
                    .filter(|p| s == "All" || p.sector == s)
                    .filter(|p| m == "All" || p.valuation.method.as_str() == m)
                    .map(|p| p.id.clone())
                    .collect();
                let got = ids(&filter_posts(&posts, &state));
                assert_eq!(got, expected, "query={q:?} sector={s} method={m}");
                for id in &got {
                    let post = posts.iter().find(|p| &p.id == id).unwrap();
                    assert!(state.matches(post));
                }
            }
        }
    }
}

#[test]
fn filters_shared_handles() {
    let posts: Vec<Arc<Post>> = load_posts().into_iter().map(Arc::new).collect();
    let state = FilterState::default().with_query("nse");
    let visible = filter_posts(&posts, &state);
    assert_eq!(visible.len(), 1);
    assert!(Arc::ptr_eq(visible[0], &posts[1]));
}
