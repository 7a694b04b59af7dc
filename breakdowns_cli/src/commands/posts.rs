use anyhow::Result;
use breakdowns_lib::validation;
use breakdowns_lib::{CatalogConfig, Session};
use clap::Args;

use crate::output::{print_posts, OutputFormat};

#[derive(Args)]
pub struct PostsArgs {
    /// Search titles, companies, tickers, summaries, tags and sectors
    #[arg(long, short)]
    pub query: Option<String>,

    /// Exact sector name (case-sensitive), or All
    #[arg(long)]
    pub sector: Option<String>,

    /// Valuation method: All, DCF, Multiples, SOTP, Other
    #[arg(long)]
    pub method: Option<String>,
}

/// Applies the command-line filters to a session, validating each one.
pub fn apply_filters(session: &mut Session, args: &PostsArgs) -> Result<()> {
    if let Some(ref query) = args.query {
        let sanitized = validation::validate_query(query)?;
        session.set_query(&sanitized);
    }

    if let Some(ref sector) = args.sector {
        let choice = validation::validate_sector(sector)?;
        session.set_sector(choice.as_str());
    }

    if let Some(ref method) = args.method {
        let choice = validation::validate_method(method)?;
        session.set_method(choice.as_str())?;
    }

    Ok(())
}

pub async fn run(args: &PostsArgs, config: &CatalogConfig, format: &OutputFormat) -> Result<()> {
    let mut session = super::load_session(config).await;
    apply_filters(&mut session, args)?;

    let visible = session.visible();
    tracing::info!(
        "{} of {} posts match",
        visible.len(),
        session.repository().len()
    );
    print_posts(&visible, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakdowns_lib::types::{Post, ValuationMethod};
    use breakdowns_lib::{MethodChoice, PostRepository, SectorChoice};

    fn fixture_session() -> Session {
        let json_str = include_str!("../../../breakdowns_api/tests/fixtures/posts.json");
        let posts: Vec<Post> = serde_json::from_str(json_str).unwrap();
        Session::new(PostRepository::from_posts(posts))
    }

    fn args(query: Option<&str>, sector: Option<&str>, method: Option<&str>) -> PostsArgs {
        PostsArgs {
            query: query.map(String::from),
            sector: sector.map(String::from),
            method: method.map(String::from),
        }
    }

    fn visible_ids(session: &Session) -> Vec<String> {
        session.visible().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn no_flags_leave_filter_neutral() {
        let mut session = fixture_session();
        apply_filters(&mut session, &args(None, None, None)).unwrap();
        assert!(session.filter().is_neutral());
        assert_eq!(visible_ids(&session).len(), 4);
    }

    #[test]
    fn lowercase_method_empty_query_and_verbatim_sector() {
        let mut session = fixture_session();
        apply_filters(&mut session, &args(Some(""), Some("Technology"), Some("dcf"))).unwrap();

        let filter = session.filter();
        assert_eq!(filter.query, "");
        assert_eq!(filter.sector, SectorChoice::Sector("Technology".into()));
        assert_eq!(filter.method, MethodChoice::Method(ValuationMethod::Dcf));
        assert_eq!(visible_ids(&session), vec!["acme-dcf"]);
    }

    #[test]
    fn sector_is_not_case_folded() {
        let mut session = fixture_session();
        apply_filters(&mut session, &args(None, Some("technology"), None)).unwrap();
        assert_eq!(
            session.filter().sector,
            SectorChoice::Sector("technology".into())
        );
        assert!(session.visible().is_empty());
    }

    #[test]
    fn query_is_sanitized_before_matching() {
        let mut session = fixture_session();
        apply_filters(&mut session, &args(Some("AC\u{0007}ME"), None, None)).unwrap();
        assert_eq!(session.filter().query, "ACME");
        assert_eq!(visible_ids(&session), vec!["acme-dcf"]);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let mut session = fixture_session();
        let err = apply_filters(&mut session, &args(None, None, Some("EV/EBITDA"))).unwrap_err();
        assert!(err.to_string().contains("EV/EBITDA"));
        assert_eq!(session.filter().method, MethodChoice::All);
    }
}
