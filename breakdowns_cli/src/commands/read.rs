use anyhow::{bail, Result};
use breakdowns_lib::{CatalogConfig, ReaderView};
use clap::Args;

use crate::output::{print_reader, OutputFormat};

#[derive(Args)]
pub struct ReadArgs {
    /// Post id
    pub id: String,
}

pub async fn run(args: &ReadArgs, config: &CatalogConfig, format: &OutputFormat) -> Result<()> {
    let mut session = super::load_session(config).await;
    if !session.open_post(&args.id) {
        bail!("post not found: {}", args.id);
    }
    if let Some(post) = session.reader().current() {
        print_reader(&ReaderView::from_post(post), format)?;
    }
    session.close_post();
    Ok(())
}
