use anyhow::Result;
use breakdowns_lib::{CatalogConfig, PostRepository};

use crate::output::{print_options, OutputFormat};

pub async fn run_sectors(config: &CatalogConfig, format: &OutputFormat) -> Result<()> {
    let session = super::load_session(config).await;
    print_options("Sector", &session.sector_options(), format)
}

pub fn run_methods(format: &OutputFormat) -> Result<()> {
    let methods: Vec<String> = PostRepository::method_options()
        .iter()
        .map(|m| m.to_string())
        .collect();
    print_options("Method", &methods, format)
}
