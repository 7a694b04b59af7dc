//! Line-oriented interactive session.
//!
//! Each line is one user intent. Filter changes re-render the visible list
//! immediately; there is no debouncing.

use std::io::{BufRead, Write};

use anyhow::Result;
use breakdowns_lib::{validation, CatalogConfig, Intent, ReaderView, Session, Theme};

use crate::output::{print_options, print_posts, print_reader, OutputFormat};

const HELP: &str = "\
commands:
  search <text>    filter by free text (empty clears)
  sector <name>    filter by exact sector, or All
  method <name>    filter by valuation method, or All
  open <id>        open a post in the reader
  close            close the reader
  list             show the visible posts
  sectors          show sector options
  methods          show method options
  theme            toggle light/dark
  help             show this help
  quit             leave";

#[derive(Debug, PartialEq, Eq)]
pub enum BrowseCommand {
    Intent(Intent),
    List,
    Sectors,
    Methods,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<BrowseCommand>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let command = match verb {
        "" => return Ok(None),
        "search" | "q" => {
            BrowseCommand::Intent(Intent::SetQuery(validation::validate_query(rest)?))
        }
        "sector" => {
            let choice = validation::validate_sector(rest)?;
            BrowseCommand::Intent(Intent::SetSector(choice.as_str().to_string()))
        }
        "method" => {
            let choice = validation::validate_method(rest)?;
            BrowseCommand::Intent(Intent::SetMethod(choice.as_str().to_string()))
        }
        "open" => {
            let id = rest.trim();
            if id.is_empty() {
                anyhow::bail!("open needs a post id");
            }
            BrowseCommand::Intent(Intent::OpenPost(id.to_string()))
        }
        "close" => BrowseCommand::Intent(Intent::ClosePost),
        "theme" => BrowseCommand::Intent(Intent::ToggleTheme),
        "list" | "ls" => BrowseCommand::List,
        "sectors" => BrowseCommand::Sectors,
        "methods" => BrowseCommand::Methods,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        other => anyhow::bail!("unknown command '{}' (try 'help')", other),
    };
    Ok(Some(command))
}

fn render_list(session: &Session, format: &OutputFormat) -> Result<()> {
    print_posts(&session.visible(), format)
}

fn handle(session: &mut Session, command: BrowseCommand, format: &OutputFormat) -> Result<bool> {
    match command {
        BrowseCommand::Intent(Intent::OpenPost(id)) => {
            if session.open_post(&id) {
                if let Some(post) = session.reader().current() {
                    print_reader(&ReaderView::from_post(post), format)?;
                }
            } else {
                eprintln!("post not found: {}", id);
            }
        }
        BrowseCommand::Intent(Intent::ClosePost) => {
            session.close_post();
            render_list(session, format)?;
        }
        BrowseCommand::Intent(Intent::ToggleTheme) => {
            session.toggle_theme();
            let name = match session.theme() {
                Theme::Dark => "dark",
                Theme::Light => "light",
            };
            eprintln!("theme: {}", name);
        }
        BrowseCommand::Intent(intent) => {
            session.apply(intent)?;
            render_list(session, format)?;
        }
        BrowseCommand::List => render_list(session, format)?,
        BrowseCommand::Sectors => print_options("Sector", &session.sector_options(), format)?,
        BrowseCommand::Methods => {
            let methods: Vec<String> = session
                .method_options()
                .iter()
                .map(|m| m.to_string())
                .collect();
            print_options("Method", &methods, format)?
        }
        BrowseCommand::Help => eprintln!("{}", HELP),
        BrowseCommand::Quit => return Ok(false),
    }
    Ok(true)
}

pub async fn run(config: &CatalogConfig, format: &OutputFormat) -> Result<()> {
    let mut session = super::load_session(config).await;
    eprintln!(
        "{} posts loaded. Type 'help' for commands.",
        session.repository().len()
    );
    render_list(&session, format)?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprint!("> ");
        std::io::stderr().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match handle(&mut session, command, format) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}
