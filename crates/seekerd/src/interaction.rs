//! Terminal output and prompts for the CLI commands.
//!
//! Commands talk to the user through the [`UserInteraction`] trait rather
//! than printing directly, which keeps them testable with a scripted
//! implementation. [`ConsoleInteraction`] is the real terminal.

#![allow(missing_docs, clippy::missing_docs_in_private_items)]

use console::style;
use dialoguer::Confirm;
use seeker::resource::{Resource, SearchResults};

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static SUCCESS_PREFIX: &str = "✓ ";
pub static ERROR_PREFIX: &str = "✗ ";
pub static WARNING_PREFIX: &str = "! ";
pub static PROMPT_PREFIX: &str = "❯ ";
pub static ITEM_PREFIX: &str = "├─";
pub static LAST_ITEM_PREFIX: &str = "└─";
pub static CONTINUE_PREFIX: &str = "│  ";

/// Everything a command may want to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A single resource in detail
  Resource(&'a Resource),
  /// A full result page with pagination and facet context
  Results(&'a SearchResults),
  /// Autocomplete suggestions, most recent first
  Suggestions(&'a [String]),
  /// The recent-search history, most recent first
  History(&'a [String]),
  /// A completed operation
  Success(&'a str),
  /// A degraded-but-continuing situation
  Warning(&'a str),
  /// A failed operation
  Error(SeekerdError),
  /// Neutral information
  Info(&'a str),
}

/// Seam between command logic and the terminal.
pub trait UserInteraction {
  /// Asks a yes/no question; implementations may auto-accept.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Presents one piece of response content.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interactive terminal implementation with styled output.
pub struct ConsoleInteraction {
  /// Answer every confirmation with its default instead of prompting.
  accept_defaults: bool,
}

impl ConsoleInteraction {
  /// Creates a terminal interaction; `accept_defaults` skips all prompts.
  pub fn new(accept_defaults: bool) -> Self { Self { accept_defaults } }
}

impl UserInteraction for ConsoleInteraction {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(Confirm::new().with_prompt(format!("{PROMPT_PREFIX}{message}")).default(true).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Resource(resource) => print_resource(resource),
      ResponseContent::Results(results) => print_results(results),
      ResponseContent::Suggestions(suggestions) => print_list("Suggestions", suggestions),
      ResponseContent::History(entries) => print_list("Recent searches", entries),
      ResponseContent::Success(message) =>
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Warning(message) =>
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Error(e) => eprintln!("{} {}", style(ERROR_PREFIX).red(), style(e).red()),
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).cyan(), message),
    }
    Ok(())
  }
}

/// Prints one resource as a small tree of labeled fields.
fn print_resource(resource: &Resource) {
  println!("{} {}", ITEM_PREFIX, style(&resource.title).white().bold());

  let mut line = vec![resource.category.clone()];
  if let Some(difficulty) = resource.difficulty {
    line.push(difficulty.to_string());
  }
  if let Some(rating) = resource.rating {
    line.push(format!("{rating:.1}★"));
  }
  if let Some(minutes) = resource.reading_time {
    line.push(format!("{minutes} min"));
  }
  println!("{}{}", CONTINUE_PREFIX, style(line.join(" · ")).dim());

  if let Some(author) = &resource.author {
    println!("{}{}", CONTINUE_PREFIX, style(format!("by {author}")).dim());
  }
  if let Some(tags) = &resource.tags {
    if !tags.is_empty() {
      println!("{}{}", CONTINUE_PREFIX, style(tags.join(", ")).cyan());
    }
  }
  println!("{}{}", CONTINUE_PREFIX, style(&resource.url).blue().underlined());
}

/// Prints a result page: summary line, resources, then facet breakdowns.
fn print_results(results: &SearchResults) {
  let pagination = &results.pagination;
  println!(
    "{} Found {} resources (page {} of {})",
    style(SUCCESS_PREFIX).green(),
    style(pagination.total).white().bold(),
    pagination.page,
    pagination.pages.max(1),
  );

  for resource in &results.resources {
    print_resource(resource);
  }

  print_facet("Categories", &results.facets.categories);
  print_facet("Tags", &results.facets.tags);
  print_facet("Difficulties", &results.facets.difficulties);
}

/// Prints one facet dimension as `value (count)` pairs on a single line.
fn print_facet(label: &str, counts: &std::collections::BTreeMap<String, u64>) {
  if counts.is_empty() {
    return;
  }
  let rendered =
    counts.iter().map(|(value, count)| format!("{value} ({count})")).collect::<Vec<_>>().join(", ");
  println!("{} {}: {}", LAST_ITEM_PREFIX, style(label).green().bold(), rendered);
}

/// Prints a labeled, ordered list of strings.
fn print_list(label: &str, entries: &[String]) {
  println!("{} {}:", style(INFO_PREFIX).cyan(), style(label).white().bold());
  for (index, entry) in entries.iter().enumerate() {
    let prefix = if index + 1 == entries.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
    println!("{prefix} {entry}");
  }
}
