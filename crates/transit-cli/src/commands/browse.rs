use anyhow::Result;
use transit_core::InputWidget;

use super::Session;

/// Prints the catalog as loaded after `pages` pages.
pub async fn run(session: &Session, pages: usize) -> Result<()> {
    // Activation already fetched the first page
    for _ in 1..pages {
        if session.controller.load_more().await? == 0 {
            break;
        }
    }

    let lines = session.controller.visible_lines();
    if lines.is_empty() {
        println!("No lines in the catalog.");
        return Ok(());
    }
    for line in &lines {
        println!("{}", session.render(line));
    }
    let cursor = session.controller.cursor();
    println!("\n{} lines shown (next page starts at {})", lines.len(), cursor.skip);
    Ok(())
}

/// Types `query` into the search box and prints the matches.
pub async fn filter(session: &Session, query: &str) -> Result<()> {
    let controller = &session.controller;
    if let Some(focus) = controller.show_search_bar() {
        focus.await?;
    }
    session.input.set_value(query);
    controller.filter_from_input().await?;

    let matches = controller.visible_lines();
    if matches.is_empty() {
        println!("No lines match \"{}\".", query);
    }
    for line in &matches {
        println!("{}", session.render(line));
    }

    controller.hide_search_bar();
    Ok(())
}
