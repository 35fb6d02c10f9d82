use anyhow::Result;
use transit_core::InputWidget;

use super::Session;

pub fn recents(session: &Session) -> Result<()> {
    let recents = session.controller.recents();
    if recents.is_empty() {
        println!("No recent searches.");
    }
    for entry in &recents {
        println!(
            "{}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            session.render(&entry.line)
        );
    }
    Ok(())
}

pub async fn line(session: &Session, code: &str) -> Result<()> {
    let line = session.lookup(code).await?;
    let selection = session.controller.select_line(line).await;
    if !selection.history_saved {
        eprintln!("⚠️  The search was not added to your history");
    }
    Ok(())
}

/// Submits `text` through the search box, as if typed and confirmed.
pub async fn free_text(session: &Session, text: &str) -> Result<()> {
    session.input.set_value(text);
    let selection = session.controller.submit_search_box().await;
    if !selection.history_saved {
        eprintln!("⚠️  The search was not added to your history");
    }
    Ok(())
}
