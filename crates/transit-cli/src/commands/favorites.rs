use anyhow::Result;
use transit_application::FavoriteToggle;

use super::Session;

pub async fn toggle(session: &Session, code: &str) -> Result<()> {
    let line = session.lookup(code).await?;
    match session.controller.toggle_favorite(&line).await? {
        FavoriteToggle::Starred => println!("★ Starred line {}", line.code),
        FavoriteToggle::Unstarred => println!("☆ Unstarred line {}", line.code),
        FavoriteToggle::Unchanged => println!("Line {} was left as it was", line.code),
    }
    Ok(())
}

pub fn list(session: &Session) -> Result<()> {
    let favorites = session.controller.favorites();
    if favorites.is_empty() {
        println!("No favorite lines yet. Star one with `transit star <line>`.");
    }
    for line in &favorites {
        println!("{}", session.render(line));
    }
    Ok(())
}
