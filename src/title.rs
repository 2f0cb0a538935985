//! Display title composition

/// Decorative emoji for known catalog categories.
fn category_emoji(category: &str) -> Option<&'static str> {
    match category {
        "Basketball" => Some("🏀"),
        "Football" | "American Football" => Some("🏈"),
        "Soccer" => Some("⚽"),
        "Baseball" => Some("⚾"),
        "Hockey" | "Ice Hockey" => Some("🏒"),
        "Boxing" | "MMA" | "Fighting" | "Wrestling" => Some("🥊"),
        "Motorsports" | "Racing" => Some("🏎️"),
        "Tennis" => Some("🎾"),
        "Golf" => Some("⛳"),
        "Darts" => Some("🎯"),
        "24/7 Streams" | "TV" => Some("📺"),
        _ => None,
    }
}

/// Compose the playlist display title from category, name, sub-tag and the
/// time label. Empty segments are dropped; unknown categories contribute
/// no emoji prefix.
pub fn display_title(category: &str, name: &str, tag: &str, label: &str) -> String {
    let mut title = String::new();

    if let Some(emoji) = category_emoji(category) {
        title.push_str(emoji);
        title.push(' ');
    }
    title.push_str(name.trim());
    if !label.is_empty() {
        title.push_str(" - ");
        title.push_str(label);
    }
    let tag = tag.trim();
    if !tag.is_empty() {
        title.push_str(" - ");
        title.push_str(tag);
    }

    title
}
