//! Featured list → globe orbit cards and home widgets.

use super::ContentItem;

/// Fixed `(angle, y)` slots around the globe, one per card.
pub const ORBIT_SLOTS: [(f32, f32); 6] = [
    (0.0, 0.8),
    (1.0, 0.1),
    (2.1, -0.7),
    (3.2, 0.9),
    (4.5, -0.4),
    (5.5, 0.3),
];

pub const CARD_TITLE_CHARS: usize = 18;
pub const TRENDING_TITLE_CHARS: usize = 15;
const FALLBACK_TAG: &str = "Anime";

/// A card orbiting the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCard {
    pub title: String,
    pub tag: String,
    pub image: String,
    pub category: &'static str,
    pub angle: f32,
    pub y: f32,
}

impl OrbitCard {
    /// Height at time `t` (seconds): gentle per-card bob around the slot.
    pub fn float_y(&self, t: f32) -> f32 {
        self.y + (t * 1.5 + self.angle).sin() * 0.05
    }
}

/// One trending-widget row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingEntry {
    pub title: String,
    pub tag: String,
    pub thumbnail: String,
}

/// Cards for the first six featured items.
pub fn orbit_cards(items: &[ContentItem]) -> Vec<OrbitCard> {
    items
        .iter()
        .zip(ORBIT_SLOTS)
        .map(|(item, (angle, y))| OrbitCard {
            title: truncate_chars(&item.title, CARD_TITLE_CHARS),
            tag: lead_tag(item),
            image: item.image.clone(),
            category: "SERIES",
            angle,
            y,
        })
        .collect()
}

/// Trending rows: the first two items, only when there are more than two.
pub fn trending(items: &[ContentItem]) -> Vec<TrendingEntry> {
    if items.len() <= 2 {
        return Vec::new();
    }
    items[..2]
        .iter()
        .map(|item| TrendingEntry {
            title: format!("{}...", truncate_chars(&item.title, TRENDING_TITLE_CHARS)),
            tag: lead_tag(item),
            thumbnail: item.image_small.clone(),
        })
        .collect()
}

/// New-release posters: items 2..5, only when there are more than five.
pub fn new_releases(items: &[ContentItem]) -> Vec<String> {
    if items.len() <= 5 {
        return Vec::new();
    }
    items[2..5].iter().map(|item| item.image_medium.clone()).collect()
}

fn lead_tag(item: &ContentItem) -> String {
    item.genre.clone().unwrap_or_else(|| FALLBACK_TAG.to_string())
}

/// First `max` characters of `s` (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn featured(n: usize) -> Vec<ContentItem> {
        (0..n)
            .map(|i| {
                let mut item = ContentItem::new(
                    format!("Fullmetal Alchemist Brotherhood {}", i),
                    "Action, Adventure",
                    format!("https://cdn/{}_l.jpg", i),
                    "FEATURED",
                );
                item.image_small = format!("https://cdn/{}_t.jpg", i);
                item.image_medium = format!("https://cdn/{}.jpg", i);
                item.genre = (i % 2 == 0).then(|| "Action".to_string());
                item
            })
            .collect()
    }

    #[test]
    fn orbit_cards_use_slots_and_truncate() {
        let cards = orbit_cards(&featured(8));
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].title, "Fullmetal Alchemis");
        assert_eq!(cards[0].title.chars().count(), CARD_TITLE_CHARS);
        assert_eq!(cards[0].tag, "Action");
        assert_eq!(cards[1].tag, "Anime");
        assert_eq!((cards[2].angle, cards[2].y), (2.1, -0.7));
        assert_eq!(cards[5].category, "SERIES");
    }

    #[test]
    fn orbit_cards_with_short_list() {
        assert_eq!(orbit_cards(&featured(2)).len(), 2);
        assert!(orbit_cards(&[]).is_empty());
    }

    #[test]
    fn float_stays_near_slot() {
        let card = &orbit_cards(&featured(1))[0];
        for step in 0..100 {
            let y = card.float_y(step as f32 * 0.1);
            assert!((y - card.y).abs() <= 0.05 + f32::EPSILON);
        }
    }

    #[test]
    fn trending_needs_more_than_two() {
        assert!(trending(&featured(2)).is_empty());
        let rows = trending(&featured(3));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Fullmetal Alche...");
        assert_eq!(rows[0].thumbnail, "https://cdn/0_t.jpg");
        assert_eq!(rows[1].tag, "Anime");
    }

    #[test]
    fn new_releases_take_middle_three() {
        assert!(new_releases(&featured(5)).is_empty());
        assert_eq!(
            new_releases(&featured(6)),
            vec!["https://cdn/2.jpg", "https://cdn/3.jpg", "https://cdn/4.jpg"]
        );
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_chars("進撃の巨人 The Final Season", 5), "進撃の巨人");
        assert_eq!(truncate_chars("K-On!", 18), "K-On!");
    }
}
