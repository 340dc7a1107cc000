use serde::{Deserialize, Serialize};

/// A displayable item of fetched content.
///
/// Implementors expose the fields the list controllers need: a stable
/// identifier, the text examined by search, and the numeric facet used
/// for bucket filtering.
pub trait ContentRecord: Clone + PartialEq + Send + 'static {
    fn record_id(&self) -> i64;

    /// Primary display text (searched case-insensitively).
    fn primary_text(&self) -> &str;

    /// Descriptive text (also searched). Empty when the record has none.
    fn secondary_text(&self) -> &str;

    /// Numeric facet (e.g. university count). Zero when not applicable.
    fn facet_count(&self) -> u32;

    /// Case-insensitive substring match against primary or secondary text.
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.primary_text().to_lowercase().contains(&needle)
            || self.secondary_text().to_lowercase().contains(&needle)
    }
}

/// One country study guide as served by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryGuide {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub flag_image: Option<String>,
    #[serde(default)]
    pub university_count: u32,
}

impl CountryGuide {
    /// Plain-text summary of the description: HTML tags stripped, cut to
    /// `max` characters with an ellipsis. Falls back to a generic blurb
    /// when the record has no description.
    pub fn summary(&self, max: usize) -> String {
        let stripped = self
            .description
            .as_deref()
            .map(strip_tags)
            .filter(|s| !s.trim().is_empty());
        match stripped {
            Some(text) => truncate_chars(text.trim(), max),
            None => format!("Explore top universities and programs in {}.", self.name),
        }
    }

    /// URL slug for the guide detail page (lowercased, spaces to dashes).
    pub fn guide_slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl ContentRecord for CountryGuide {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    fn facet_count(&self) -> u32 {
        self.university_count
    }
}

/// One student testimonial as served by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    /// Program or title, e.g. "MSc Data Science".
    #[serde(default)]
    pub designation: String,
    /// Placement outcome, e.g. the employer or university.
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Testimonial {
    /// Star rating clamped to the displayable 0..=5 range.
    pub fn stars(&self) -> u8 {
        self.rating.min(5)
    }

    /// Short label standing in for the avatar.
    ///
    /// The API sometimes carries pre-made initials in the image field
    /// instead of a URL; honor those, otherwise derive initials from the
    /// name (first letter of the first two words, uppercased).
    pub fn avatar_label(&self) -> String {
        if let Some(image) = self.image.as_deref() {
            if !image.is_empty() && !is_absolute_url(image) {
                return image.to_string();
            }
        }
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

impl ContentRecord for Testimonial {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn secondary_text(&self) -> &str {
        &self.content
    }

    fn facet_count(&self) -> u32 {
        u32::from(self.rating)
    }
}

/// Remove `<...>` tag runs, keeping only text content.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide(description: Option<&str>) -> CountryGuide {
        CountryGuide {
            id: 1,
            name: "New Zealand".to_string(),
            description: description.map(String::from),
            flag_image: None,
            university_count: 8,
        }
    }

    #[test]
    fn summary_strips_tags_and_truncates() {
        let g = guide(Some("<p>Great <b>universities</b> and scenery</p>"));
        assert_eq!(g.summary(200), "Great universities and scenery");
        assert_eq!(g.summary(5), "Great...");
    }

    #[test]
    fn summary_falls_back_when_description_missing() {
        let g = guide(None);
        assert_eq!(
            g.summary(200),
            "Explore top universities and programs in New Zealand."
        );
    }

    #[test]
    fn guide_slug_lowercases_and_dashes() {
        assert_eq!(guide(None).guide_slug(), "new-zealand");
    }

    #[test]
    fn matches_search_is_case_insensitive_over_both_fields() {
        let g = guide(Some("World-class RESEARCH programs"));
        assert!(g.matches_search("zealand"));
        assert!(g.matches_search("research"));
        assert!(!g.matches_search("atlantis"));
        assert!(g.matches_search(""));
    }

    #[test]
    fn avatar_label_prefers_api_initials_over_derived() {
        let mut t = Testimonial {
            id: 1,
            name: "Asha Sharma".to_string(),
            designation: String::new(),
            company: String::new(),
            rating: 9,
            content: String::new(),
            image: Some("AS".to_string()),
        };
        assert_eq!(t.avatar_label(), "AS");
        t.image = Some("https://cdn.example.com/asha.jpg".to_string());
        assert_eq!(t.avatar_label(), "AS");
        t.image = None;
        assert_eq!(t.avatar_label(), "AS");
        assert_eq!(t.stars(), 5);
    }
}
