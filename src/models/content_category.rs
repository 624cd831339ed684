use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// The four kinds of content the app can ask the model for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentCategory {
    Email,
    ResearchPaper,
    Shayari,
    Joke,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Email,
        ContentCategory::ResearchPaper,
        ContentCategory::Shayari,
        ContentCategory::Joke,
    ];

    /// Button label shown on the page.
    pub fn label(&self) -> &'static str {
        match self {
            ContentCategory::Email => "Email",
            ContentCategory::ResearchPaper => "Research Paper",
            ContentCategory::Shayari => "Shayari",
            ContentCategory::Joke => "Joke",
        }
    }

    /// Heading displayed above the generated text.
    pub fn heading(&self) -> String {
        format!("Generated {}", self.label())
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown content category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ContentCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(&[' ', '-'][..], "_").as_str() {
            "email" => Ok(ContentCategory::Email),
            "research_paper" => Ok(ContentCategory::ResearchPaper),
            "shayari" => Ok(ContentCategory::Shayari),
            "joke" => Ok(ContentCategory::Joke),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_headings() {
        assert_eq!(ContentCategory::ResearchPaper.label(), "Research Paper");
        assert_eq!(ContentCategory::Joke.heading(), "Generated Joke");
        assert_eq!(ContentCategory::Shayari.to_string(), "Shayari");
    }

    #[test]
    fn test_parse_from_label_and_wire_name() {
        assert_eq!("Research Paper".parse::<ContentCategory>().unwrap(), ContentCategory::ResearchPaper);
        assert_eq!("research_paper".parse::<ContentCategory>().unwrap(), ContentCategory::ResearchPaper);
        assert_eq!("JOKE".parse::<ContentCategory>().unwrap(), ContentCategory::Joke);
        assert!("limerick".parse::<ContentCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ContentCategory::ResearchPaper).unwrap();
        assert_eq!(json, "\"research_paper\"");
        let parsed: ContentCategory = serde_json::from_str("\"shayari\"").unwrap();
        assert_eq!(parsed, ContentCategory::Shayari);
    }
}
