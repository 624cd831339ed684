use crate::models::content_category::ContentCategory;

/// Renders the instruction for one category around a user description.
pub type TemplateFn = fn(&str) -> String;

/// Maps each category to its template. The description is interpolated as-is.
pub fn template(category: ContentCategory) -> TemplateFn {
    match category {
        ContentCategory::Email => email_prompt,
        ContentCategory::ResearchPaper => research_paper_prompt,
        ContentCategory::Shayari => shayari_prompt,
        ContentCategory::Joke => joke_prompt,
    }
}

pub fn build(category: ContentCategory, description: &str) -> String {
    template(category)(description)
}

fn email_prompt(description: &str) -> String {
    format!(
        "You are an AI that writes professional emails.
Write a clear, concise, and polite email about the following:
Topic/Description: \"{}\"
Make sure the email has a greeting, body, and a proper closing.",
        description
    )
}

fn research_paper_prompt(description: &str) -> String {
    format!(
        "You are an academic writer. Please write a research paper based on the description below.
Use the following structure:
  1. Abstract
  2. Introduction
  3. Literature Review
  4. Methodology
  5. Results and Discussion
  6. Conclusion and Future Work

Topic/Description: \"{}\"

Please ensure the final output is well-structured, formal, and detailed.",
        description
    )
}

fn shayari_prompt(description: &str) -> String {
    format!(
        "Write a beautiful Hindi shayari (short poem) based on the following topic/description:
\"{}\"
Make it emotional, melodic, and captivating.",
        description
    )
}

fn joke_prompt(description: &str) -> String {
    format!(
        "You are a stand-up comedian. Please write a short, light-hearted joke related to:
\"{}\"
Make it fun and witty.",
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_embeds_description_verbatim() {
        let description = "the \"quiet\" {ocean} at 3am";
        for category in ContentCategory::ALL {
            let prompt = build(category, description);
            assert!(prompt.contains(description), "{} prompt lost the description", category);
        }
    }

    #[test]
    fn test_email_template_keywords() {
        let prompt = build(ContentCategory::Email, "project delay");
        assert!(prompt.contains("professional emails"));
        assert!(prompt.contains("greeting, body, and a proper closing"));
    }

    #[test]
    fn test_research_paper_template_has_all_sections() {
        let prompt = build(ContentCategory::ResearchPaper, "solar panels");
        for section in [
            "Abstract",
            "Introduction",
            "Literature Review",
            "Methodology",
            "Results and Discussion",
            "Conclusion and Future Work",
        ] {
            assert!(prompt.contains(section), "missing section {}", section);
        }
        assert!(prompt.contains("formal"));
    }

    #[test]
    fn test_shayari_template_keywords() {
        let prompt = build(ContentCategory::Shayari, "monsoon");
        assert!(prompt.contains("Hindi shayari"));
        assert!(prompt.contains("emotional, melodic, and captivating"));
    }

    #[test]
    fn test_joke_template_uses_comedian_framing() {
        let prompt = build(ContentCategory::Joke, "a cat");
        assert!(prompt.contains("stand-up comedian"));
        assert!(prompt.contains("\"a cat\""));
        assert!(prompt.contains("fun and witty"));
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(
            build(ContentCategory::Joke, "taxes"),
            build(ContentCategory::Joke, "taxes")
        );
        assert_ne!(
            build(ContentCategory::Joke, "taxes"),
            build(ContentCategory::Email, "taxes")
        );
    }
}
