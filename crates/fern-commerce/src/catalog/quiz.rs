//! The style quiz: three questions that map a shopper onto style tags.

use serde::{Deserialize, Serialize};

/// How many style tags a finished quiz recommends.
const TOP_STYLES: usize = 3;

/// One selectable answer, carrying the styles it votes for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    /// Stable answer key within its question.
    pub id: String,
    /// Answer text.
    pub text: String,
    /// Styles this answer counts toward.
    pub styles: Vec<String>,
}

/// A single quiz question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizQuestion {
    /// Question text.
    pub prompt: String,
    /// The answers on offer.
    pub options: Vec<QuizOption>,
}

fn option(id: &str, text: &str, styles: [&str; 2]) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: text.to_string(),
        styles: styles.iter().map(|s| s.to_string()).collect(),
    }
}

/// The storefront's fixed three-question quiz.
pub fn style_quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            prompt: "What's your ideal self-care routine?".to_string(),
            options: vec![
                option("a", "Long bath with aromatherapy", ["Relaxing", "Spa"]),
                option("b", "Quick but effective routine", ["Clinical", "Effective"]),
                option("c", "Natural and organic products", ["Natural", "Eco-Friendly"]),
                option("d", "Luxury treatments and indulgence", ["Luxurious", "Anti-Aging"]),
            ],
        },
        QuizQuestion {
            prompt: "Your main skincare concern:".to_string(),
            options: vec![
                option("a", "Hydration and glow", ["Hydrating", "Refreshing"]),
                option("b", "Anti-aging and firmness", ["Anti-Aging", "Luxurious"]),
                option("c", "Clear and balanced skin", ["Purifying", "Deep-Clean"]),
                option("d", "Brightness and even tone", ["Clinical", "Effective"]),
            ],
        },
        QuizQuestion {
            prompt: "Your wellness priority:".to_string(),
            options: vec![
                option("a", "Relaxation and stress relief", ["Relaxing", "Aromatherapy"]),
                option("b", "Hair health and shine", ["Nourishing", "Repair"]),
                option("c", "Body care and moisturizing", ["Soothing", "Creamy"]),
                option("d", "Holistic wellness and balance", ["Therapeutic", "Relief"]),
            ],
        },
    ]
}

/// Score the chosen answers: count every style they carry and return the
/// top styles by count, most-voted first. Ties keep first-seen order.
pub fn score_answers(chosen: &[&QuizOption]) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for option in chosen {
        for style in &option.styles {
            match counts.iter_mut().find(|(name, _)| name == style) {
                Some((_, count)) => *count += 1,
                None => counts.push((style.clone(), 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_STYLES)
        .map(|(style, _)| style)
        .collect()
}
