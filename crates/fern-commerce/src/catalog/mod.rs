//! Product catalog module.
//!
//! Products, curated collections, and the style quiz.

mod collection;
mod product;
mod quiz;

pub use collection::Collection;
pub use product::{products_by_style, Product};
pub use quiz::{score_answers, style_quiz, QuizOption, QuizQuestion};
