pub mod difficulty;
pub mod question;

pub use difficulty::Difficulty;
pub use question::{ExportDocument, NormalizedQuestion, RawQuestion, TriviaResponse};
