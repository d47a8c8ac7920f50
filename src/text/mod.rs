// Text preprocessing — cleaning and stop-word filtering.

pub mod clean;
pub mod stopwords;
