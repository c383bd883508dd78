pub mod thesis;

pub use thesis::{NewThesis, Thesis, ThesisWithKeywords};
