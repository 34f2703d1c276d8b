// Skill matching core: catalog construction, résumé skill extraction, job ranking.
// Pure functions over the immutable dataset; no I/O here.

pub mod catalog;
pub mod extractor;
pub mod ranker;
