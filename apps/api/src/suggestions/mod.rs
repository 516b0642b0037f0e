// Stateless suggestion engines: static lookup tables plus simple heuristics.

pub mod handlers;
pub mod headline;
pub mod keywords;
