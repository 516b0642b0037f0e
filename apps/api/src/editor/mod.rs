// Editor helpers: free-text <-> list conversions, advisory validation and
// writing aids. The helpers are pure; `handlers` serves them over HTTP.

pub mod action_verbs;
pub mod certifications;
pub mod handlers;
pub mod skills;
pub mod tips;
pub mod validation;
