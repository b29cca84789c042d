pub mod candidates;
pub mod categorizer;
pub mod pipeline;
pub mod skill_filter;

pub use candidates::{generate_candidates, normalize_phrase};
pub use categorizer::Categorizer;
pub use pipeline::SkillPipeline;
pub use skill_filter::SkillFilter;
