pub mod ai_panel;
pub mod filters;
pub mod input;
pub mod logs;
pub mod progress;
pub mod results;
pub mod suggestions;
pub mod title;

pub use ai_panel::{AiPanel, render_ai_panel};
pub use filters::{FilterPanel, render_chips, render_panel};
pub use input::SearchInput;
pub use logs::LogPanel;
pub use progress::render_progress;
pub use results::{ResultsContext, render_results};
pub use suggestions::{Suggestions, render_suggestions};
pub use title::{TitleEdge, render_border_title};
