pub mod feedback;
pub mod series;
pub mod viewer;

pub use feedback::{list_feedback_handler, submit_feedback_handler, update_feedback_handler};

pub use series::{get_all_series_handler, get_series_handler};

pub use viewer::{create_viewer_handler, current_viewer_handler};
