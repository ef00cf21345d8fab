// Component-based rendering for the roster TUI

pub mod drawer;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod retake_block;
pub mod student_detail;
pub mod student_list;

pub use drawer::Drawer;
pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use retake_block::RetakeBlock;
pub use student_detail::{detail_lines, StudentDetail};
pub use student_list::StudentList;
