//! Command implementations.

pub mod feedback;
pub mod recommend;
pub mod render;
pub mod theme;
pub mod wizard;

pub use self::feedback::execute_feedback;
pub use self::recommend::execute_recommend;
pub use self::render::execute_render;
pub use self::theme::execute_theme;
pub use self::wizard::execute_wizard;
