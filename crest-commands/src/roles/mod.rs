mod editor;
pub(crate) mod messages;
pub mod roleicon;

pub use editor::SerenityRoleEditor;
