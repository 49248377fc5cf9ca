pub mod feedback;
pub mod notes;
pub mod ui;
