// Presentation layer - Terminal input and rendering
pub mod terminal;
