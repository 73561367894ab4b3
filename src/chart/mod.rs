pub mod hover;
pub mod path;
pub mod scale;
