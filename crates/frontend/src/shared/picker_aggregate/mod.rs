pub mod component;

pub use component::SearchPicker;
