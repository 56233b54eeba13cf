//! Generic list page and form modal, parametrised by a `Resource`.
//!
//! `state`, `draft`, `cells` and `submit` are tested natively; `list` and
//! `form` wire them to Leptos signals.

pub mod cells;
pub mod draft;
pub mod form;
pub mod list;
pub mod state;
pub mod submit;

pub use form::ResourceFormModal;
pub use list::ResourceListPage;
