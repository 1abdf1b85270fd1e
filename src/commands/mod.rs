pub mod check;
pub mod form_view;
