pub mod align;
pub mod html;
