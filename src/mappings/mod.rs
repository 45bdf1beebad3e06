pub mod modifier_catalog;

pub use modifier_catalog::MODIFIERS;
