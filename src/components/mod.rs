pub mod footer;
pub mod header;
pub mod icons;
pub mod skill_bar;
