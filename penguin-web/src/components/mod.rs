pub mod controls;
pub mod hud;
pub mod journey_map;
pub mod modal;
pub mod popups;
pub mod shop;
