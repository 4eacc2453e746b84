pub mod autostart;
pub mod catalogue;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod menu;
pub mod paths;
pub mod process;
pub mod tray;
pub mod updates;
