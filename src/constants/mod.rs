pub mod background;
pub mod game;
pub mod home;
