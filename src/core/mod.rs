pub mod animator;
pub mod controls;
pub mod error;
pub mod explain;
pub mod export;
pub mod frame;
pub mod motion;
pub mod sprite;
pub mod trajectory;
pub mod window;
