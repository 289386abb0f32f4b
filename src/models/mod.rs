// Models module - API payloads and the tracker's domain entities

pub mod account;
pub mod item;
pub mod progress;
pub mod responses;

pub use account::*;
pub use item::*;
pub use progress::*;
pub use responses::*;
