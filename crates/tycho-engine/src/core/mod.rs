pub mod controller;
pub mod orbit;
pub mod registry;
pub mod time;
pub mod trail;
