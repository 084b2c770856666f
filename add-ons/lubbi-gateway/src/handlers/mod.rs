//! API handlers. Each returns the `{ success, ... }` envelope the site scripts and the robot expect.

pub(crate) mod chat;
pub(crate) mod sensors;
pub(crate) mod vitals;
