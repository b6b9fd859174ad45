//! Port traits - the client's boundaries with the outside world

pub mod outbound;
