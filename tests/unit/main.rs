//! Unit test tree mirroring the src/ module layout

mod board;
mod compose;
mod io;
