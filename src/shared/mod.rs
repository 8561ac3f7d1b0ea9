pub mod errors;
pub mod logging;
pub mod listener;

// Available in fullstack mode (both client and server)
pub mod hooks;
