mod pinger;

pub use pinger::{KeepAliveError, KeepAlivePinger, DEFAULT_INTERVAL, REQUEST_TIMEOUT};
