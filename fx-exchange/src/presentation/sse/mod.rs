mod handler;

pub use handler::realtime;
