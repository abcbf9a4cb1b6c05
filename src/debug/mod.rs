
mod snapshot;
mod window;
