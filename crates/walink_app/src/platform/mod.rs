mod app;
mod effects;

pub use app::run_app;
