mod context;

pub mod browse;
pub mod check;
pub mod demo;
pub mod guidance;
pub mod list;
pub mod show;

pub use context::HandlerContext;
