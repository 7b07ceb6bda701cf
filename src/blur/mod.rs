pub mod engine;
pub mod kernel;
pub mod options;
pub mod pass;
pub mod plane;
pub mod premultiply;
