pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod window;
