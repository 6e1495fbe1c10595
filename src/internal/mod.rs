pub mod catalog;
pub mod export;
pub mod notification;
pub mod pipeline;
pub mod sampler;
pub mod ui;
pub mod upload;
