pub mod common;
pub mod completion;
pub mod dataset;
pub mod figure;
pub mod health;
pub mod transform;
pub mod view;
