pub mod create_completion;
