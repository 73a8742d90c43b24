pub mod completion;
pub mod dashboard;
pub mod health;
pub mod server;
#[cfg(test)]
pub mod test;
