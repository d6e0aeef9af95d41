pub mod app;
pub mod contact;
pub mod email;
pub mod state;

#[cfg(test)]
mod test_support;
