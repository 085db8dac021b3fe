pub mod cliente;
pub mod db;
pub mod errors;
pub mod region;

#[cfg(test)]
mod tests;
