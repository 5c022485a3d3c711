/// Python module exposing the generators over JSON
pub mod pylib;
