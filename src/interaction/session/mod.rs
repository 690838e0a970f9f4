pub mod auto_close;
pub mod reset;
