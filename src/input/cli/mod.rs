pub mod args;
pub mod logging;
pub mod parsers;
pub mod run;
