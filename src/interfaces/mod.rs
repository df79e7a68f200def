//! User interfaces other than the web page

pub mod cli;
