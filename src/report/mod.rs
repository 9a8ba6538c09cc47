pub mod console;
pub mod describe;
pub mod header;
pub mod html;
pub mod junit;
pub mod loader;
pub mod report_model;
pub mod writer;
