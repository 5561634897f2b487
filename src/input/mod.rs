mod reader;

pub use reader::DocumentReader;
