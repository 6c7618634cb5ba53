mod scan;

pub use scan::parse_components;
