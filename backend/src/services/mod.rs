pub mod content;
pub mod downloads;
pub mod leads;
pub mod sitemap;
