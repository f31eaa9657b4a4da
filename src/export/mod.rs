pub mod fancy;

pub use fancy::FancyExport;
