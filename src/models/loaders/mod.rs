pub mod pdf_loader;

pub use pdf_loader::{collect_uploads, load_pdf_folder};
