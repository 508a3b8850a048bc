pub mod pdf_document;

pub use pdf_document::PdfDocument;
