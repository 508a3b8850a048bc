pub mod deck;
pub mod loaders;
pub mod report;

pub use deck::{is_pdf_file, EvaluationResult, FileSource, UploadedFile};
pub use loaders::{collect_uploads, load_pdf_folder};
pub use report::{BatchOutcome, DiagnosticRecord};
