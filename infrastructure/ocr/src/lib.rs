pub mod tesseract;
pub mod tsv;
