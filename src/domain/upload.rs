/// One uploaded file, held in memory for the lifetime of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(filename: String, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            filename,
            content_type,
            data,
        }
    }

    /// The declared content type mentions `pdf`, ignoring case.
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("pdf"))
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
