use std::fmt;
use std::fmt::{Display, Formatter};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    // Caller-supplied input violates a precondition. The reason code names the offending
    // field, e.g. "title" or "min_price".
    InvalidArgument {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
}

impl LibraryError {
    pub fn invalid_argument(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidArgument { message: message.to_string(), reason_code }
    }

    pub fn invalid_field(field: &str, message: &str) -> LibraryError {
        LibraryError::invalid_argument(message, Some(field.to_string()))
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidArgument { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for Repository .
pub type LibraryResult<T> = Result<T, LibraryError>;

// PageRequest is a pagination window after defaults and clamping have been applied
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PageRequest {
    // 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    // page <= 0 selects the first page, page_size <= 0 selects the default and anything
    // above MAX_PAGE_SIZE is clamped.
    pub fn new(page: i32, page_size: i32) -> Self {
        let page = if page <= 0 { 1 } else { page as usize };
        let page_size = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            (page_size as usize).min(MAX_PAGE_SIZE)
        };
        PageRequest { page, page_size }
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number
    pub page: usize,
    // page size
    pub page_size: usize,
    // number of records in the whole collection at the time of the query
    pub total: usize,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(request: PageRequest, total: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            page: request.page,
            page_size: request.page_size,
            total,
            records,
        }
    }
}
