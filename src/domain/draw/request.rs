//! Draw request carried from the API layer into the service

/// A request to perform a draw.
///
/// The drawer identity comes from the authenticated session at the HTTP
/// layer; it is carried explicitly here so validation stays testable
/// without any transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub first_name: String,
    pub last_name: String,
    pub group_count: usize,
}

impl DrawRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        group_count: usize,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            group_count,
        }
    }
}
