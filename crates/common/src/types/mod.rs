use serde::Serialize;

/// Routes advertised by the index endpoint.
pub const FILE_ROUTES: &[&str] = &["/api/file", "/api/file/raw"];

/// Body of `GET /`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Index {
    pub status: &'static str,
    pub routes: &'static [&'static str],
}

impl Index {
    pub fn up() -> Self {
        Self { status: "up", routes: FILE_ROUTES }
    }
}
